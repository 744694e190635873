//! CLI for photographic area measurement and edge highlighting.
//!
//! Usage:
//!   clinimetrics <image>                        # Human-readable output
//!   clinimetrics <image> --json                 # JSON output
//!   clinimetrics <image> -o coverage.json       # Save to file
//!   clinimetrics <image> --edges edges.png      # Also write edge overlay

use clap::Parser;
use clinimetrics::{highlight_edges, selected_pixel_counts, RgbaBuffer};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clinimetrics")]
#[command(author, version, about = "Photographic area measurement", long_about = None)]
struct Args {
    /// Input image file
    #[arg(required = true)]
    image: PathBuf,

    /// Highlight color painted by the marking tool, as #RRGGBB
    #[arg(long, default_value = "#E50054")]
    target_color: String,

    /// Saturation distance below which a pixel counts as marked
    #[arg(long, default_value = "0.25")]
    threshold: f32,

    /// Write an edge-highlight overlay PNG to this path
    #[arg(long)]
    edges: Option<PathBuf>,

    /// Edge highlight strength
    #[arg(long, default_value = "1.0")]
    strength: f32,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output structure for JSON serialization
#[derive(Serialize)]
struct Output {
    image: String,
    width: u32,
    height: u32,
    target_color: String,
    threshold: f32,
    selected_pixels: u64,
    total_pixels: u64,
    coverage_percent: f32,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let target = parse_hex_color(&args.target_color)?;

    if args.verbose {
        eprintln!("Loading image {:?}...", args.image);
    }
    let img = image::open(&args.image)?.to_rgba8();
    let (width, height) = img.dimensions();
    let buffer = RgbaBuffer::new(img.into_raw(), width, height);

    if args.verbose {
        eprintln!("Classifying pixels against {}...", args.target_color);
    }
    let counts = selected_pixel_counts(&buffer, target, args.threshold);

    if let Some(ref path) = args.edges {
        if args.verbose {
            eprintln!("Writing edge overlay to {:?}...", path);
        }
        let overlay = highlight_edges(&buffer, args.strength);
        let out = image::RgbaImage::from_raw(width, height, overlay.into_raw())
            .ok_or("edge overlay dimensions mismatch")?;
        out.save(path)?;
    }

    let output = Output {
        image: args.image.display().to_string(),
        width,
        height,
        target_color: args.target_color.clone(),
        threshold: args.threshold,
        selected_pixels: counts.selected,
        total_pixels: counts.total,
        coverage_percent: counts.coverage() * 100.0,
    };

    let output_str = if args.json {
        serde_json::to_string_pretty(&output)?
    } else {
        format_human_readable(&output)
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output_str)?;
        if args.verbose {
            eprintln!("Output written to {:?}", path);
        }
    } else {
        println!("{}", output_str);
    }

    Ok(())
}

/// Parse a #RRGGBB or RRGGBB string into an opaque RGBA color.
fn parse_hex_color(s: &str) -> Result<[u8; 4], Box<dyn std::error::Error>> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(format!("invalid color {:?}: expected #RRGGBB", s).into());
    }
    let r = u8::from_str_radix(&hex[0..2], 16)?;
    let g = u8::from_str_radix(&hex[2..4], 16)?;
    let b = u8::from_str_radix(&hex[4..6], 16)?;
    Ok([r, g, b, 255])
}

fn format_human_readable(output: &Output) -> String {
    let mut s = String::new();

    s.push_str(&format!(
        "Image: {} ({}x{})\n",
        output.image, output.width, output.height
    ));
    s.push_str(&format!(
        "Target color: {} (threshold {:.2})\n",
        output.target_color, output.threshold
    ));

    if output.total_pixels == 0 {
        s.push_str("\nNo opaque pixels found.\n");
        return s;
    }

    s.push_str(&format!(
        "\nMarked area: {:.1}% ({} of {} pixels)\n",
        output.coverage_percent, output.selected_pixels, output.total_pixels
    ));

    s
}
