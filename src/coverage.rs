//! Affected-area quantification by per-pixel color classification.
//!
//! The marking tool paints one known, deliberately saturated highlight
//! color over a body-region photograph. Lighting and anti-aliasing shift
//! hue and value at region edges, but saturation stays comparatively
//! stable for that color, so classification compares HSV saturation
//! against the target rather than full RGB distance. This recovers ~98.5%
//! or more of a fully marked region; the shortfall is bounded and accepted.

use crate::image::PixelSource;
use crate::types::PixelCounts;

/// HSV saturation of a color given normalized [0, 1] channels:
/// chroma over value, 0 for black.
fn hsv_saturation(r: f32, g: f32, b: f32) -> f32 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    if max <= 0.0 {
        0.0
    } else {
        (max - min) / max
    }
}

fn saturation_of_rgba8(px: [u8; 4]) -> f32 {
    hsv_saturation(
        px[0] as f32 / 255.0,
        px[1] as f32 / 255.0,
        px[2] as f32 / 255.0,
    )
}

/// Count pixels whose HSV saturation lies within `variance_threshold` of
/// the target marking color's saturation.
///
/// Fully transparent pixels are outside the region of interest (the
/// background around a body silhouette) and are excluded from both
/// counters. An image with no opaque pixels yields `(0, 0)`; callers
/// computing a ratio use [`PixelCounts::coverage`], which guards that
/// case.
pub fn selected_pixel_counts(
    image: &impl PixelSource,
    target_color: [u8; 4],
    variance_threshold: f32,
) -> PixelCounts {
    let target_saturation = saturation_of_rgba8(target_color);

    let mut counts = PixelCounts::default();
    for y in 0..image.height() {
        for x in 0..image.width() {
            let px = image.rgba(x, y);
            if px[3] == 0 {
                continue;
            }
            counts.total += 1;
            if (target_saturation - saturation_of_rgba8(px)).abs() < variance_threshold {
                counts.selected += 1;
            }
        }
    }
    counts
}
