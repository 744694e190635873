//! Gradient-magnitude edge enhancement for photo overlays.
//!
//! Runs a 3x3 Sobel pair over the luminance plane and renders edges as
//! black pixels whose opacity grows with local gradient magnitude scaled
//! by `strength`. Flat regions come out fully transparent.

use crate::image::{PixelSource, RgbaBuffer};

// Sobel kernels, horizontal and vertical gradient.
const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Rec. 601 luma from RGBA8, ignoring alpha.
fn luminance(px: [u8; 4]) -> f32 {
    0.299 * px[0] as f32 + 0.587 * px[1] as f32 + 0.114 * px[2] as f32
}

/// Luminance with coordinates clamped to the image bounds, so the 3x3
/// neighborhood of a border pixel replicates the edge row/column.
fn luminance_clamped(image: &impl PixelSource, x: i64, y: i64) -> f32 {
    let cx = x.clamp(0, image.width() as i64 - 1) as u32;
    let cy = y.clamp(0, image.height() as i64 - 1) as u32;
    luminance(image.rgba(cx, cy))
}

/// Render an edge-highlight overlay for `image`.
///
/// The output has the input's dimensions. Each output pixel is black with
/// alpha proportional to the Sobel gradient magnitude at that point times
/// `strength`, normalized so a full-contrast step edge saturates at
/// `strength = 1`. For a fixed gradient the alpha is monotonic in
/// `strength`; `strength <= 0` produces a fully transparent buffer.
pub fn highlight_edges(image: &impl PixelSource, strength: f32) -> RgbaBuffer {
    let width = image.width();
    let height = image.height();

    if strength <= 0.0 || width == 0 || height == 0 {
        return RgbaBuffer::from_fn(width, height, |_, _| [0, 0, 0, 0]);
    }

    RgbaBuffer::from_fn(width, height, |x, y| {
        let mut gx = 0.0f32;
        let mut gy = 0.0f32;
        for (j, row) in SOBEL_X.iter().enumerate() {
            for (i, &wx) in row.iter().enumerate() {
                let lum = luminance_clamped(
                    image,
                    x as i64 + i as i64 - 1,
                    y as i64 + j as i64 - 1,
                );
                gx += wx as f32 * lum;
                gy += SOBEL_Y[j][i] as f32 * lum;
            }
        }
        let magnitude = (gx * gx + gy * gy).sqrt();
        // A hard black/white step yields |gx| = 4*255; dividing by 4 maps
        // it onto the full alpha range at strength 1.
        let alpha = (magnitude / 4.0 * strength).clamp(0.0, 255.0) as u8;
        [0, 0, 0, alpha]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_alpha(img: &RgbaBuffer) -> u8 {
        let mut max = 0;
        for y in 0..img.height() {
            for x in 0..img.width() {
                max = max.max(img.rgba(x, y)[3]);
            }
        }
        max
    }

    fn vertical_step(width: u32, height: u32) -> RgbaBuffer {
        RgbaBuffer::from_fn(width, height, |x, _| {
            if x < width / 2 {
                [0, 0, 0, 255]
            } else {
                [255, 255, 255, 255]
            }
        })
    }

    #[test]
    fn flat_image_has_no_edges() {
        let img = RgbaBuffer::from_fn(8, 8, |_, _| [120, 120, 120, 255]);
        let out = highlight_edges(&img, 1.0);
        assert_eq!(max_alpha(&out), 0);
    }

    #[test]
    fn step_edge_is_highlighted() {
        let img = vertical_step(8, 8);
        let out = highlight_edges(&img, 1.0);
        assert_eq!(out.width(), 8);
        assert_eq!(out.height(), 8);

        // Columns adjacent to the step carry the edge response.
        assert!(out.rgba(3, 4)[3] > 200);
        assert!(out.rgba(4, 4)[3] > 200);
        // Far from the step the response is zero.
        assert_eq!(out.rgba(0, 4)[3], 0);
        assert_eq!(out.rgba(7, 4)[3], 0);
    }

    #[test]
    fn output_is_monotonic_in_strength() {
        let img = RgbaBuffer::from_fn(8, 8, |x, _| {
            let v = (x * 20) as u8;
            [v, v, v, 255]
        });
        let weak = highlight_edges(&img, 0.2);
        let strong = highlight_edges(&img, 0.8);
        for y in 0..8 {
            for x in 0..8 {
                assert!(strong.rgba(x, y)[3] >= weak.rgba(x, y)[3]);
            }
        }
    }

    #[test]
    fn non_positive_strength_yields_blank_output() {
        let img = vertical_step(8, 8);
        for s in [0.0, -1.0] {
            let out = highlight_edges(&img, s);
            assert_eq!(out.width(), 8);
            assert_eq!(out.height(), 8);
            assert_eq!(max_alpha(&out), 0);
        }
    }

    #[test]
    fn border_pixels_use_replicated_neighborhood() {
        // A 1x1 image exercises clamping in every direction.
        let img = RgbaBuffer::from_fn(1, 1, |_, _| [200, 10, 30, 255]);
        let out = highlight_edges(&img, 1.0);
        // Replicated neighborhood is flat, so no edge response.
        assert_eq!(out.rgba(0, 0)[3], 0);
    }

    #[test]
    fn deterministic_output() {
        let img = vertical_step(16, 16);
        let a = highlight_edges(&img, 0.7);
        let b = highlight_edges(&img, 0.7);
        assert_eq!(a, b);
    }
}
