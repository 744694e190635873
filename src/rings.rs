//! Concentric ring layout for severity-selector widgets.
//!
//! A selector renders `count` nested rectangles inside its bounds, drawn
//! outermost first. Ring 0 fills the widget; ring `count - 1` is the
//! innermost (highest severity) and is drawn at full base alpha.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Rect, Size};

/// Parameters for one ring of a severity selector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingSpec {
    /// Which ring, `0 <= index < count`. 0 is outermost.
    pub index: u32,
    /// Total number of rings, at least 1.
    pub count: u32,
    /// Widget bounds. Supply width ≈ height for visually circular rings.
    pub container: Size,
    /// Alpha of the innermost ring; outer rings fade toward transparent.
    pub base_alpha: f32,
}

impl RingSpec {
    /// Frame and alpha for this ring.
    pub fn layout(&self) -> Result<(Rect, f32)> {
        ring_rect(
            self.index,
            self.count,
            self.container.width,
            self.container.height,
            self.base_alpha,
        )
    }
}

/// Compute the `index`-th of `count` concentric rectangles nested in a
/// `width` x `height` box, with its draw alpha.
///
/// The inset step derives from the width alone and is applied to both
/// axes, so both dimensions shrink symmetrically. Inset and alpha grow
/// strictly with `index`: ring 0 is the full box, ring `count - 1` is the
/// innermost with `alpha = base_alpha`.
///
/// `count = 0` and `index >= count` are precondition violations and fail
/// fast.
pub fn ring_rect(
    index: u32,
    count: u32,
    width: f32,
    height: f32,
    base_alpha: f32,
) -> Result<(Rect, f32)> {
    if count == 0 {
        return Err(Error::ZeroRingCount);
    }
    if index >= count {
        return Err(Error::RingIndexOutOfRange { index, count });
    }

    let step = width / (2.0 * count as f32);
    let inset = index as f32 * step;
    let rect = Rect::new(inset, inset, width - 2.0 * inset, height - 2.0 * inset);
    let alpha = base_alpha * (index + 1) as f32 / count as f32;

    Ok((rect, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_ring_layout() {
        let (rect, alpha) = ring_rect(0, 2, 40.0, 40.0, 1.0).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 40.0, 40.0));
        assert_eq!(alpha, 0.5);

        let (rect, alpha) = ring_rect(1, 2, 40.0, 40.0, 1.0).unwrap();
        assert_eq!(rect, Rect::new(10.0, 10.0, 20.0, 20.0));
        assert_eq!(alpha, 1.0);
    }

    #[test]
    fn innermost_of_three() {
        let (rect, alpha) = ring_rect(2, 3, 66.0, 66.0, 0.5).unwrap();
        assert_eq!(rect, Rect::new(22.0, 22.0, 22.0, 22.0));
        assert_eq!(alpha, 0.5);
    }

    #[test]
    fn outermost_ring_fills_container() {
        for count in 1..6 {
            let (rect, _) = ring_rect(0, count, 50.0, 50.0, 0.8).unwrap();
            assert_eq!(rect, Rect::new(0.0, 0.0, 50.0, 50.0));
        }
    }

    #[test]
    fn innermost_ring_has_base_alpha() {
        for count in 1..6 {
            let (_, alpha) = ring_rect(count - 1, count, 50.0, 50.0, 0.8).unwrap();
            assert!((alpha - 0.8).abs() < 1e-6);
        }
    }

    #[test]
    fn inset_and_alpha_increase_with_index() {
        let mut prev_inset = -1.0;
        let mut prev_alpha = -1.0;
        for index in 0..5 {
            let (rect, alpha) = ring_rect(index, 5, 100.0, 100.0, 1.0).unwrap();
            assert!(rect.x > prev_inset);
            assert!(alpha > prev_alpha);
            prev_inset = rect.x;
            prev_alpha = alpha;
        }
    }

    #[test]
    fn invalid_specs_fail_fast() {
        assert!(matches!(
            ring_rect(0, 0, 40.0, 40.0, 1.0),
            Err(Error::ZeroRingCount)
        ));
        assert!(matches!(
            ring_rect(2, 2, 40.0, 40.0, 1.0),
            Err(Error::RingIndexOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn spec_struct_matches_free_function() {
        let spec = RingSpec {
            index: 1,
            count: 3,
            container: Size::new(60.0, 60.0),
            base_alpha: 0.9,
        };
        assert_eq!(
            spec.layout().unwrap(),
            ring_rect(1, 3, 60.0, 60.0, 0.9).unwrap()
        );
    }
}
