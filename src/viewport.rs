//! Aspect-fit geometry: letterboxed content rectangles and the mapping of
//! annotation markers between native-content and viewport coordinates.
//!
//! Joint locations and pose keypoints are recorded against the photo's
//! native resolution; [`map_to_viewport`] is the single mechanism that
//! positions them correctly over the photo however it is later scaled and
//! letterboxed for display.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Point, Rect, Size};

/// A region mapped into viewport coordinates: the top-left corner of the
/// marker's frame plus its scaled extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappedRegion {
    pub leading_top: Point,
    pub size: Size,
}

fn check_content_size(content: Size) -> Result<()> {
    if content.width <= 0.0 || content.height <= 0.0 {
        return Err(Error::DegenerateContentSize {
            width: content.width,
            height: content.height,
        });
    }
    Ok(())
}

/// Scale-to-fit, preserve aspect ratio, center.
///
/// Returns the rectangle where the content is drawn inside the container:
/// fully contained, touching at least one pair of opposite container
/// edges, letterbox margins split evenly on the other axis. When content
/// and container share an aspect ratio the result is the container rect
/// itself.
///
/// A non-positive content dimension is an internal-contract violation and
/// fails fast rather than propagating NaN into rendering.
pub fn aspect_fit(content: Size, container: Size) -> Result<Rect> {
    check_content_size(content)?;

    let scale = (container.width / content.width).min(container.height / content.height);
    let width = content.width * scale;
    let height = content.height * scale;

    Ok(Rect::new(
        (container.width - width) / 2.0,
        (container.height - height) / 2.0,
        width,
        height,
    ))
}

/// Map a marker (center point + extent, in native content coordinates)
/// into the coordinate space of a viewport displaying the content
/// aspect-fitted into `fit_rect`.
///
/// Aspect-fit applies a single uniform scale, so the factor is taken from
/// the width ratio alone.
pub fn map_to_viewport(
    content_size: Size,
    fit_rect: Rect,
    center: Point,
    extent: Size,
) -> Result<MappedRegion> {
    check_content_size(content_size)?;

    let scale = fit_rect.width / content_size.width;
    let translated_center = fit_rect.origin() + center * scale;
    let size = extent * scale;
    let leading_top = Point::new(
        translated_center.x - size.width / 2.0,
        translated_center.y - size.height / 2.0,
    );

    Ok(MappedRegion { leading_top, size })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_content_in_square_container() {
        let rect = aspect_fit(Size::new(100.0, 150.0), Size::new(300.0, 300.0)).unwrap();
        assert_eq!(rect, Rect::new(50.0, 0.0, 200.0, 300.0));
    }

    #[test]
    fn landscape_content_in_square_container() {
        let rect = aspect_fit(Size::new(200.0, 100.0), Size::new(300.0, 300.0)).unwrap();
        assert_eq!(rect, Rect::new(0.0, 75.0, 300.0, 150.0));
    }

    #[test]
    fn matching_aspect_ratio_is_identity() {
        let rect = aspect_fit(Size::new(123.0, 456.0), Size::new(123.0, 456.0)).unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 123.0, 456.0));
    }

    #[test]
    fn fitted_rect_is_contained_and_touches_edges() {
        let container = Size::new(320.0, 200.0);
        let rect = aspect_fit(Size::new(97.0, 41.0), container).unwrap();
        assert!(rect.x >= 0.0 && rect.y >= 0.0);
        assert!(rect.x + rect.width <= container.width + 1e-3);
        assert!(rect.y + rect.height <= container.height + 1e-3);
        // One axis must span the container exactly.
        let spans_w = (rect.width - container.width).abs() < 1e-3;
        let spans_h = (rect.height - container.height).abs() < 1e-3;
        assert!(spans_w || spans_h);
    }

    #[test]
    fn marker_maps_into_letterboxed_viewport() {
        let region = map_to_viewport(
            Size::new(100.0, 150.0),
            Rect::new(50.0, 0.0, 200.0, 300.0),
            Point::new(10.0, 10.0),
            Size::new(4.0, 4.0),
        )
        .unwrap();
        assert_eq!(region.leading_top, Point::new(66.0, 16.0));
        assert_eq!(region.size, Size::new(8.0, 8.0));
    }

    #[test]
    fn degenerate_content_size_fails_fast() {
        let err = aspect_fit(Size::new(0.0, 100.0), Size::new(300.0, 300.0)).unwrap_err();
        assert!(matches!(err, Error::DegenerateContentSize { .. }));

        let err = map_to_viewport(
            Size::new(100.0, 0.0),
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Point::zero(),
            Size::new(1.0, 1.0),
        )
        .unwrap_err();
        assert!(matches!(err, Error::DegenerateContentSize { .. }));
    }
}
