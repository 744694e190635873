//! # clinimetrics
//!
//! Geometric and photometric measurement kernel for clinical assessment
//! tasks: pure, stateless routines that turn raw sensor and image data
//! into calibrated measurements.
//!
//! This crate provides:
//! - **Angle math**: circular wraparound differences and quadrant
//!   classification for rotation-test yaw readings
//! - **Viewport geometry**: aspect-fit rectangles and mapping of joint /
//!   pose markers between native-photo and letterboxed display spaces
//! - **Coverage**: per-pixel HSV-saturation classification quantifying
//!   the marked (affected) fraction of a body-region photograph
//! - **Edges**: Sobel gradient-magnitude edge highlighting for photo
//!   overlays
//! - **Rings**: concentric rect/alpha layout for severity selectors
//!
//! Every routine is a pure function over value types: no UI state, no
//! I/O, no globals. Calls are deterministic and safe from any number of
//! threads; the image routines read their input and allocate only their
//! own output.
//!
//! ## Quick Start
//!
//! ```rust
//! use clinimetrics::{
//!     angle_difference, aspect_fit, selected_pixel_counts,
//!     RgbaBuffer, RotationDirection, Size,
//! };
//!
//! // How far did the cap turn clockwise between two yaw readings?
//! let turned = angle_difference(0.5, -0.5, RotationDirection::Clockwise);
//! assert!((turned - 1.0).abs() < 1e-12);
//!
//! // Where does a 100x150 photo land inside a 300x300 view?
//! let fit = aspect_fit(Size::new(100.0, 150.0), Size::new(300.0, 300.0)).unwrap();
//! assert_eq!((fit.x, fit.y), (50.0, 0.0));
//!
//! // What fraction of a silhouette is painted in the highlight color?
//! let marked = [229, 0, 84, 255];
//! let photo = RgbaBuffer::from_fn(32, 32, |_, _| marked);
//! let counts = selected_pixel_counts(&photo, marked, 0.25);
//! assert!(counts.coverage() > 0.98);
//! ```
//!
//! ## Custom Image Types
//!
//! Implement the [`PixelSource`] trait to run the image routines over
//! your own buffers:
//!
//! ```rust
//! use clinimetrics::PixelSource;
//!
//! struct MyImage { /* ... */ }
//!
//! impl PixelSource for MyImage {
//!     fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
//!         // Return the RGBA sample at (x, y)
//!         [0, 0, 0, 255]
//!     }
//!     fn width(&self) -> u32 { 640 }
//!     fn height(&self) -> u32 { 480 }
//! }
//! ```

mod angle;
mod coverage;
mod edges;
mod error;
mod image;
mod rings;
mod types;
mod viewport;

pub use angle::{
    angle_difference, degrees, degrees_clamped, normalize, quadrant, RotationDirection,
};
pub use coverage::selected_pixel_counts;
pub use edges::highlight_edges;
pub use error::{Error, Result};
pub use image::{PixelSource, RgbaBuffer};
pub use rings::{ring_rect, RingSpec};
pub use types::{PixelCounts, Point, Rect, Size};
pub use viewport::{aspect_fit, map_to_viewport, MappedRegion};
