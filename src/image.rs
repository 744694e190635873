/// Trait for reading RGBA samples from an image.
///
/// Coordinates must be in bounds; the kernel's scan loops guarantee this
/// themselves (the edge highlighter clamps its neighborhood coordinates).
pub trait PixelSource {
    /// RGBA channels at (x, y), 8 bits each.
    fn rgba(&self, x: u32, y: u32) -> [u8; 4];

    /// Image dimensions.
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// A simple row-major RGBA8 buffer implementing [`PixelSource`].
///
/// Kernel outputs are freshly allocated buffers; inputs are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbaBuffer {
    /// Wrap an existing RGBA8 buffer. `data.len()` must equal
    /// `width * height * 4`.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        Self {
            data,
            width,
            height,
        }
    }

    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> [u8; 4],
    {
        let mut data = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSource for RgbaBuffer {
    fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
