use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "degenerate content size {width}x{height}: both dimensions must be positive"
    )]
    DegenerateContentSize { width: f32, height: f32 },

    #[error("ring count must be at least 1")]
    ZeroRingCount,

    #[error("ring index {index} out of range for {count} rings")]
    RingIndexOutOfRange { index: u32, count: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
