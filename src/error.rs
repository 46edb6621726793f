use thiserror::Error;

/// Error type for sharpening operations
///
/// Every failure is reported before the caller's image is touched, so an
/// `Err` always leaves the input exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SharpenError {
    /// The image does not carry exactly three color channels and one alpha channel
    ///
    /// Returned for grayscale, RGB or any other non-RGBA input.
    #[error("Expected 4 channels (3 color + 1 alpha), got {channels}")]
    InvalidChannelCount { channels: usize },

    /// The image has zero width or zero height
    #[error("Image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// An intermediate buffer could not be allocated
    ///
    /// This covers both a refused allocation and a buffer size that does not
    /// fit in `usize`.
    #[error("Failed to allocate intermediate buffers for a {width}x{height} image")]
    AllocationFailure { width: u32, height: u32 },

    /// Invalid parameter provided to the operation
    ///
    /// Strength must be finite and non-negative, sigma finite and positive.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Raw pixel buffer length does not match the declared geometry
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Failed to create ImageBuffer from processed pixels
    #[error("Failed to create ImageBuffer from processed pixels")]
    BufferCreationFailed,
}
