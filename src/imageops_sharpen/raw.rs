use crate::error::SharpenError;
use crate::imageops_sharpen::channels::PixelLayout;
use crate::imageops_sharpen::config::SharpenConfig;
use crate::imageops_sharpen::pipeline::sharpen_interleaved;

/// Borrowed interleaved pixel buffer, as handed over by a host bitmap bridge
///
/// `channels` is what the host reports for the buffer; only 4 is accepted.
/// `layout` says where red, green, blue and alpha sit inside each pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawImage<'a> {
    pub data: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub channels: usize,
    pub layout: PixelLayout,
}

impl<'a> RawImage<'a> {
    /// Describes a 4-channel buffer in the given layout
    pub const fn new(data: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            data,
            width,
            height,
            channels: PixelLayout::CHANNELS,
            layout,
        }
    }

    /// Overrides the reported channel count
    #[must_use]
    pub fn with_channels(mut self, channels: usize) -> Self {
        self.channels = channels;
        self
    }
}

/// Sharpens a raw interleaved buffer and returns a new buffer in the same layout.
///
/// The input slice is only read. Alpha bytes are copied through unchanged
/// and color bytes are written back to the slots they were read from.
///
/// # Errors
///
/// * `SharpenError::InvalidChannelCount` - `channels` is not 4
/// * `SharpenError::EmptyImage` - zero width or height
/// * `SharpenError::BufferSizeMismatch` - `data.len() != width * height * 4`
/// * `SharpenError::InvalidParameter` - invalid strength or sigma
/// * `SharpenError::AllocationFailure` - an intermediate buffer could not be allocated
///
/// # Examples
///
/// ```
/// use imageops_sharpen::{sharpen_raw, PixelLayout, RawImage, SharpenConfig};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let bgra = vec![128u8; 4 * 4 * 4];
/// let raw = RawImage::new(&bgra, 4, 4, PixelLayout::Bgra);
/// let sharpened = sharpen_raw(raw, &SharpenConfig::default())?;
/// assert_eq!(sharpened, bgra);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn sharpen_raw(image: RawImage<'_>, config: &SharpenConfig) -> Result<Vec<u8>, SharpenError> {
    if image.channels != PixelLayout::CHANNELS {
        return Err(SharpenError::InvalidChannelCount {
            channels: image.channels,
        });
    }

    sharpen_interleaved(image.data, image.width, image.height, image.layout, config)
}
