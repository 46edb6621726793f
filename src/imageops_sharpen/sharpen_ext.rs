use image::{DynamicImage, Rgba};
use tracing::debug;

use crate::error::SharpenError;
use crate::imageops_sharpen::channels::PixelLayout;
use crate::imageops_sharpen::config::SharpenConfig;
use crate::imageops_sharpen::pipeline::sharpen_interleaved;
use crate::Image;

/// Trait for sharpening RGBA images while keeping their alpha channel.
///
/// The color channels are enhanced either with a Gaussian unsharp mask or
/// with a Laplacian high-frequency boost (see [`SharpenConfig`]). Every
/// color sample is rounded and clipped to the 8-bit range on its own, and
/// the alpha channel is copied through untouched.
///
/// Sharpening is not idempotent: applying it twice sharpens further.
pub trait SharpenExt {
    type Output;

    /// Sharpens with the default unsharp mask at the given strength.
    ///
    /// The input is left unmodified.
    ///
    /// # Errors
    ///
    /// See [`SharpenExt::sharpen_with`].
    ///
    /// # Examples
    /// ```
    /// use imageops_sharpen::{Image, SharpenExt};
    /// use image::Rgba;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let image: Image<Rgba<u8>> = Image::from_pixel(8, 8, Rgba([128, 128, 128, 255]));
    /// let sharpened = image.sharpen(0.8)?;
    /// assert_eq!(sharpened, image);
    /// # Ok(())
    /// # }
    /// # example().unwrap();
    /// ```
    fn sharpen(&self, strength: f32) -> Result<Self::Output, SharpenError> {
        self.sharpen_with(&SharpenConfig::default().with_strength(strength))
    }

    /// Sharpens with an explicit configuration, returning a new image.
    ///
    /// # Errors
    ///
    /// * `SharpenError::InvalidChannelCount` - the image is not 4-channel
    /// * `SharpenError::EmptyImage` - zero width or height
    /// * `SharpenError::InvalidParameter` - invalid strength or sigma
    /// * `SharpenError::AllocationFailure` - an intermediate buffer could not be allocated
    fn sharpen_with(&self, config: &SharpenConfig) -> Result<Self::Output, SharpenError>;

    /// Sharpens in place.
    ///
    /// On error the image is left exactly as it was.
    fn sharpen_mut(&mut self, config: &SharpenConfig) -> Result<&mut Self, SharpenError>;
}

impl SharpenExt for Image<Rgba<u8>> {
    type Output = Self;

    fn sharpen_with(&self, config: &SharpenConfig) -> Result<Self, SharpenError> {
        let (width, height) = self.dimensions();
        let data = sharpen_interleaved(self.as_raw(), width, height, PixelLayout::Rgba, config)?;

        Image::from_raw(width, height, data).ok_or(SharpenError::BufferCreationFailed)
    }

    fn sharpen_mut(&mut self, config: &SharpenConfig) -> Result<&mut Self, SharpenError> {
        *self = self.sharpen_with(config)?;
        Ok(self)
    }
}

/// Any 4-channel `DynamicImage` is accepted. 16-bit and float RGBA images are
/// reduced to 8 bits first, and the result is always `ImageRgba8`.
impl SharpenExt for DynamicImage {
    type Output = Self;

    fn sharpen_with(&self, config: &SharpenConfig) -> Result<Self, SharpenError> {
        let channels = usize::from(self.color().channel_count());
        if channels != PixelLayout::CHANNELS {
            return Err(SharpenError::InvalidChannelCount { channels });
        }

        let sharpened = match self {
            Self::ImageRgba8(image) => image.sharpen_with(config)?,
            other => {
                debug!(color = ?other.color(), "Converting to 8-bit RGBA before sharpening");
                other.to_rgba8().sharpen_with(config)?
            }
        };

        Ok(Self::ImageRgba8(sharpened))
    }

    fn sharpen_mut(&mut self, config: &SharpenConfig) -> Result<&mut Self, SharpenError> {
        *self = self.sharpen_with(config)?;
        Ok(self)
    }
}
