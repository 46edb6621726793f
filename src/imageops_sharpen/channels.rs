use image::GrayImage;
use itertools::izip;

use crate::error::SharpenError;
use crate::utils::{checked_buffer_len, try_alloc};

/// Channel order inside one interleaved 4-byte pixel
///
/// Filtering always runs on planes in canonical red, green, blue order.
/// The layout records where those channels live in the caller's buffer so
/// they can be pulled out on input and put back in the same slots on output.
/// Mixing up `Rgba` and `Bgra` swaps red and blue in the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PixelLayout {
    /// `[R, G, B, A]`, the layout of `image::Rgba` and of Android `ARGB_8888` bitmaps in memory
    #[default]
    Rgba,
    /// `[B, G, R, A]`
    Bgra,
    /// `[A, R, G, B]`
    Argb,
    /// `[A, B, G, R]`
    Abgr,
}

impl PixelLayout {
    /// Number of interleaved channels every layout describes
    pub const CHANNELS: usize = 4;

    /// Byte offsets of red, green and blue inside one pixel
    pub const fn color_offsets(self) -> [usize; 3] {
        match self {
            Self::Rgba => [0, 1, 2],
            Self::Bgra => [2, 1, 0],
            Self::Argb => [1, 2, 3],
            Self::Abgr => [3, 2, 1],
        }
    }

    /// Byte offset of alpha inside one pixel
    pub const fn alpha_offset(self) -> usize {
        match self {
            Self::Rgba | Self::Bgra => 3,
            Self::Argb | Self::Abgr => 0,
        }
    }
}

/// Red, green and blue planes, always in that order
pub(crate) type ColorPlanes = [GrayImage; 3];

/// An RGBA image taken apart into color planes and an alpha plane
#[derive(Debug)]
pub(crate) struct SplitImage {
    pub color: ColorPlanes,
    pub alpha: GrayImage,
}

/// Splits interleaved pixels into canonical color planes and the alpha plane.
///
/// # Errors
///
/// * `SharpenError::BufferSizeMismatch` - `data` is not `width * height * 4` bytes
/// * `SharpenError::AllocationFailure` - a plane could not be allocated
pub(crate) fn split_alpha(
    data: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<SplitImage, SharpenError> {
    let expected = checked_buffer_len(width, height, PixelLayout::CHANNELS)?;
    if data.len() != expected {
        return Err(SharpenError::BufferSizeMismatch {
            expected,
            actual: data.len(),
        });
    }

    let pixel_count = expected / PixelLayout::CHANNELS;
    let mut red = try_alloc(pixel_count, width, height)?;
    let mut green = try_alloc(pixel_count, width, height)?;
    let mut blue = try_alloc(pixel_count, width, height)?;
    let mut alpha = try_alloc(pixel_count, width, height)?;

    let [red_at, green_at, blue_at] = layout.color_offsets();
    let alpha_at = layout.alpha_offset();

    for pixel in data.chunks_exact(PixelLayout::CHANNELS) {
        red.push(pixel[red_at]);
        green.push(pixel[green_at]);
        blue.push(pixel[blue_at]);
        alpha.push(pixel[alpha_at]);
    }

    let to_plane = |samples: Vec<u8>| {
        GrayImage::from_raw(width, height, samples).ok_or(SharpenError::BufferCreationFailed)
    };

    Ok(SplitImage {
        color: [to_plane(red)?, to_plane(green)?, to_plane(blue)?],
        alpha: to_plane(alpha)?,
    })
}

/// Interleaves color planes with an alpha plane back into `layout` order.
///
/// # Errors
///
/// * `SharpenError::BufferCreationFailed` - plane dimensions disagree
/// * `SharpenError::AllocationFailure` - the output could not be allocated
pub(crate) fn merge_alpha(
    color: &ColorPlanes,
    alpha: &GrayImage,
    layout: PixelLayout,
) -> Result<Vec<u8>, SharpenError> {
    let (width, height) = alpha.dimensions();
    if color.iter().any(|plane| plane.dimensions() != (width, height)) {
        return Err(SharpenError::BufferCreationFailed);
    }

    let len = checked_buffer_len(width, height, PixelLayout::CHANNELS)?;
    let mut data = try_alloc(len, width, height)?;

    let [red, green, blue] = color;
    let [red_at, green_at, blue_at] = layout.color_offsets();
    let alpha_at = layout.alpha_offset();

    for (&r, &g, &b, &a) in izip!(
        red.as_raw(),
        green.as_raw(),
        blue.as_raw(),
        alpha.as_raw()
    ) {
        let mut pixel = [0u8; PixelLayout::CHANNELS];
        pixel[red_at] = r;
        pixel[green_at] = g;
        pixel[blue_at] = b;
        pixel[alpha_at] = a;
        data.extend_from_slice(&pixel);
    }

    Ok(data)
}
