//! Internal utility functions for imageops-sharpen.
//!
//! Validation and buffer helpers shared by the sharpening variants and the
//! channel split/merge code.

use imageproc::definitions::Clamp;

use crate::error::SharpenError;

/// Rounds a floating-point sample and clips it into the `u8` range.
///
/// Clipping is applied to the single sample only, so out-of-range values
/// never shift the rest of the image.
///
/// # Arguments
///
/// * `value` - The sample to clip
///
/// # Returns
///
/// The nearest `u8`, saturated at 0 and 255
#[inline]
pub fn round_clamp_u8(value: f32) -> u8 {
    <u8 as Clamp<f32>>::clamp(value.round())
}

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise `SharpenError::EmptyImage`
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), SharpenError> {
    if width == 0 || height == 0 {
        Err(SharpenError::EmptyImage { width, height })
    } else {
        Ok(())
    }
}

/// Computes `width * height * channels` without overflowing.
///
/// An overflowing size can never be allocated, so it is reported as
/// `SharpenError::AllocationFailure`.
pub fn checked_buffer_len(width: u32, height: u32, channels: usize) -> Result<usize, SharpenError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or(SharpenError::AllocationFailure { width, height })
}

/// Allocates an empty vector with exactly `len` slots of capacity.
///
/// Uses `try_reserve_exact` so a refused allocation surfaces as an error
/// instead of aborting the process.
pub fn try_alloc<T>(len: usize, width: u32, height: u32) -> Result<Vec<T>, SharpenError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| SharpenError::AllocationFailure { width, height })?;
    Ok(buffer)
}
