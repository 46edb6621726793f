//! Unsharp-mask and Laplacian sharpening for RGBA images.
//!
//! Only the color channels are sharpened. The alpha channel of every pixel
//! passes through unchanged, and each color sample is clipped to `0..=255`
//! on its own.
//!
//! ```
//! use imageops_sharpen::{Image, LaplacianDepth, SharpenConfig, SharpenExt};
//! use image::Rgba;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut image: Image<Rgba<u8>> = Image::from_pixel(16, 16, Rgba([40, 40, 40, 128]));
//! image.put_pixel(8, 8, Rgba([180, 180, 180, 255]));
//!
//! let unsharp = image.sharpen(1.0)?;
//! let laplacian = image.sharpen_with(&SharpenConfig::laplacian(LaplacianDepth::Signed16, 0.5))?;
//! assert_eq!(unsharp.get_pixel(0, 0)[3], 128);
//! assert_eq!(laplacian.get_pixel(8, 8)[3], 255);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod error;
mod imageops_sharpen;
#[cfg(test)]
mod test_utils;
mod utils;

pub use error::SharpenError;
pub use imageops_sharpen::channels::PixelLayout;
pub use imageops_sharpen::config::{
    DetailMode, LaplacianDepth, SharpenConfig, SharpenMethod, MAX_SIGMA, MIN_SIGMA,
    OVER_SHARPEN_THRESHOLD,
};
pub use imageops_sharpen::raw::{sharpen_raw, RawImage};
pub use imageops_sharpen::sharpen_ext::SharpenExt;
pub use imageproc::definitions::Image;
