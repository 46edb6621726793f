//! Test utilities for imageops-sharpen
//!
//! This module provides common fixtures for testing the sharpening filter.
//! It is only compiled when running tests.

use image::Rgba;
use imageproc::definitions::Image;

/// Creates a test RGBA image with predefined pixel values for testing.
///
/// This function creates a 2x2 test image with known pixel values including alpha:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
///
/// # Returns
/// A 2x2 RGBA image with u8 subpixels
pub fn create_test_rgba_image() -> Image<Rgba<u8>> {
    let mut image: Image<Rgba<u8>> = Image::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Creates a square image with one distinct pixel in the middle.
///
/// # Arguments
/// * `size` - Width and height of the image
/// * `background` - Color of every pixel but the center
/// * `dot` - Color of the center pixel at `(size / 2, size / 2)`
pub fn create_bright_dot_image(size: u32, background: Rgba<u8>, dot: Rgba<u8>) -> Image<Rgba<u8>> {
    let mut image = Image::from_pixel(size, size, background);
    image.put_pixel(size / 2, size / 2, dot);
    image
}

/// Collects the alpha channel of every pixel in row-major order.
pub fn alpha_plane(image: &Image<Rgba<u8>>) -> Vec<u8> {
    image.pixels().map(|pixel| pixel[3]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_with_valid_input_creates_image() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([50, 75, 25, 0]));
    }

    #[test]
    fn create_bright_dot_image_places_dot_in_center() {
        let image = create_bright_dot_image(5, Rgba([0, 0, 0, 255]), Rgba([9, 9, 9, 7]));
        assert_eq!(image.get_pixel(2, 2), &Rgba([9, 9, 9, 7]));
        assert_eq!(image.get_pixel(1, 2), &Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn alpha_plane_is_row_major() {
        assert_eq!(alpha_plane(&create_test_rgba_image()), vec![255, 128, 64, 0]);
    }
}
