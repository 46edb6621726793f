use image::{GrayImage, Luma};
use imageproc::definitions::Image;
use imageproc::filter::gaussian_blur_f32;
use imageproc::map::{map_colors2, map_subpixels};

use crate::imageops_sharpen::config::DetailMode;
use crate::utils::round_clamp_u8;

/// Gaussian unsharp mask on one color plane.
///
/// The blur runs on an `f32` copy so a constant plane blurs to the same
/// constant; blurring the `u8` plane directly would truncate and leave a
/// one-level detail signal on flat areas.
///
/// `sigma` must already be validated as finite and positive.
pub(crate) fn unsharp_mask_plane(
    plane: &GrayImage,
    sigma: f32,
    detail: DetailMode,
    strength: f32,
) -> GrayImage {
    let plane: Image<Luma<f32>> = map_subpixels(plane, f32::from);
    let blurred: Image<Luma<f32>> = gaussian_blur_f32(&plane, sigma);

    map_colors2(&plane, &blurred, |Luma([color]), Luma([smooth])| {
        let detail = match detail {
            DetailMode::Absolute => (color - smooth).abs(),
            DetailMode::Signed => color - smooth,
        };
        Luma([round_clamp_u8(strength.mul_add(detail, color))])
    })
}
