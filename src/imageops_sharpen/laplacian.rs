use image::{GrayImage, Luma};
use imageproc::filter::laplacian_filter;
use imageproc::map::map_colors2;

use crate::imageops_sharpen::config::LaplacianDepth;
use crate::utils::round_clamp_u8;

/// Converts a raw Laplacian response to the 8-bit magnitude that is blended back
#[inline]
fn response_magnitude(response: i16, depth: LaplacianDepth) -> u8 {
    match depth {
        LaplacianDepth::Saturating8 => response.clamp(0, 255) as u8,
        LaplacianDepth::Signed16 => response.unsigned_abs().min(255) as u8,
    }
}

/// Laplacian high-frequency enhancement on one color plane.
///
/// The 3x3 operator comes from imageproc and replicates edge pixels at the
/// border, so a constant plane has a zero response everywhere.
pub(crate) fn laplacian_plane(plane: &GrayImage, depth: LaplacianDepth, strength: f32) -> GrayImage {
    let response = laplacian_filter(plane);

    map_colors2(plane, &response, |Luma([color]), Luma([edge])| {
        let magnitude = f32::from(response_magnitude(edge, depth));
        Luma([round_clamp_u8(strength.mul_add(magnitude, f32::from(color)))])
    })
}
