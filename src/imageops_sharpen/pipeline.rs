use tracing::{debug, enabled, instrument, trace, warn, Level};

use crate::error::SharpenError;
use crate::imageops_sharpen::channels::{
    merge_alpha, split_alpha, ColorPlanes, PixelLayout, SplitImage,
};
use crate::imageops_sharpen::config::{SharpenConfig, SharpenMethod, OVER_SHARPEN_THRESHOLD};
use crate::imageops_sharpen::laplacian::laplacian_plane;
use crate::imageops_sharpen::unsharp_mask::unsharp_mask_plane;
use crate::utils::validate_non_empty_image;

/// Runs the configured variant over each color plane independently.
fn sharpen_planes(color: &ColorPlanes, config: &SharpenConfig) -> ColorPlanes {
    let strength = config.strength;
    match config.method {
        SharpenMethod::UnsharpMask { sigma, detail } => color
            .each_ref()
            .map(|plane| unsharp_mask_plane(plane, sigma, detail, strength)),
        SharpenMethod::Laplacian { depth } => color
            .each_ref()
            .map(|plane| laplacian_plane(plane, depth, strength)),
    }
}

/// Byte offset of the pixel nearest the image center
fn center_offset(width: u32, height: u32) -> usize {
    let row = (height / 2) as usize;
    let column = (width / 2) as usize;
    (row * width as usize + column) * PixelLayout::CHANNELS
}

/// Sharpens interleaved 4-channel pixels and returns a new buffer in the same layout.
///
/// Every entry point funnels into this function: the color channels are
/// split from alpha, sharpened and clipped per sample, then merged back with
/// the untouched alpha plane. All intermediate planes are owned by this call
/// and dropped on return, including early error returns.
///
/// # Errors
///
/// * `SharpenError::EmptyImage` - zero width or height
/// * `SharpenError::InvalidParameter` - invalid strength or sigma
/// * `SharpenError::BufferSizeMismatch` - `data` does not hold `width * height` pixels
/// * `SharpenError::AllocationFailure` - an intermediate buffer could not be allocated
#[instrument(level = "debug", skip(data, config), fields(strength = config.strength))]
pub(crate) fn sharpen_interleaved(
    data: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    config: &SharpenConfig,
) -> Result<Vec<u8>, SharpenError> {
    validate_non_empty_image(width, height)?;
    config.validate()?;
    if config.is_over_sharpening() {
        warn!(
            strength = config.strength,
            threshold = OVER_SHARPEN_THRESHOLD,
            "Strength is likely to over-sharpen fine features"
        );
    }

    let SplitImage { color, alpha } = split_alpha(data, width, height, layout)?;
    debug!("Split color planes from alpha");

    let sharpened = sharpen_planes(&color, config);
    debug!(method = ?config.method, "Color planes sharpened and clipped");

    let output = merge_alpha(&sharpened, &alpha, layout)?;
    debug!("Merged sharpened planes with original alpha");

    if enabled!(Level::TRACE) {
        let center = center_offset(width, height);
        trace!(
            before = ?data.get(center..center + PixelLayout::CHANNELS),
            after = ?output.get(center..center + PixelLayout::CHANNELS),
            "Center pixel"
        );
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imageops_sharpen::config::LaplacianDepth;

    #[test]
    fn center_offset_points_at_middle_pixel() {
        assert_eq!(center_offset(1, 1), 0);
        assert_eq!(center_offset(3, 3), 16);
        assert_eq!(center_offset(4, 2), (4 + 2) * 4);
    }

    #[test]
    fn rejects_empty_image_before_anything_else() {
        let result = sharpen_interleaved(&[], 0, 3, PixelLayout::Rgba, &SharpenConfig::default());
        assert_eq!(
            result,
            Err(SharpenError::EmptyImage {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SharpenConfig::unsharp_mask(0.0, 1.0);
        let result = sharpen_interleaved(&[0; 4], 1, 1, PixelLayout::Rgba, &config);
        assert!(matches!(result, Err(SharpenError::InvalidParameter(_))));
    }

    #[test]
    fn keeps_alpha_for_both_methods() {
        let data: Vec<u8> = (0..3 * 3)
            .flat_map(|i| [(i * 25) as u8, 100, (255 - i * 20) as u8, (i * 28) as u8])
            .collect();

        for config in [
            SharpenConfig::default().with_strength(1.5),
            SharpenConfig::laplacian(LaplacianDepth::Signed16, 1.5),
        ] {
            let output = sharpen_interleaved(&data, 3, 3, PixelLayout::Rgba, &config).unwrap();
            assert_eq!(output.len(), data.len());
            for (before, after) in data.chunks_exact(4).zip(output.chunks_exact(4)) {
                assert_eq!(before[3], after[3]);
            }
        }
    }

    #[test]
    fn center_pixel_trace_matches_untraced_output() {
        let data: Vec<u8> = (0..5 * 4)
            .flat_map(|i| [(i * 12) as u8, 40, 200, 255])
            .collect();
        let config = SharpenConfig::default();

        let untraced = sharpen_interleaved(&data, 5, 4, PixelLayout::Bgra, &config).unwrap();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_test_writer()
            .finish();
        let traced = tracing::subscriber::with_default(subscriber, || {
            sharpen_interleaved(&data, 5, 4, PixelLayout::Bgra, &config)
        })
        .unwrap();

        assert_eq!(traced, untraced);
    }
}
