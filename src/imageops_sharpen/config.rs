use crate::error::SharpenError;

/// Strength above which sharpening starts to exaggerate fine features
/// such as eyes and eyebrows.
pub const OVER_SHARPEN_THRESHOLD: f32 = 2.0;

/// Smallest accepted blur sigma. Below it the Gaussian kernel weights
/// underflow and the blurred plane turns into NaN.
pub const MIN_SIGMA: f32 = 1e-3;

/// Largest accepted blur sigma. The kernel spans `4 * sigma + 1` taps.
pub const MAX_SIGMA: f32 = 1024.0;

/// How the unsharp-mask detail signal is derived from a plane and its blurred copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetailMode {
    /// `detail = |color - blurred|`
    ///
    /// Always brightens edges, on both sides.
    Absolute,
    /// `detail = color - blurred`
    ///
    /// Classic unsharp masking: bright sides get brighter, dark sides darker.
    #[default]
    Signed,
}

/// Numeric depth of the Laplacian response before it is blended back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaplacianDepth {
    /// Response saturated into `0..=255` as an 8-bit destination would store it.
    /// Negative responses are lost.
    Saturating8,
    /// Signed 16-bit response, converted with its absolute value and
    /// saturated to 255.
    #[default]
    Signed16,
}

/// Sharpening algorithm selection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SharpenMethod {
    /// Gaussian unsharp mask
    UnsharpMask {
        /// Standard deviation of the Gaussian blur; the kernel radius is derived from it
        sigma: f32,
        /// How the detail signal is computed
        detail: DetailMode,
    },
    /// 3x3 Laplacian high-frequency enhancement
    Laplacian {
        /// Depth of the operator's response
        depth: LaplacianDepth,
    },
}

impl Default for SharpenMethod {
    fn default() -> Self {
        Self::UnsharpMask {
            sigma: 1.0,
            detail: DetailMode::Signed,
        }
    }
}

/// Complete parameter set for one sharpening call
///
/// # Examples
///
/// ```
/// use imageops_sharpen::{LaplacianDepth, SharpenConfig};
///
/// let config = SharpenConfig::laplacian(LaplacianDepth::Signed16, 0.5);
/// assert!(config.validate().is_ok());
///
/// let too_weak = SharpenConfig::default().with_strength(-1.0);
/// assert!(too_weak.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SharpenConfig {
    /// Algorithm and its options
    pub method: SharpenMethod,
    /// Multiplier applied to the detail signal before it is added back
    pub strength: f32,
}

impl Default for SharpenConfig {
    fn default() -> Self {
        Self {
            method: SharpenMethod::default(),
            strength: 0.8,
        }
    }
}

impl SharpenConfig {
    /// Signed unsharp mask with the given blur sigma and strength
    pub const fn unsharp_mask(sigma: f32, strength: f32) -> Self {
        Self {
            method: SharpenMethod::UnsharpMask {
                sigma,
                detail: DetailMode::Signed,
            },
            strength,
        }
    }

    /// Unsharp mask driven by the absolute difference to the blurred copy
    pub const fn detail_enhance(sigma: f32, strength: f32) -> Self {
        Self {
            method: SharpenMethod::UnsharpMask {
                sigma,
                detail: DetailMode::Absolute,
            },
            strength,
        }
    }

    /// Laplacian enhancement at the given depth
    pub const fn laplacian(depth: LaplacianDepth, strength: f32) -> Self {
        Self {
            method: SharpenMethod::Laplacian { depth },
            strength,
        }
    }

    /// Returns a copy with a different strength
    #[must_use]
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Checks that strength and sigma are usable.
    ///
    /// # Errors
    ///
    /// * `SharpenError::InvalidParameter` - strength is negative or not finite,
    ///   or sigma is outside `MIN_SIGMA..=MAX_SIGMA`
    pub fn validate(&self) -> Result<(), SharpenError> {
        if !self.strength.is_finite() || self.strength < 0.0 {
            return Err(SharpenError::InvalidParameter(format!(
                "strength must be finite and non-negative, got {}",
                self.strength
            )));
        }

        if let SharpenMethod::UnsharpMask { sigma, .. } = self.method {
            // imageproc panics on a non-positive or huge sigma
            if !(MIN_SIGMA..=MAX_SIGMA).contains(&sigma) {
                return Err(SharpenError::InvalidParameter(format!(
                    "sigma must be in {MIN_SIGMA}..={MAX_SIGMA}, got {sigma}"
                )));
            }
        }

        Ok(())
    }

    /// Whether the strength is past the point where results tend to look unnatural
    pub fn is_over_sharpening(&self) -> bool {
        self.strength > OVER_SHARPEN_THRESHOLD
    }
}
