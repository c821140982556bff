//! Filter configuration and presets

use tonalscale_core::FPlane;

use crate::FilterResult;
use crate::sharpen::unsharp_boost;
use crate::smooth::gaussian_smooth;

/// Configuration for the post-scaling filter stage.
///
/// Both parameters default to 0, which makes [`FilterConfig::apply`]
/// an exact identity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterConfig {
    /// Gaussian smoothing sigma; 0 disables smoothing
    pub smoothing_sigma: f32,
    /// Laplacian sharpening strength; 0 disables sharpening
    pub sharpening_strength: f32,
}

impl FilterConfig {
    /// Create a configuration from explicit parameters.
    pub fn new(smoothing_sigma: f32, sharpening_strength: f32) -> Self {
        FilterConfig {
            smoothing_sigma,
            sharpening_strength,
        }
    }

    /// Create a configuration from smoothing and sharpening presets.
    pub fn from_presets(smoothing: FilterPreset, sharpening: FilterPreset) -> Self {
        FilterConfig {
            smoothing_sigma: smoothing.sigma(),
            sharpening_strength: sharpening.strength(),
        }
    }

    /// Apply the configured filters to a plane.
    ///
    /// Smoothing runs first, then sharpening on the smoothed result.
    /// Stages with a parameter of 0 are skipped as exact identities.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FilterError::InvalidParameters`] if either
    /// parameter is negative or not finite.
    pub fn apply(&self, fplane: &FPlane) -> FilterResult<FPlane> {
        let smoothed = gaussian_smooth(fplane, self.smoothing_sigma)?;
        unsharp_boost(&smoothed, self.sharpening_strength)
    }
}

/// Named filter strength levels.
///
/// Each preset maps to a sigma for smoothing and a strength for
/// sharpening; the two uses share the same numeric scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPreset {
    /// No filtering (0.0)
    #[default]
    None,
    /// Light filtering (0.5)
    Light,
    /// Medium filtering (1.0)
    Medium,
    /// Strong filtering (2.0)
    Strong,
}

impl FilterPreset {
    /// Gaussian sigma for this preset.
    pub fn sigma(self) -> f32 {
        match self {
            FilterPreset::None => 0.0,
            FilterPreset::Light => 0.5,
            FilterPreset::Medium => 1.0,
            FilterPreset::Strong => 2.0,
        }
    }

    /// Sharpening strength for this preset.
    pub fn strength(self) -> f32 {
        // Same scale as sigma()
        self.sigma()
    }
}
