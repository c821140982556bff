//! Gaussian smoothing

use tonalscale_core::FPlane;

use crate::convolve::convolve_sep;
use crate::{FilterError, FilterResult, Kernel};

/// Smooth a floating-point plane with a Gaussian of the given sigma.
///
/// Runs a separable convolution: one horizontal and one vertical pass
/// with a normalized 1-D Gaussian kernel of radius
/// `trunc(4 * sigma + 0.5)`, using replicate border handling.
///
/// A sigma of exactly 0 disables smoothing and returns an identical
/// copy of the input, so the value 0 is a reliable bypass.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `sigma` is negative
/// or not finite.
pub fn gaussian_smooth(fplane: &FPlane, sigma: f32) -> FilterResult<FPlane> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "sigma must be finite and non-negative, got {}",
            sigma
        )));
    }

    if sigma == 0.0 {
        return Ok(fplane.clone());
    }

    let kernel_x = Kernel::gaussian_1d(sigma)?;
    let kernel_y = kernel_x.transposed();
    convolve_sep(fplane, &kernel_x, &kernel_y, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sigma_is_identity() {
        let fp = FPlane::from_data(2, 2, vec![1.0, 200.0, 3.5, 0.0]).unwrap();
        let out = gaussian_smooth(&fp, 0.0).unwrap();
        assert_eq!(out.data(), fp.data());
    }

    #[test]
    fn test_negative_sigma_rejected() {
        let fp = FPlane::new(2, 2).unwrap();
        assert!(gaussian_smooth(&fp, -0.5).is_err());
        assert!(gaussian_smooth(&fp, f32::NAN).is_err());
    }

    #[test]
    fn test_constant_plane_unchanged() {
        let fp = FPlane::new_with_value(8, 8, 77.0).unwrap();
        let out = gaussian_smooth(&fp, 1.5).unwrap();
        for &v in out.data() {
            assert!((v - 77.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_edge_softened_symmetrically() {
        // A vertical step edge spreads out but keeps its midpoint.
        let mut fp = FPlane::new(16, 4).unwrap();
        for y in 0..4 {
            for x in 8..16 {
                fp.set_unchecked(x, y, 200.0);
            }
        }
        let out = gaussian_smooth(&fp, 1.0).unwrap();

        // Values rise monotonically across the edge
        for x in 1..16 {
            assert!(out.get_unchecked(x, 2) >= out.get_unchecked(x - 1, 2));
        }
        // Total mass is preserved away from the border effects
        assert!(out.get_unchecked(0, 2) < 10.0);
        assert!(out.get_unchecked(15, 2) > 190.0);
    }

    #[test]
    fn test_smoothing_reduces_peak() {
        let mut fp = FPlane::new(9, 9).unwrap();
        fp.set_unchecked(4, 4, 255.0);
        let out = gaussian_smooth(&fp, 1.0).unwrap();
        assert!(out.get_unchecked(4, 4) < 255.0);
        assert!(out.get_unchecked(3, 4) > 0.0);
    }
}
