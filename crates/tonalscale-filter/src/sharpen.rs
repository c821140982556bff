//! Laplacian-based sharpening

use tonalscale_core::FPlane;

use crate::convolve::convolve;
use crate::{FilterError, FilterResult, Kernel};

/// Compute the Laplacian response of a floating-point plane.
///
/// Convolves with the 3x3 4-neighbor Laplacian using replicate border
/// handling. The response is zero over constant regions and signed at
/// edges, so the output can hold negative values.
pub fn laplacian_response(fplane: &FPlane) -> FilterResult<FPlane> {
    convolve(fplane, &Kernel::laplacian(), false)
}

/// Sharpen a floating-point plane by adding a scaled Laplacian.
///
/// Computes `out = in + strength * laplacian(in)`. The result is left
/// unclamped; final range reduction happens when the plane is
/// quantized back to 8-bit samples.
///
/// A strength of exactly 0 disables sharpening and returns an
/// identical copy of the input.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `strength` is
/// negative or not finite.
pub fn unsharp_boost(fplane: &FPlane, strength: f32) -> FilterResult<FPlane> {
    if !strength.is_finite() || strength < 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "strength must be finite and non-negative, got {}",
            strength
        )));
    }

    if strength == 0.0 {
        return Ok(fplane.clone());
    }

    let response = laplacian_response(fplane)?;
    let mut out = fplane.clone();
    for (v, &r) in out.data_mut().iter_mut().zip(response.data()) {
        *v += strength * r;
    }
    Ok(out)
}
