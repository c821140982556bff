//! Convolution operations
//!
//! Implements floating-point plane convolution with arbitrary kernels.

use tonalscale_core::FPlane;

use crate::{FilterResult, Kernel};

/// Convolve a floating-point plane with a kernel.
///
/// Each output value is the weighted sum of the kernel applied to the
/// corresponding neighborhood in the input. Uses replicate (clamp)
/// border handling: samples outside the plane boundary take the value
/// of the nearest edge sample.
///
/// If `normalize` is true, the kernel values are scaled so that they
/// sum to 1.0 before convolution. Kernels whose sum is near zero are
/// used as-is.
pub fn convolve(fplane: &FPlane, kernel: &Kernel, normalize: bool) -> FilterResult<FPlane> {
    let w = fplane.width() as i32;
    let h = fplane.height() as i32;
    let kw = kernel.width() as i32;
    let kh = kernel.height() as i32;
    let cx = kernel.center_x() as i32;
    let cy = kernel.center_y() as i32;

    let ksum = kernel.sum();
    let scale = if normalize && ksum.abs() >= 1e-6 {
        1.0 / ksum
    } else {
        1.0
    };

    let mut out = FPlane::new(w as u32, h as u32)?;
    let kdata = kernel.data();

    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for ky in 0..kh {
                let sy = (y + ky - cy).clamp(0, h - 1);
                for kx in 0..kw {
                    let sx = (x + kx - cx).clamp(0, w - 1);
                    let val = fplane.get_unchecked(sx as u32, sy as u32);
                    let kidx = (ky * kw + kx) as usize;
                    sum += val * kdata[kidx] * scale;
                }
            }
            out.set_unchecked(x as u32, y as u32, sum);
        }
    }

    Ok(out)
}

/// Convolve a floating-point plane with a pair of separable 1-D kernels.
///
/// Applies `kernel_x` in the horizontal direction, then `kernel_y` in
/// the vertical direction. The full 2-D kernel must be separable (the
/// outer product of the two 1-D kernels).
pub fn convolve_sep(
    fplane: &FPlane,
    kernel_x: &Kernel,
    kernel_y: &Kernel,
    normalize: bool,
) -> FilterResult<FPlane> {
    let tmp = convolve(fplane, kernel_x, normalize)?;
    convolve(&tmp, kernel_y, normalize)
}
