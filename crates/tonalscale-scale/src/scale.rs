//! Transition-preserving plane scaling
//!
//! Upscales an 8-bit plane by an integer factor. Horizontally, each
//! source row is segmented into tonal transitions and every transition
//! is stretched to `factor` times its length as an interpolated ramp.
//! Vertically, each scaled row is replicated `factor` times.
//!
//! Because the final constant run of a row never closes into a
//! transition, the rightmost samples of each output row are not covered
//! by any ramp. [`TrailingFill`] selects what those samples hold.

use tonalscale_core::Plane;

use crate::error::{ScaleError, ScaleResult};
use crate::transition::{analyze_row, interpolate};

/// Policy for output samples not covered by any transition ramp.
///
/// The uncovered region is the scaled extent of the row's final
/// constant run, plus any slack left by truncating ramp lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrailingFill {
    /// Leave uncovered samples at zero.
    #[default]
    Zero,
    /// Fill uncovered samples with the row's final source value.
    Extend,
}

/// Scale a plane by an integer factor, preserving tonal transitions.
///
/// The output plane is `factor` times the source in both dimensions.
/// Each source row is scaled once and the result stamped into `factor`
/// consecutive output rows, so every output row `y` is the scaled
/// rendition of source row `y / factor`.
///
/// A factor of 1 re-renders the row through the same analysis and
/// interpolation path rather than copying it: length-1 runs come back
/// unchanged, longer runs are re-interpolated into ramps toward the
/// closing value, and the trailing run is subject to `trailing`.
///
/// # Errors
///
/// Returns [`ScaleError::InvalidScaleFactor`] if `factor` is 0 or the
/// scaled dimensions overflow `u32`.
pub fn scale_plane(src: &Plane, factor: u32, trailing: TrailingFill) -> ScaleResult<Plane> {
    if factor == 0 {
        return Err(ScaleError::InvalidScaleFactor(factor));
    }

    let (width, height) = src.dimensions();
    let (dst_width, dst_height) = match (width.checked_mul(factor), height.checked_mul(factor)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Err(ScaleError::InvalidScaleFactor(factor)),
    };

    let mut dst = Plane::new(dst_width, dst_height)?;
    let row_len = dst_width as usize;

    for sy in 0..height {
        let row = src.row(sy);
        let mut scaled = vec![0u8; row_len];

        let mut pos = 0usize;
        for t in analyze_row(row) {
            let target = t.len() * factor as usize;
            let segment = interpolate(&t, target);
            scaled[pos..pos + segment.len()].copy_from_slice(&segment);
            pos += segment.len();
        }

        if trailing == TrailingFill::Extend && pos < row_len {
            let last = row[width as usize - 1];
            scaled[pos..].fill(last);
        }

        for dy in (sy * factor)..((sy + 1) * factor) {
            dst.row_mut(dy).copy_from_slice(&scaled);
        }
    }

    Ok(dst)
}
