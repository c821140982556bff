//! # tonalscale-scale
//!
//! Transition-preserving integer upscaling.
//!
//! This crate implements the horizontal transition analysis and the
//! plane scaler built on top of it:
//!
//! - [`analyze_row`]: segment a row into tonal transitions
//! - [`interpolate`]: stretch one transition into an evenly spaced ramp
//! - [`scale_plane`]: scale a full plane by an integer factor
//!
//! ## Example
//!
//! ```
//! use tonalscale_core::Plane;
//! use tonalscale_scale::{scale_plane, TrailingFill};
//!
//! let plane = Plane::from_data(2, 1, vec![10, 200]).unwrap();
//! let scaled = scale_plane(&plane, 4, TrailingFill::Extend).unwrap();
//! assert_eq!(scaled.dimensions(), (8, 4));
//! assert_eq!(scaled.row(0), &[10, 57, 105, 152, 200, 200, 200, 200]);
//! ```

pub mod error;
pub mod scale;
pub mod transition;

pub use error::{ScaleError, ScaleResult};
pub use scale::{TrailingFill, scale_plane};
pub use transition::{Direction, Transition, analyze_row, interpolate};
