//! tonalscale-filter - Post-scaling filter operations
//!
//! This crate provides the floating-point filter stage that runs after
//! upscaling:
//!
//! - Convolution with arbitrary kernels (replicate border handling)
//! - Separable Gaussian smoothing
//! - Laplacian sharpening (unsharp boost)
//! - [`FilterConfig`] / [`FilterPreset`] for selecting strengths

pub mod config;
pub mod convolve;
mod error;
pub mod kernel;
pub mod sharpen;
pub mod smooth;

pub use config::{FilterConfig, FilterPreset};
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export commonly used functions
pub use convolve::{convolve, convolve_sep};
pub use sharpen::{laplacian_response, unsharp_boost};
pub use smooth::gaussian_smooth;
