//! Tonalscale - Transition-preserving tonal image upscaling
//!
//! Upscales RGB images by an integer factor while keeping tonal
//! transitions smooth: instead of replicating pixels, each run of equal
//! samples in a row is stretched into an evenly spaced ramp toward the
//! value that ends it. Optional Gaussian smoothing and Laplacian
//! sharpening run on the scaled result.
//!
//! # Overview
//!
//! The pipeline separates an image into its red, green, and blue
//! planes, processes each plane independently (and in parallel), and
//! reassembles the result:
//!
//! 1. Transition analysis and interpolation (horizontal)
//! 2. Row replication (vertical)
//! 3. Gaussian smoothing in floating point
//! 4. Laplacian sharpening in floating point
//! 5. Clamp and quantize back to 8-bit samples
//!
//! # Example
//!
//! ```
//! use tonalscale::{Raster, ScaleOptions, scale_image};
//!
//! let raster = Raster::new(2, 1).unwrap();
//! let mut rm = raster.try_into_mut().unwrap();
//! rm.set_rgb(0, 0, 10, 10, 10).unwrap();
//! rm.set_rgb(1, 0, 200, 200, 200).unwrap();
//! let raster: Raster = rm.into();
//!
//! let scaled = scale_image(&raster, &ScaleOptions::new(4)).unwrap();
//! assert_eq!(scaled.dimensions(), (8, 4));
//! ```

pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use tonalscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use tonalscale_filter as filter;
pub use tonalscale_scale as scale;

// The end-to-end entry points
pub use pipeline::{PipelineError, PipelineResult, ScaleOptions, scale_image};

// Commonly used stage types
pub use tonalscale_filter::{FilterConfig, FilterPreset};
pub use tonalscale_scale::TrailingFill;
