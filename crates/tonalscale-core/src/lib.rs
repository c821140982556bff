//! Tonalscale Core - Basic data structures for tonal image upscaling
//!
//! This crate provides the fundamental containers used throughout the
//! tonalscale library:
//!
//! - [`Raster`] / [`RasterMut`] - The main RGB image container (immutable / mutable)
//! - [`Plane`] - A single 8-bit channel extracted from a raster
//! - [`FPlane`] - Floating-point working plane for filter arithmetic
//!
//! Channels are separated with [`Raster::component`] and reassembled with
//! [`Raster::from_planes`]; each [`Plane`] is exclusively owned by its
//! processing pipeline for the duration of one conversion.

pub mod error;
pub mod fplane;
pub mod plane;
pub mod raster;

pub use error::{Error, Result};
pub use fplane::FPlane;
pub use plane::Plane;
pub use raster::{Component, Raster, RasterMut};

/// Color channel helper functions for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
/// The alpha byte is carried as 255 and otherwise ignored.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract_roundtrip() {
            let pixel = compose_rgb(12, 200, 255);
            assert_eq!(extract_rgb(pixel), (12, 200, 255));
        }

        #[test]
        fn test_compose_sets_opaque_alpha() {
            assert_eq!(compose_rgb(0, 0, 0) & 0xff, 255);
        }
    }
}
