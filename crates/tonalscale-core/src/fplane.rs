//! FPlane - Floating-point working plane
//!
//! `FPlane` is a 2D array of `f32` values used for the filter stages,
//! where integer precision is insufficient (Gaussian weights, Laplacian
//! responses, and the unsharp boost all produce fractional and negative
//! intermediate values).
//!
//! Conversion back to the bounded 8-bit sample domain goes through
//! [`FPlane::to_plane`], which clamps to [0, 255] and rounds to nearest.

use crate::error::{Error, Result};
use crate::plane::Plane;

/// Floating-point image plane.
///
/// Data is stored in row-major order with no padding. The value at
/// (x, y) is at index `y * width + x`.
#[derive(Debug, Clone)]
pub struct FPlane {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<f32>,
}

impl FPlane {
    /// Create a new FPlane with all values set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(FPlane {
            width,
            height,
            data: vec![0.0f32; size],
        })
    }

    /// Create a new FPlane with all values set to `value`.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(FPlane {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Create an FPlane from raw data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// does not match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(FPlane {
            width,
            height,
            data,
        })
    }

    /// Widen an 8-bit plane into floating-point working values.
    pub fn from_plane(plane: &Plane) -> Self {
        FPlane {
            width: plane.width(),
            height: plane.height(),
            data: plane.data().iter().map(|&v| v as f32).collect(),
        }
    }

    /// Convert back to an 8-bit plane.
    ///
    /// Each value is clamped to [0, 255] and then rounded to the nearest
    /// integer sample. This is the final quantization step of the
    /// pipeline; it is total (never fails) because the output domain is
    /// fully covered by the clamp.
    pub fn to_plane(&self) -> Plane {
        let data = self
            .data
            .iter()
            .map(|&v| v.clamp(0.0, 255.0).round() as u8)
            .collect();
        // Dimensions were validated at construction.
        Plane::from_data(self.width, self.height, data).unwrap()
    }

    /// Get the plane width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the plane height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the plane dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Get the value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: f32) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Get raw access to the data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get raw mutable access to the data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}
