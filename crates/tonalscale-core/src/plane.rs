//! Plane - A single 8-bit image channel
//!
//! A `Plane` is an H×W grid of `u8` samples extracted from one color
//! channel of a [`Raster`](crate::Raster). Unlike the raster, a plane is
//! not reference counted: the scaling pipeline owns each plane
//! exclusively for the duration of one conversion, so plain ownership
//! is enough.
//!
//! New planes are zero-filled. That fill value is load-bearing: the row
//! scaler deliberately leaves destination samples it never writes at
//! this value.

use crate::error::{Error, Result};

/// A single-channel 8-bit image plane.
///
/// Data is stored in row-major order with no padding. The sample at
/// (x, y) is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    /// Width in samples
    width: u32,
    /// Height in samples
    height: u32,
    /// Sample data (row-major, no padding)
    data: Vec<u8>,
}

impl Plane {
    /// Create a new plane with all samples set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(Plane {
            width,
            height,
            data: vec![0u8; size],
        })
    }

    /// Create a plane from raw sample data in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or the data length
    /// does not match `width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
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

        Ok(Plane {
            width,
            height,
            data,
        })
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

    /// Get the sample value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y as usize) * (self.width as usize) + (x as usize)])
    }

    /// Get the sample value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the sample value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + (x as usize),
                len: self.data.len(),
            });
        }
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
        Ok(())
    }

    /// Set the sample value at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_unchecked(&mut self, x: u32, y: u32, value: u8) {
        self.data[(y as usize) * (self.width as usize) + (x as usize)] = value;
    }

    /// Get one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = (y as usize) * (self.width as usize);
        &self.data[start..start + self.width as usize]
    }

    /// Get one row of samples mutably.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let start = (y as usize) * (self.width as usize);
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    /// Get raw access to the sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let plane = Plane::new(4, 3).unwrap();
        assert_eq!(plane.dimensions(), (4, 3));
        assert!(plane.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_new_invalid_dimensions() {
        assert!(Plane::new(0, 10).is_err());
        assert!(Plane::new(10, 0).is_err());
    }

    #[test]
    fn test_from_data_length_mismatch() {
        assert!(Plane::from_data(3, 2, vec![0u8; 5]).is_err());
        assert!(Plane::from_data(3, 2, vec![0u8; 6]).is_ok());
    }

    #[test]
    fn test_get_set() {
        let mut plane = Plane::new(3, 2).unwrap();
        plane.set(2, 1, 77).unwrap();
        assert_eq!(plane.get(2, 1), Some(77));
        assert_eq!(plane.get(3, 1), None);
        assert!(plane.set(0, 2, 1).is_err());
    }

    #[test]
    fn test_row_access() {
        let plane = Plane::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(plane.row(0), &[1, 2, 3]);
        assert_eq!(plane.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_row_mut() {
        let mut plane = Plane::new(3, 2).unwrap();
        plane.row_mut(1).copy_from_slice(&[7, 8, 9]);
        assert_eq!(plane.get(0, 1), Some(7));
        assert_eq!(plane.get(2, 1), Some(9));
        assert_eq!(plane.row(0), &[0, 0, 0]);
    }
}
