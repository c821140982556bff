//! Convolution kernels
//!
//! Defines the kernel structure used by the convolution and smoothing
//! operations.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from a slice of values.
    ///
    /// The center is placed at `(width / 2, height / 2)`.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(
                "kernel dimensions must be nonzero".into(),
            ));
        }

        let expected = (width as usize) * (height as usize);
        if data.len() != expected {
            return Err(FilterError::InvalidKernel(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected
            )));
        }

        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: data.to_vec(),
        })
    }

    /// Create a normalized 1-D horizontal Gaussian kernel for `sigma`.
    ///
    /// The kernel covers `radius` samples on each side of the center,
    /// with `radius = trunc(4 * sigma + 0.5)`, and weights
    /// `exp(-x^2 / (2 * sigma^2))` scaled to sum to 1. Transpose with
    /// [`Kernel::transposed`] for the vertical pass.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] if `sigma` is not finite
    /// and positive.
    pub fn gaussian_1d(sigma: f32) -> FilterResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FilterError::InvalidKernel(format!(
                "sigma must be finite and positive, got {}",
                sigma
            )));
        }

        let radius = (4.0 * sigma + 0.5) as u32;
        let size = 2 * radius + 1;
        let denom = 2.0 * sigma * sigma;

        let mut data = Vec::with_capacity(size as usize);
        for i in 0..size {
            let x = i as f32 - radius as f32;
            data.push((-(x * x) / denom).exp());
        }

        let mut kernel = Kernel {
            width: size,
            height: 1,
            cx: radius,
            cy: 0,
            data,
        };
        kernel.normalize();
        Ok(kernel)
    }

    /// Create the 3x3 Laplacian kernel.
    ///
    /// The discrete 4-neighbor Laplacian; its values sum to zero, so
    /// its response on any constant region is zero.
    pub fn laplacian() -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: vec![0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0],
        }
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Return the transpose of this kernel (width and height swapped).
    pub fn transposed(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for x in 0..self.width {
            for y in 0..self.height {
                data.push(self.data[(y * self.width + x) as usize]);
            }
        }
        Kernel {
            width: self.height,
            height: self.width,
            cx: self.cy,
            cy: self.cx,
            data,
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// Kernels whose sum is near zero are left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() < 1e-6 {
            return;
        }
        for v in &mut self.data {
            *v /= sum;
        }
    }
}
