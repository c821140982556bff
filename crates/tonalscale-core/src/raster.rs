//! Raster - The main RGB image container
//!
//! # Pixel layout
//!
//! - Each pixel is one 32-bit word, color order `0xRRGGBBAA`
//! - Rows are stored contiguously, no padding
//! - The alpha byte is carried as 255 and otherwise ignored
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via
//! [`Raster::try_into_mut`] or [`Raster::to_mut`], then convert back
//! with `Into<Raster>`. This gives the C-style shared image container
//! compile-time exclusive access for writes.

use crate::color;
use crate::error::{Error, Result};
use crate::plane::Plane;
use std::sync::Arc;

/// Color component selector for channel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// Red channel (bits 24-31)
    Red,
    /// Green channel (bits 16-23)
    Green,
    /// Blue channel (bits 8-15)
    Blue,
}

impl Component {
    /// All three color components in channel order.
    pub const ALL: [Component; 3] = [Component::Red, Component::Green, Component::Blue];
}

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The image data (one packed word per pixel, row-major)
    data: Vec<u32>,
}

/// RGB image container.
///
/// # Examples
///
/// ```
/// use tonalscale_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new raster with the specified dimensions.
    ///
    /// All pixels are initialized to opaque black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        let data = vec![color::compose_rgb(0, 0, 0); size];

        Ok(Raster {
            inner: Arc::new(RasterData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Get raw access to the pixel data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this raster.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Get the packed pixel at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)])
    }

    /// Get the packed pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Extract a single color component as an 8-bit plane.
    ///
    /// This is the channel separation half of the pipeline: the returned
    /// plane is an independent copy with no tie back to the raster.
    pub fn component(&self, comp: Component) -> Plane {
        let extract = match comp {
            Component::Red => color::red,
            Component::Green => color::green,
            Component::Blue => color::blue,
        };
        let data = self.inner.data.iter().map(|&p| extract(p)).collect();
        // The raster's own dimensions are always valid plane dimensions.
        Plane::from_data(self.inner.width, self.inner.height, data).unwrap()
    }

    /// Assemble a raster from three 8-bit component planes.
    ///
    /// All three planes must have the same dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the plane shapes differ.
    pub fn from_planes(red: &Plane, green: &Plane, blue: &Plane) -> Result<Self> {
        let (w, h) = red.dimensions();
        for plane in [green, blue] {
            if plane.dimensions() != (w, h) {
                return Err(Error::DimensionMismatch {
                    expected: (w, h),
                    actual: plane.dimensions(),
                });
            }
        }

        let data = red
            .data()
            .iter()
            .zip(green.data())
            .zip(blue.data())
            .map(|((&r, &g), &b)| color::compose_rgb(r, g, b))
            .collect();

        Ok(Raster {
            inner: Arc::new(RasterData {
                width: w,
                height: h,
                data,
            }),
        })
    }

    /// Check if two rasters have the same width and height.
    pub fn sizes_equal(&self, other: &Raster) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates a
    /// completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`RasterMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable raster.
///
/// Allows modification of image data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the packed pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)]
    }

    /// Set the packed pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.inner.width as usize) + (x as usize),
                len: self.inner.data.len(),
            });
        }
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)] = pixel;
        Ok(())
    }

    /// Set the packed pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: u32) {
        self.inner.data[(y as usize) * (self.inner.width as usize) + (x as usize)] = pixel;
    }

    /// Set the RGB value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of range.
    #[inline]
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}
