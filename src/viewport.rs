//! The visible rectangle of the complex plane and the pixel grid it maps onto.

use crate::error::{Error, Result};
use num::Complex;

/// Pixel grid size. Both sides are at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Result<Raster> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyRaster { width, height });
        }
        Ok(Raster { width, height })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Bounds of the visible region. `real_min < real_max` and `imag_min < imag_max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl Viewport {
    /// real in [-2, 1], imag in [-1.5, 1.5]
    pub const CLASSIC: Viewport = Viewport {
        real_min: -2.0,
        real_max: 1.0,
        imag_min: -1.5,
        imag_max: 1.5,
    };

    pub fn new(real_min: f64, real_max: f64, imag_min: f64, imag_max: f64) -> Result<Viewport> {
        let finite = [real_min, real_max, imag_min, imag_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite || real_min >= real_max || imag_min >= imag_max {
            return Err(Error::InvalidViewport {
                real_min,
                real_max,
                imag_min,
                imag_max,
            });
        }
        Ok(Viewport {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    /// Linear interpolation per axis using `x / width`, so the last column
    /// stays strictly short of `real_max`. No aspect correction.
    pub fn to_complex(&self, x: u32, y: u32, raster: Raster) -> Complex<f64> {
        Complex {
            re: self.real_min + (self.real_max - self.real_min) * x as f64 / raster.width as f64,
            im: self.imag_min + (self.imag_max - self.imag_min) * y as f64 / raster.height as f64,
        }
    }
}
