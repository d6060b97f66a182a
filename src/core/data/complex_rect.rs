use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// The section of the complex plane sampled by a field.
///
/// `real_min < real_max` and `imag_min < imag_max` is the convention, but the
/// evaluators accept any bounds; use [`ComplexRect::new`] where a well-formed
/// rectangle is required.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplexRect {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
    pub imag_max: f64,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let rect = Self::from_corners(top_left, bottom_right);

        if !rect.is_well_formed() {
            return Err(ComplexRectError::InvalidSize {
                width: rect.width(),
                height: rect.height(),
            });
        }

        Ok(rect)
    }

    #[must_use]
    pub const fn from_corners(top_left: Complex, bottom_right: Complex) -> Self {
        Self {
            real_min: top_left.real,
            real_max: bottom_right.real,
            imag_min: top_left.imag,
            imag_max: bottom_right.imag,
        }
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        Complex::new(self.real_min, self.imag_min)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        Complex::new(self.real_max, self.imag_max)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    /// Both extents strictly positive. NaN bounds are never well formed.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

impl Default for ComplexRect {
    fn default() -> Self {
        Self::from_corners(Complex::new(-2.0, -1.2), Complex::new(1.0, 1.2))
    }
}
