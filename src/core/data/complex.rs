use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Builds a point from its magnitude and argument (radians).
    #[must_use]
    pub fn from_polar(magnitude: f64, argument: f64) -> Self {
        Self {
            real: magnitude * argument.cos(),
            imag: magnitude * argument.sin(),
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Angle in radians, in (-π, π].
    #[must_use]
    pub fn argument(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    /// Raises the point to a real exponent in polar form.
    ///
    /// A zero point with a negative exponent yields non-finite components;
    /// nothing guards against it.
    #[must_use]
    pub fn powf(&self, exponent: f64) -> Self {
        Self::from_polar(
            self.magnitude().powf(exponent),
            self.argument() * exponent,
        )
    }

    /// One step of the recurrence z ← z² + c.
    #[inline]
    #[must_use]
    pub fn square_add(self, c: Self) -> Self {
        self * self + c
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            real: self.real * scale,
            imag: self.imag * scale,
        }
    }
}
