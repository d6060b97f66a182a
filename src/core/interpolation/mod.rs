//! Blending between consecutive iterates to visualise fractional iteration
//! counts.

pub mod linear;
pub mod polar;
pub mod polynomial;

use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown interpolation method '{0}'")]
pub struct UnknownInterpolation(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    #[default]
    Polynomial,
    LinearXy,
    LinearAngleAndAbs,
    LinearShortAngleAndAbs,
}

impl Interpolation {
    pub const ALL: &'static [Self] = &[
        Self::Polynomial,
        Self::LinearXy,
        Self::LinearAngleAndAbs,
        Self::LinearShortAngleAndAbs,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Polynomial => "Polynomial",
            Self::LinearXy => "Linear x/y",
            Self::LinearAngleAndAbs => "Linear angle and abs",
            Self::LinearShortAngleAndAbs => "Linear short angle and abs",
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Polynomial => "polynomial",
            Self::LinearXy => "linear-xy",
            Self::LinearAngleAndAbs => "linear-angle-and-abs",
            Self::LinearShortAngleAndAbs => "linear-short-angle-and-abs",
        }
    }

    /// Blends `start` towards `goal` by `t`.
    #[must_use]
    pub fn interpolate(self, start: Complex, goal: Complex, t: f64) -> Complex {
        match self {
            Self::Polynomial => polynomial::polynomial(start, goal, t),
            Self::LinearXy => linear::linear_xy(start, goal, t),
            Self::LinearAngleAndAbs => polar::linear_angle_and_abs(start, goal, t),
            Self::LinearShortAngleAndAbs => polar::linear_short_angle_and_abs(start, goal, t),
        }
    }
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for Interpolation {
    type Err = UnknownInterpolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|method| method.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownInterpolation(s.to_owned()))
    }
}
