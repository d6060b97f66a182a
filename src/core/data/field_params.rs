use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::image_size::ImageSize;
use crate::core::fractals::julia_value::colour_mapping::kinds::JuliaValueColourMapKind;
use crate::core::interpolation::Interpolation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_COLOUR_OFFSET: f64 = 0.1;
pub const DEFAULT_MAX_THRESHOLD: f64 = 20.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("image size must be non-zero: {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
    #[error("max threshold must be positive, got {0}")]
    NonPositiveThreshold(f64),
    #[error("invalid region: {0}")]
    InvalidRegion(#[from] ComplexRectError),
    #[error("interpolation factor must be within [0, 1], got {0}")]
    FactorOutOfRange(f64),
}

/// Blend between iterate `n` and `n + 1` of the Julia-value field.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionalIteration {
    pub factor: f64,
    #[serde(default)]
    pub method: Interpolation,
}

impl FractionalIteration {
    #[must_use]
    pub const fn new(factor: f64, method: Interpolation) -> Self {
        Self { factor, method }
    }
}

/// Every knob of a field render.
///
/// `max_threshold`, `max_iterations` and `colour_offset` drive the
/// escape-time field; `iterations`, `fractional_iteration` and
/// `julia_colour_map` drive the Julia-value field.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParams {
    pub colour_offset: f64,
    pub max_threshold: f64,
    pub max_iterations: u32,
    pub iterations: u32,
    pub julia_colour_map: JuliaValueColourMapKind,
    pub image_size: ImageSize,
    pub region: ComplexRect,
    pub fractional_iteration: Option<FractionalIteration>,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            colour_offset: DEFAULT_COLOUR_OFFSET,
            max_threshold: DEFAULT_MAX_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            iterations: 0,
            julia_colour_map: JuliaValueColourMapKind::default(),
            image_size: ImageSize::default(),
            region: ComplexRect::default(),
            fractional_iteration: None,
        }
    }
}

impl FieldParams {
    /// Checks the preconditions the evaluators leave undefended.
    ///
    /// The evaluators never call this; it is for callers assembling params
    /// from user input.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.image_size.is_empty() {
            return Err(ParamsError::EmptyImage {
                width: self.image_size.width,
                height: self.image_size.height,
            });
        }

        if !(self.max_threshold > 0.0) {
            return Err(ParamsError::NonPositiveThreshold(self.max_threshold));
        }

        ComplexRect::new(self.region.top_left(), self.region.bottom_right())?;

        match self.fractional_iteration {
            Some(fractional) if !(0.0..=1.0).contains(&fractional.factor) => {
                return Err(ParamsError::FactorOutOfRange(fractional.factor));
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn test_default_matches_batch_export() {
        let params = FieldParams::default();

        assert_eq!(params.image_size, ImageSize::new(1920, 1080));
        assert_eq!(params.region, ComplexRect::default());
        assert_eq!(params.colour_offset, 0.1);
        assert_eq!(params.max_threshold, 20.0);
        assert_eq!(params.max_iterations, 2000);
        assert_eq!(params.iterations, 0);
        assert_eq!(params.fractional_iteration, None);
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(FieldParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_empty_image() {
        let params = FieldParams {
            image_size: ImageSize::new(0, 10),
            ..FieldParams::default()
        };

        assert_eq!(
            params.validate(),
            Err(ParamsError::EmptyImage {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_validate_rejects_non_positive_threshold() {
        let params = FieldParams {
            max_threshold: 0.0,
            ..FieldParams::default()
        };

        assert_eq!(params.validate(), Err(ParamsError::NonPositiveThreshold(0.0)));
    }

    #[test]
    fn test_validate_rejects_reversed_region() {
        let params = FieldParams {
            region: ComplexRect::from_corners(Complex::new(1.0, -1.0), Complex::new(-1.0, 1.0)),
            ..FieldParams::default()
        };

        assert!(matches!(
            params.validate(),
            Err(ParamsError::InvalidRegion(ComplexRectError::InvalidSize { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_factor_out_of_range() {
        let params = FieldParams {
            fractional_iteration: Some(FractionalIteration::new(1.5, Interpolation::LinearXy)),
            ..FieldParams::default()
        };

        assert_eq!(params.validate(), Err(ParamsError::FactorOutOfRange(1.5)));
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let params: FieldParams = toml::from_str(
            r#"
            max_iterations = 50

            [image_size]
            width = 64

            [fractional_iteration]
            factor = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(params.max_iterations, 50);
        assert_eq!(params.image_size, ImageSize::new(64, 1080));
        assert_eq!(params.max_threshold, DEFAULT_MAX_THRESHOLD);
        assert_eq!(
            params.fractional_iteration,
            Some(FractionalIteration::new(0.5, Interpolation::Polynomial))
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let params = FieldParams {
            iterations: 7,
            fractional_iteration: Some(FractionalIteration::new(
                0.25,
                Interpolation::LinearShortAngleAndAbs,
            )),
            julia_colour_map: JuliaValueColourMapKind::PolarProjection,
            ..FieldParams::default()
        };

        let text = toml::to_string(&params).unwrap();
        let parsed: FieldParams = toml::from_str(&text).unwrap();

        assert_eq!(parsed, params);
    }
}
