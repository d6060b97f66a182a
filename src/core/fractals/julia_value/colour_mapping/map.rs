use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::julia_value::colour_mapping::kinds::JuliaValueColourMapKind;
use std::f64::consts::PI;

pub trait JuliaValueColourMap: ColourMap<Complex> + Send + Sync {
    fn kind(&self) -> JuliaValueColourMapKind;
}

impl ColourMap<Complex> for Box<dyn JuliaValueColourMap> {
    fn map(&self, value: Complex) -> Colour {
        (**self).map(value)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}

/// Argument of `z` as a fraction of a full turn, in `[0, 1]`.
pub(crate) fn hue_fraction(z: Complex) -> f64 {
    let mut degrees = z.argument() * (180.0 / PI);
    while degrees < 0.0 {
        degrees += 360.0;
    }

    degrees / 360.0
}

/// `1 / (1 + 5|z|)`: one at the origin, fading towards zero as `z` grows.
pub(crate) fn lightness(z: Complex) -> f64 {
    1.0 / (1.0 + 5.0 * z.magnitude())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_fraction_of_axes() {
        assert_eq!(hue_fraction(Complex::new(1.0, 0.0)), 0.0);
        assert_eq!(hue_fraction(Complex::new(0.0, 1.0)), 0.25);
        assert_eq!(hue_fraction(Complex::new(-1.0, 0.0)), 0.5);
        assert_eq!(hue_fraction(Complex::new(0.0, -1.0)), 0.75);
    }

    #[test]
    fn test_lightness() {
        assert_eq!(lightness(Complex::new(0.0, 0.0)), 1.0);
        assert_eq!(lightness(Complex::new(3.0, 4.0)), 1.0 / 26.0);
    }

    #[test]
    fn test_non_finite_values_do_not_panic() {
        let nan = Complex::new(f64::NAN, f64::NAN);

        assert!(hue_fraction(nan).is_nan());
        assert!(lightness(nan).is_nan());
        assert_eq!(lightness(Complex::new(f64::INFINITY, 0.0)), 0.0);
    }
}
