use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour::hsl_to_rgb;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::julia_value::colour_mapping::kinds::JuliaValueColourMapKind;
use crate::core::fractals::julia_value::colour_mapping::map::{
    JuliaValueColourMap, hue_fraction, lightness,
};

/// Hue from the argument of `z`, lightness from its magnitude.
#[derive(Debug, Default)]
pub struct JuliaValueHslPolar {}

impl ColourMap<Complex> for JuliaValueHslPolar {
    fn map(&self, z: Complex) -> Colour {
        hsl_to_rgb(hue_fraction(z), 1.0, lightness(z))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaValueColourMap for JuliaValueHslPolar {
    fn kind(&self) -> JuliaValueColourMapKind {
        JuliaValueColourMapKind::HslPolar
    }
}

impl JuliaValueHslPolar {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_white() {
        let mapper = JuliaValueHslPolar::new();

        assert_eq!(mapper.map(Complex::new(0.0, 0.0)), Colour::opaque(255, 255, 255));
    }

    #[test]
    fn test_negative_real_axis_is_cyan() {
        let mapper = JuliaValueHslPolar::new();

        // |z| = 2 -> lightness 1/11, hue 0.5
        assert_eq!(mapper.map(Complex::new(-2.0, 0.0)), Colour::opaque(0, 45, 45));
    }

    #[test]
    fn test_diverged_value_is_black() {
        let mapper = JuliaValueHslPolar::new();

        assert_eq!(mapper.map(Complex::new(f64::INFINITY, 0.0)), Colour::opaque(0, 0, 0));
    }

    #[test]
    fn test_nan_is_opaque() {
        let mapper = JuliaValueHslPolar::new();

        assert_eq!(mapper.map(Complex::new(f64::NAN, f64::NAN)).a, 255);
    }
}
