use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour::polar_to_rgb;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::fractals::julia_value::colour_mapping::kinds::JuliaValueColourMapKind;
use crate::core::fractals::julia_value::colour_mapping::map::{
    JuliaValueColourMap, hue_fraction, lightness,
};

#[derive(Debug, Default)]
pub struct JuliaValuePolarProjection {}

impl ColourMap<Complex> for JuliaValuePolarProjection {
    fn map(&self, z: Complex) -> Colour {
        polar_to_rgb(hue_fraction(z), lightness(z))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl JuliaValueColourMap for JuliaValuePolarProjection {
    fn kind(&self) -> JuliaValueColourMapKind {
        JuliaValueColourMapKind::PolarProjection
    }
}

impl JuliaValuePolarProjection {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
