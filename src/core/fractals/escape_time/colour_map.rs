use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour::hsv_to_rgb;
use crate::core::data::colour::Colour;
use crate::core::fractals::escape_time::algorithm::EscapeTime;

/// Cycles hue with the fraction of the budget used; exhausted points are black.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeHsvCycle {
    max_iterations: u32,
    colour_offset: f64,
}

impl EscapeTimeHsvCycle {
    #[must_use]
    pub fn new(max_iterations: u32, colour_offset: f64) -> Self {
        Self {
            max_iterations,
            colour_offset,
        }
    }

    fn hue(&self, iterations: u32) -> f64 {
        let h = f64::from(iterations) / f64::from(self.max_iterations) + self.colour_offset;
        h - h.floor()
    }
}

impl ColourMap<EscapeTime> for EscapeTimeHsvCycle {
    fn map(&self, value: EscapeTime) -> Colour {
        match value {
            EscapeTime::Exhausted => Colour::BLACK,
            EscapeTime::Escaped(iterations) => hsv_to_rgb(self.hue(iterations), 1.0, 1.0),
        }
    }

    fn display_name(&self) -> &str {
        "HSV cycle"
    }
}
