use crate::core::data::colour::Colour;
use std::f64::consts::TAU;

// Negative values wrap modulo 256 instead of clamping.
fn wrapping_channel(value: f64) -> u8 {
    (value as i64) as u8
}

/// Projects an angle (fraction of a full turn) and magnitude onto red and blue.
///
/// Red follows the sine and blue the cosine; green is always zero.
#[must_use]
pub fn polar_to_rgb(angle: f64, magnitude: f64) -> Colour {
    let radians = angle * TAU;

    Colour::opaque(
        wrapping_channel(radians.sin() * magnitude * 255.0),
        0,
        wrapping_channel(radians.cos() * magnitude * 255.0),
    )
}
