//! Conversions from cylindrical colour models to 8-bit RGB.
//!
//! Channel scaling truncates towards zero rather than rounding, so output
//! matches the reference renderer byte for byte.

pub mod hsl;
pub mod hsv;
pub mod polar;

pub use hsl::hsl_to_rgb;
pub use hsv::hsv_to_rgb;
pub use polar::polar_to_rgb;
