use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Maps a pixel onto the complex plane.
///
/// The grid resolution is the denominator, so pixel `(0, 0)` lands on the
/// region's minimum corner and the maximum edge is never sampled.
#[must_use]
pub fn pixel_to_complex_coords(
    pixel_position: Point,
    image_size: ImageSize,
    complex_rect: ComplexRect,
) -> Complex {
    let real = complex_rect.real_min
        + complex_rect.width() * f64::from(pixel_position.x) / f64::from(image_size.width);
    let imag = complex_rect.imag_min
        + complex_rect.height() * f64::from(pixel_position.y) / f64::from(image_size.height);

    Complex { real, imag }
}
