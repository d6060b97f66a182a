use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::field_params::FieldParams;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Outcome of iterating one pixel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeTime {
    /// `|z|²` exceeded the threshold after this many steps, with budget left.
    Escaped(u32),
    /// The whole budget was spent. A point escaping on the final step also
    /// lands here.
    Exhausted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    image_size: ImageSize,
    region: ComplexRect,
    max_threshold: f64,
    max_iterations: u32,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        image_size: ImageSize,
        region: ComplexRect,
        max_threshold: f64,
        max_iterations: u32,
    ) -> Self {
        Self {
            image_size,
            region,
            max_threshold,
            max_iterations,
        }
    }

    #[must_use]
    pub fn from_params(params: &FieldParams) -> Self {
        Self::new(
            params.image_size,
            params.region,
            params.max_threshold,
            params.max_iterations,
        )
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Iterates `z ← z² + c` from `z = 0` until `|z|²` exceeds the threshold
    /// or the budget runs out.
    #[must_use]
    pub fn escape_time(&self, c: Complex) -> EscapeTime {
        let mut z = Complex::default();
        let mut remaining = self.max_iterations;

        while z.magnitude_squared() <= self.max_threshold && remaining > 0 {
            remaining -= 1;
            z = z.square_add(c);
        }

        if remaining == 0 {
            EscapeTime::Exhausted
        } else {
            EscapeTime::Escaped(self.max_iterations - remaining)
        }
    }
}

impl FieldAlgorithm for EscapeTimeAlgorithm {
    type Sample = EscapeTime;

    fn image_size(&self) -> ImageSize {
        self.image_size
    }

    fn compute(&self, pixel: Point) -> Self::Sample {
        self.escape_time(pixel_to_complex_coords(pixel, self.image_size, self.region))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn algorithm(max_iterations: u32) -> EscapeTimeAlgorithm {
        EscapeTimeAlgorithm::new(ImageSize::new(2, 2), ComplexRect::default(), 20.0, max_iterations)
    }

    #[test]
    fn test_origin_exhausts_budget() {
        assert_eq!(algorithm(50).escape_time(Complex::new(0.0, 0.0)), EscapeTime::Exhausted);
    }

    #[test]
    fn test_far_point_escapes_after_first_step() {
        // z1 = c already exceeds the threshold
        assert_eq!(algorithm(50).escape_time(Complex::new(10.0, 0.0)), EscapeTime::Escaped(1));
    }

    #[test]
    fn test_known_escape_counts() {
        assert_eq!(algorithm(20).escape_time(Complex::new(-2.0, -1.2)), EscapeTime::Escaped(3));
        assert_eq!(algorithm(20).escape_time(Complex::new(-0.5, -1.2)), EscapeTime::Escaped(4));
    }

    #[test]
    fn test_escape_on_last_step_counts_as_exhausted() {
        // c = 10 needs exactly one step to cross the threshold
        assert_eq!(algorithm(1).escape_time(Complex::new(10.0, 0.0)), EscapeTime::Exhausted);
        assert_eq!(algorithm(2).escape_time(Complex::new(10.0, 0.0)), EscapeTime::Escaped(1));
    }

    #[test]
    fn test_zero_budget_is_always_exhausted() {
        assert_eq!(algorithm(0).escape_time(Complex::new(10.0, 0.0)), EscapeTime::Exhausted);
        assert_eq!(algorithm(0).escape_time(Complex::new(0.0, 0.0)), EscapeTime::Exhausted);
    }

    #[test]
    fn test_compute_maps_pixels_onto_region() {
        let algorithm = algorithm(20);

        assert_eq!(algorithm.compute(Point { x: 0, y: 0 }), EscapeTime::Escaped(3));
        assert_eq!(algorithm.compute(Point { x: 1, y: 1 }), EscapeTime::Exhausted);
    }
}
