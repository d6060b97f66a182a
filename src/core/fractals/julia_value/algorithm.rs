use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::field_params::{FieldParams, FractionalIteration};
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Applies `step` exactly `iterations` times starting from `c`, then blends
/// towards one further step when `fractional` is set.
///
/// There is no escape check; diverging values run on to infinity or NaN.
pub(crate) fn iterate_value<F>(
    c: Complex,
    iterations: u32,
    fractional: Option<FractionalIteration>,
    mut step: F,
) -> Complex
where
    F: FnMut(Complex) -> Complex,
{
    let mut z = c;
    for _ in 0..iterations {
        z = step(z);
    }

    match fractional {
        Some(FractionalIteration { factor, method }) => {
            let goal = step(z);
            method.interpolate(z, goal, factor)
        }
        None => z,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JuliaValueAlgorithm {
    image_size: ImageSize,
    region: ComplexRect,
    iterations: u32,
    fractional_iteration: Option<FractionalIteration>,
}

impl JuliaValueAlgorithm {
    #[must_use]
    pub fn new(
        image_size: ImageSize,
        region: ComplexRect,
        iterations: u32,
        fractional_iteration: Option<FractionalIteration>,
    ) -> Self {
        Self {
            image_size,
            region,
            iterations,
            fractional_iteration,
        }
    }

    #[must_use]
    pub fn from_params(params: &FieldParams) -> Self {
        Self::new(
            params.image_size,
            params.region,
            params.iterations,
            params.fractional_iteration,
        )
    }

    /// Final value of `z ← z² + c` started at `z = c`.
    #[must_use]
    pub fn value(&self, c: Complex) -> Complex {
        iterate_value(c, self.iterations, self.fractional_iteration, |z| {
            z.square_add(c)
        })
    }
}

impl FieldAlgorithm for JuliaValueAlgorithm {
    type Sample = Complex;

    fn image_size(&self) -> ImageSize {
        self.image_size
    }

    fn compute(&self, pixel: Point) -> Self::Sample {
        self.value(pixel_to_complex_coords(pixel, self.image_size, self.region))
    }
}
