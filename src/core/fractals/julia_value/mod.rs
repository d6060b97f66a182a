pub mod algorithm;
pub mod colour_mapping;

use crate::core::actions::generate_field::generate_field_rayon::generate_field_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_rayon;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::field_params::FieldParams;
use crate::core::data::pixel_buffer::PixelBuffer;
use algorithm::JuliaValueAlgorithm;
use colour_mapping::factory::julia_value_colour_map_factory;
use std::time::Instant;
use tracing::{debug, info};

/// Renders the Julia-value field described by `params`.
#[must_use]
pub fn julia_value_field(params: &FieldParams) -> PixelBuffer {
    let started = Instant::now();
    let algorithm = JuliaValueAlgorithm::from_params(params);
    let colour_map = julia_value_colour_map_factory(params.julia_colour_map);

    let field = generate_field_rayon(&algorithm);
    debug!(
        samples = field.samples().len(),
        colour_map = colour_map.display_name(),
        "julia-value samples computed"
    );

    let pixel_buffer = generate_pixel_buffer_rayon(field, &colour_map);
    info!(
        width = params.image_size.width,
        height = params.image_size.height,
        iterations = params.iterations,
        fractional = params.fractional_iteration.map(|f| f.factor),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "julia-value field rendered"
    );

    pixel_buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::field_params::FractionalIteration;
    use crate::core::data::image_size::ImageSize;
    use crate::core::fractals::julia_value::colour_mapping::kinds::JuliaValueColourMapKind;
    use crate::core::interpolation::Interpolation;

    fn two_by_two(iterations: u32) -> FieldParams {
        FieldParams {
            image_size: ImageSize::new(2, 2),
            region: ComplexRect::default(),
            iterations,
            ..FieldParams::default()
        }
    }

    #[test]
    fn test_two_by_two_snapshot_without_iterating() {
        let pixel_buffer = julia_value_field(&two_by_two(0));

        assert_eq!(
            pixel_buffer.buffer(),
            &vec![0, 17, 38, 255, 7, 0, 66, 255, 0, 45, 45, 255, 0, 145, 145, 255]
        );
    }

    #[test]
    fn test_two_by_two_snapshot_after_one_iteration() {
        let pixel_buffer = julia_value_field(&two_by_two(1));

        assert_eq!(
            pixel_buffer.buffer(),
            &vec![15, 25, 0, 255, 0, 53, 53, 255, 45, 0, 0, 255, 0, 224, 224, 255]
        );
    }

    #[test]
    fn test_two_by_two_snapshot_halfway_to_second_iteration() {
        let params = FieldParams {
            fractional_iteration: Some(FractionalIteration::new(0.5, Interpolation::LinearXy)),
            ..two_by_two(1)
        };

        let pixel_buffer = julia_value_field(&params);

        assert_eq!(
            pixel_buffer.buffer(),
            &vec![0, 12, 5, 255, 112, 0, 114, 255, 45, 0, 0, 255, 0, 186, 186, 255]
        );
    }

    #[test]
    fn test_colour_offset_is_ignored() {
        let shifted = FieldParams {
            colour_offset: 0.7,
            ..two_by_two(3)
        };

        assert_eq!(julia_value_field(&shifted), julia_value_field(&two_by_two(3)));
    }

    #[test]
    fn test_colour_map_kind_changes_output() {
        let projected = FieldParams {
            julia_colour_map: JuliaValueColourMapKind::PolarProjection,
            ..two_by_two(0)
        };

        let pixel_buffer = julia_value_field(&projected);

        assert_ne!(pixel_buffer, julia_value_field(&two_by_two(0)));
        assert!(pixel_buffer.buffer().chunks_exact(4).all(|pixel| pixel[1] == 0 && pixel[3] == 255));
    }

    #[test]
    fn test_every_pixel_is_opaque_even_when_diverged() {
        let params = FieldParams {
            image_size: ImageSize::new(8, 6),
            iterations: 200,
            ..FieldParams::default()
        };

        let pixel_buffer = julia_value_field(&params);

        assert_eq!(pixel_buffer.buffer_size(), 8 * 6 * 4);
        assert!(pixel_buffer.buffer().chunks_exact(4).all(|pixel| pixel[3] == 255));
    }
}
