pub mod algorithm;
pub mod colour_map;

use crate::core::actions::generate_field::generate_field_rayon::generate_field_rayon;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer_rayon;
use crate::core::data::field_params::FieldParams;
use crate::core::data::pixel_buffer::PixelBuffer;
use algorithm::EscapeTimeAlgorithm;
use colour_map::EscapeTimeHsvCycle;
use std::time::Instant;
use tracing::{debug, info};

/// Renders the escape-time field described by `params`.
#[must_use]
pub fn escape_time_field(params: &FieldParams) -> PixelBuffer {
    let started = Instant::now();
    let algorithm = EscapeTimeAlgorithm::from_params(params);
    let colour_map = EscapeTimeHsvCycle::new(params.max_iterations, params.colour_offset);

    let field = generate_field_rayon(&algorithm);
    debug!(samples = field.samples().len(), "escape-time samples computed");

    let pixel_buffer = generate_pixel_buffer_rayon(field, &colour_map);
    info!(
        width = params.image_size.width,
        height = params.image_size.height,
        max_iterations = params.max_iterations,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "escape-time field rendered"
    );

    pixel_buffer
}
