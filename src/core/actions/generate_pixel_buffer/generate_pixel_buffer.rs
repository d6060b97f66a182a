use rayon::prelude::*;

use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::field_samples::FieldSamples;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Colours every sample of a field into a fresh RGBA buffer.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T> + ?Sized>(
    field: FieldSamples<T>,
    mapper: &CMap,
) -> PixelBuffer {
    let mut pixel_buffer = PixelBuffer::new(field.image_size());

    for (pixel, sample) in pixel_buffer
        .data_mut()
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(field.into_samples())
    {
        pixel.copy_from_slice(&mapper.map(sample).to_array());
    }

    pixel_buffer
}

/// Parallel variant of [`generate_pixel_buffer`]; each pixel's four bytes are
/// written by exactly one task.
pub fn generate_pixel_buffer_rayon<T, CMap>(field: FieldSamples<T>, mapper: &CMap) -> PixelBuffer
where
    T: Send,
    CMap: ColourMap<T> + Sync + ?Sized,
{
    let mut pixel_buffer = PixelBuffer::new(field.image_size());

    pixel_buffer
        .data_mut()
        .par_chunks_mut(BYTES_PER_PIXEL)
        .zip(field.into_samples().into_par_iter())
        .for_each(|(pixel, sample)| pixel.copy_from_slice(&mapper.map(sample).to_array()));

    pixel_buffer
}
