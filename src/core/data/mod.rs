pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod field_params;
pub mod field_samples;
pub mod image_size;
pub mod pixel_buffer;
pub mod point;
