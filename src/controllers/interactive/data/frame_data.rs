use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::field_kinds::FieldKind;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData {
    pub generation: u64,
    pub kind: FieldKind,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
