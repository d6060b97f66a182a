use crate::core::data::colour::Colour;
use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;
use thiserror::Error;

pub const BYTES_PER_PIXEL: usize = 4;

fn image_size_to_buffer_size(image_size: ImageSize) -> usize {
    image_size.size() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error("image size {image_size_bytes} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        image_size_bytes: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGBA8 image, row-major, top-to-bottom, left-to-right.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    image_size: ImageSize,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(image_size: ImageSize) -> Self {
        let total_bytes = image_size_to_buffer_size(image_size);

        Self {
            image_size,
            buffer: vec![0; total_bytes],
        }
    }

    pub fn from_data(
        image_size: ImageSize,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected = image_size_to_buffer_size(image_size);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                image_size_bytes: expected,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { image_size, buffer })
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.image_size.contains_point(pixel) {
            return None;
        }

        let index = (pixel.y as usize * self.image_size.width as usize + pixel.x as usize)
            * BYTES_PER_PIXEL;
        let bytes = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
            a: bytes[3],
        })
    }
}
