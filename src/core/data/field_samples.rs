use crate::core::data::image_size::ImageSize;

/// Per-pixel samples of a field in row-major order.
///
/// Only the field generators construct these, so `samples` always holds
/// exactly one entry per pixel of `image_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSamples<T> {
    image_size: ImageSize,
    samples: Vec<T>,
}

impl<T> FieldSamples<T> {
    pub(crate) fn new(image_size: ImageSize, samples: Vec<T>) -> Self {
        debug_assert_eq!(image_size.size(), samples.len());

        Self {
            image_size,
            samples,
        }
    }

    #[must_use]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[must_use]
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    #[must_use]
    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }
}
