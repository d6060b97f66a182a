use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::PixelBuffer;
use image::{ExtendedColorType, ImageFormat};
use std::path::Path;

/// RGBA8 PNG writer backed by the `image` crate.
pub struct PngFilePresenter {}

impl FilePresenterPort for PngFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        let image_size = buffer.image_size();

        image::save_buffer_with_format(
            filepath,
            buffer.buffer(),
            image_size.width,
            image_size.height,
            ExtendedColorType::Rgba8,
            ImageFormat::Png,
        )?;

        Ok(())
    }

    fn extension(&self) -> &'static str {
        "png"
    }
}

impl Default for PngFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
