use std::path::{Path, PathBuf};

use crate::core::data::pixel_buffer::PixelBuffer;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
    #[error("unsupported output format for '{}'", .0.display())]
    UnsupportedFormat(PathBuf),
}

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError>;

    /// Extension written files should carry, without the dot.
    fn extension(&self) -> &'static str;
}

impl<P: FilePresenterPort + ?Sized> FilePresenterPort for Box<P> {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        (**self).present(buffer, filepath)
    }

    fn extension(&self) -> &'static str {
        (**self).extension()
    }
}
