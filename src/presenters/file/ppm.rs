use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Binary P6 PPM writer. Alpha is dropped.
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> Result<(), PresentError> {
        let mut file = BufWriter::new(File::create(filepath)?);
        let image_size = buffer.image_size();

        // P6 means binary RGB, then width, height and max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", image_size.width, image_size.height)?;
        writeln!(file, "255")?;

        for pixel in buffer.buffer().chunks_exact(BYTES_PER_PIXEL) {
            file.write_all(&pixel[..3])?;
        }

        file.flush()?;

        Ok(())
    }

    fn extension(&self) -> &'static str {
        "ppm"
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
