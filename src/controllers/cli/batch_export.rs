use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::field_params::{FieldParams, ParamsError};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::field_kinds::{FieldKind, render_field};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Params(#[from] ParamsError),
    #[error(transparent)]
    Present(#[from] PresentError),
    #[error("nothing has been rendered yet")]
    NothingRendered,
    #[error("render worker stopped before delivering frame {0}")]
    WorkerStopped(u64),
}

/// Renders a single field and hands it to a file presenter.
pub struct BatchExportController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> BatchExportController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, kind: FieldKind, params: &FieldParams) -> Result<(), ExportError> {
        params.validate()?;

        info!(
            %kind,
            width = params.image_size.width,
            height = params.image_size.height,
            "rendering field"
        );

        let start = Instant::now();
        let buffer = render_field(kind, params);

        info!(duration = ?start.elapsed(), "render finished");

        self.buffer = Some(buffer);

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    pub fn write(&self, filepath: &Path) -> Result<(), ExportError> {
        let buffer = self.buffer.as_ref().ok_or(ExportError::NothingRendered)?;

        self.presenter.present(buffer, filepath)?;
        info!(path = %filepath.display(), "saved");

        Ok(())
    }
}
