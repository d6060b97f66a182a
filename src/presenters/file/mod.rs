pub mod png;
pub mod ppm;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use self::png::PngFilePresenter;
use self::ppm::PpmFilePresenter;
use std::path::Path;

/// Picks an encoder from the file extension. Paths without one get PNG.
pub fn presenter_for_path(path: &Path) -> Result<Box<dyn FilePresenterPort>, PresentError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        None | Some("png") => Ok(Box::new(PngFilePresenter::new())),
        Some("ppm") => Ok(Box::new(PpmFilePresenter::new())),
        Some(_) => Err(PresentError::UnsupportedFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_presenter_by_extension() {
        let ppm = presenter_for_path(Path::new("out/frame.PPM")).unwrap();
        let png = presenter_for_path(Path::new("out/frame.png")).unwrap();
        let bare = presenter_for_path(Path::new("out/frame")).unwrap();

        assert_eq!(ppm.extension(), "ppm");
        assert_eq!(png.extension(), "png");
        assert_eq!(bare.extension(), "png");
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = presenter_for_path(Path::new("frame.gif"));

        assert!(matches!(result, Err(PresentError::UnsupportedFormat(_))));
    }
}
