use crate::core::data::image_size::ImageSize;
use crate::core::data::point::Point;

/// Evaluates one pixel of a field.
///
/// Implementations are pure: the same pixel always yields the same sample.
pub trait FieldAlgorithm {
    type Sample;

    fn image_size(&self) -> ImageSize;

    fn compute(&self, pixel: Point) -> Self::Sample;
}
