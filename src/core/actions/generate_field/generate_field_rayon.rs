use rayon::prelude::*;

use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::field_samples::FieldSamples;
use crate::core::data::point::Point;

/// Generates field samples in parallel, one rayon task per row.
///
/// Output order matches [`generate_field`](super::generate_field::generate_field).
pub fn generate_field_rayon<Alg>(algorithm: &Alg) -> FieldSamples<Alg::Sample>
where
    Alg: FieldAlgorithm + Sync,
    Alg::Sample: Send,
{
    let image_size = algorithm.image_size();
    let width = image_size.width;

    let samples = (0..image_size.height)
        .into_par_iter()
        .flat_map_iter(|y| (0..width).map(move |x| algorithm.compute(Point { x, y })))
        .collect();

    FieldSamples::new(image_size, samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_field::generate_field::generate_field;
    use crate::core::data::image_size::ImageSize;

    #[derive(Debug)]
    struct StubAlgorithm {
        image_size: ImageSize,
    }

    impl FieldAlgorithm for StubAlgorithm {
        type Sample = u64;

        fn image_size(&self) -> ImageSize {
            self.image_size
        }

        fn compute(&self, pixel: Point) -> Self::Sample {
            u64::from(pixel.x) * 1000 + u64::from(pixel.y)
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubAlgorithm {
            image_size: ImageSize::new(10, 8),
        };

        assert_eq!(generate_field_rayon(&algorithm), generate_field(&algorithm));
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubAlgorithm {
            image_size: ImageSize::new(1, 1),
        };

        assert_eq!(generate_field_rayon(&algorithm).into_samples(), vec![0]);
    }

    #[test]
    fn test_rayon_with_large_rect() {
        let algorithm = StubAlgorithm {
            image_size: ImageSize::new(317, 211),
        };

        assert_eq!(generate_field_rayon(&algorithm), generate_field(&algorithm));
    }
}
