use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::field_samples::FieldSamples;

pub fn generate_field<Alg: FieldAlgorithm>(algorithm: &Alg) -> FieldSamples<Alg::Sample> {
    let image_size = algorithm.image_size();
    let samples = image_size
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect();

    FieldSamples::new(image_size, samples)
}
