use crate::core::data::field_params::{FieldParams, FractionalIteration};
use crate::core::interpolation::Interpolation;

// The factor advances a tenth per frame and wraps once it reaches 0.9.
const STEPS_PER_UNIT: u32 = 10;
const WRAP_STEP: u32 = 9;

/// Steps a Julia-value field through fractional iteration counts, one frame
/// at a time.
///
/// Each frame raises the interpolation factor by 0.1; when it reaches 0.9 it
/// drops back to 0 and the whole iteration count advances by one.
#[derive(Debug, Clone)]
pub struct FractionalIterationAnimator {
    base: FieldParams,
    method: Interpolation,
    iterations: u32,
    step: u32,
}

impl FractionalIterationAnimator {
    #[must_use]
    pub fn new(base: FieldParams, method: Interpolation) -> Self {
        Self {
            base,
            method,
            iterations: base.iterations,
            step: 0,
        }
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        f64::from(self.step) / f64::from(STEPS_PER_UNIT)
    }

    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Params for the current frame.
    #[must_use]
    pub fn current(&self) -> FieldParams {
        FieldParams {
            iterations: self.iterations,
            fractional_iteration: Some(FractionalIteration::new(self.factor(), self.method)),
            ..self.base
        }
    }

    /// Moves to the next frame and returns its params.
    pub fn advance(&mut self) -> FieldParams {
        self.step += 1;
        if self.step >= WRAP_STEP {
            self.step = 0;
            self.iterations = self.iterations.saturating_add(1);
        }

        self.current()
    }
}

impl Iterator for FractionalIterationAnimator {
    type Item = FieldParams;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.advance())
    }
}
