use crate::core::data::complex::Complex;

/// Blends the real and imaginary parts independently.
#[must_use]
pub fn linear_xy(start: Complex, goal: Complex, t: f64) -> Complex {
    Complex {
        real: start.real + (goal.real - start.real) * t,
        imag: start.imag + (goal.imag - start.imag) * t,
    }
}
