use crate::core::data::complex::Complex;

/// Recovers the constant `c` of `goal = start² + c`.
#[must_use]
pub fn recover_constant(start: Complex, goal: Complex) -> Complex {
    Complex {
        real: goal.real + start.imag * start.imag - start.real * start.real,
        imag: goal.imag - 2.0 * start.real * start.imag,
    }
}

/// Fractional iterate `start^(2/(2-t)) + t·c`.
///
/// At `t = 1` this is exactly one more step of the recurrence.
#[must_use]
pub fn polynomial(start: Complex, goal: Complex, t: f64) -> Complex {
    let c = recover_constant(start, goal);

    start.powf(2.0 / (2.0 - t)) + c * t
}
