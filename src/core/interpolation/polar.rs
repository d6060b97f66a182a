use crate::core::data::complex::Complex;
use std::f64::consts::{PI, TAU};

fn lerp(start: f64, goal: f64, t: f64) -> f64 {
    start + (goal - start) * t
}

fn polar_blend(start: Complex, goal: Complex, goal_angle: f64, t: f64) -> Complex {
    Complex::from_polar(
        lerp(start.magnitude(), goal.magnitude(), t),
        lerp(start.argument(), goal_angle, t),
    )
}

/// Blends magnitude and argument independently, without wrapping the angle.
#[must_use]
pub fn linear_angle_and_abs(start: Complex, goal: Complex, t: f64) -> Complex {
    polar_blend(start, goal, goal.argument(), t)
}

/// Like [`linear_angle_and_abs`], but turns through the smaller arc.
///
/// The goal angle wraps in both directions, so the blended turn never
/// exceeds π whichever side of the start it lies.
#[must_use]
pub fn linear_short_angle_and_abs(start: Complex, goal: Complex, t: f64) -> Complex {
    let start_angle = start.argument();
    let mut goal_angle = goal.argument();

    if goal_angle - start_angle > PI {
        goal_angle -= TAU;
    } else if goal_angle - start_angle < -PI {
        goal_angle += TAU;
    }

    polar_blend(start, goal, goal_angle, t)
}
