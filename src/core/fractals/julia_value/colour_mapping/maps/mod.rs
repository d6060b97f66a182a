pub mod hsl_polar;
pub mod polar_projection;
