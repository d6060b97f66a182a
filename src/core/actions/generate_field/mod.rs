pub mod generate_field;
pub mod generate_field_rayon;
pub mod ports;
