pub mod escape_time;
pub mod field_kinds;
pub mod julia_value;
