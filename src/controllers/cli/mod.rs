pub mod animation_export;
pub mod batch_export;
