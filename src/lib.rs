mod controllers;
mod core;
mod presenters;

pub use controllers::cli::animation_export::{AnimationExport, export_animation};
pub use controllers::cli::batch_export::{BatchExportController, ExportError};
pub use controllers::interactive::{
    FractionalIterationAnimator, FrameData, InteractiveController, RenderRequest,
    RenderScheduler, SchedulerAction,
};
pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};

pub use core::actions::generate_field::generate_field::generate_field;
pub use core::actions::generate_field::generate_field_rayon::generate_field_rayon;
pub use core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
pub use core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_rayon,
};
pub use core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
pub use core::colour::{hsl_to_rgb, hsv_to_rgb, polar_to_rgb};
pub use core::data::colour::Colour;
pub use core::data::complex::Complex;
pub use core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use core::data::field_params::{FieldParams, FractionalIteration, ParamsError};
pub use core::data::field_samples::FieldSamples;
pub use core::data::image_size::ImageSize;
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::point::Point;
pub use core::fractals::escape_time::algorithm::{EscapeTime, EscapeTimeAlgorithm};
pub use core::fractals::escape_time::colour_map::EscapeTimeHsvCycle;
pub use core::fractals::escape_time::escape_time_field;
pub use core::fractals::field_kinds::{FieldKind, UnknownFieldKind, render_field};
pub use core::fractals::julia_value::algorithm::JuliaValueAlgorithm;
pub use core::fractals::julia_value::colour_mapping::factory::julia_value_colour_map_factory;
pub use core::fractals::julia_value::colour_mapping::kinds::{
    JuliaValueColourMapKind, UnknownColourMap,
};
pub use core::fractals::julia_value::colour_mapping::map::JuliaValueColourMap;
pub use core::fractals::julia_value::julia_value_field;
pub use core::interpolation::{Interpolation, UnknownInterpolation};
pub use core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub use presenters::file::png::PngFilePresenter;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::file::presenter_for_path;
