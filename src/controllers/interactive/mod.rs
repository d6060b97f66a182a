//! Background rendering for interactive viewers.
//!
//! A single worker thread renders the newest [`RenderRequest`] and hands the
//! finished [`FrameData`] back over a channel. The caller polls for frames
//! from its own loop; frames superseded while rendering are dropped.

pub mod animator;
mod controller;
pub mod data;
pub mod scheduler;

pub use animator::FractionalIterationAnimator;
pub use controller::InteractiveController;
pub use data::{frame_data::FrameData, render_request::RenderRequest};
pub use scheduler::{RenderScheduler, SchedulerAction};
