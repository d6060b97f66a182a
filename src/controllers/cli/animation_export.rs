use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::controllers::cli::batch_export::ExportError;
use crate::controllers::interactive::{
    FractionalIterationAnimator, FrameData, InteractiveController, RenderRequest,
    RenderScheduler, SchedulerAction,
};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::field_params::FieldParams;
use crate::core::fractals::field_kinds::FieldKind;
use crate::core::interpolation::Interpolation;
use tracing::{debug, info};

/// What an animation export rendered and wrote.
#[derive(Debug, Default)]
pub struct AnimationExport {
    /// Written files, in the order their frames were collected.
    pub written: Vec<PathBuf>,
    /// Requests handed to the render worker.
    pub submitted: u32,
    /// Ticks whose request arrived while another frame was still rendering.
    pub coalesced: u32,
}

/// Plays the fractional-iteration animation of the Julia-value field for
/// `ticks` ticks, writing every frame collected along the way into `out_dir`.
///
/// Each tick waits at most `tick_interval` for a finished frame. Ticks that
/// arrive while a frame is in flight coalesce into the newest pending request,
/// so slow renders skip animation steps; the last tick is always rendered.
pub fn export_animation<P: FilePresenterPort>(
    base: FieldParams,
    method: Interpolation,
    ticks: u32,
    tick_interval: Duration,
    out_dir: &Path,
    presenter: &P,
) -> Result<AnimationExport, ExportError> {
    base.validate()?;
    std::fs::create_dir_all(out_dir).map_err(|err| ExportError::Present(err.into()))?;

    let mut controller = InteractiveController::new();
    let mut scheduler = RenderScheduler::new();
    let mut animator = FractionalIterationAnimator::new(base, method);
    let mut export = AnimationExport::default();
    let mut collected_generation = 0;

    info!(ticks, %method, out_dir = %out_dir.display(), "exporting animation");

    for tick in 0..ticks {
        let request = Arc::new(RenderRequest::new(FieldKind::JuliaValue, animator.advance()));

        match scheduler.update(request, collected_generation, |request| {
            controller.submit_request(request)
        }) {
            SchedulerAction::Submitted { generation } => {
                export.submitted += 1;
                debug!(
                    tick,
                    generation,
                    iterations = animator.iterations(),
                    factor = animator.factor(),
                    "frame submitted"
                );
            }
            SchedulerAction::Coalesced => {
                export.coalesced += 1;
                debug!(tick, "frame coalesced");
            }
            SchedulerAction::NothingToDo => {}
        }

        if let Some(frame) = controller.wait_frame(tick_interval) {
            collected_generation =
                collect_frame(frame, &mut scheduler, &controller, out_dir, presenter, &mut export)?;
        }
    }

    while let Some(generation) = scheduler.in_flight_generation() {
        let frame = controller
            .next_frame()
            .ok_or(ExportError::WorkerStopped(generation))?;
        collect_frame(frame, &mut scheduler, &controller, out_dir, presenter, &mut export)?;
    }

    controller.shutdown();
    info!(
        frames = export.written.len(),
        coalesced = export.coalesced,
        "animation exported"
    );

    Ok(export)
}

fn collect_frame<P: FilePresenterPort>(
    frame: FrameData,
    scheduler: &mut RenderScheduler,
    controller: &InteractiveController,
    out_dir: &Path,
    presenter: &P,
    export: &mut AnimationExport,
) -> Result<u64, ExportError> {
    let path = out_dir.join(format!(
        "frame_{:04}.{}",
        export.written.len(),
        presenter.extension()
    ));
    presenter.present(&frame.pixel_buffer, &path)?;

    debug!(
        generation = frame.generation,
        duration = ?frame.render_duration,
        path = %path.display(),
        "frame written"
    );
    export.written.push(path);

    if let SchedulerAction::Submitted { generation } =
        scheduler.observe_completion(frame.generation, |request| {
            controller.submit_request(request)
        })
    {
        export.submitted += 1;
        debug!(generation, "pending frame submitted");
    }

    Ok(frame.generation)
}
