use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::core::fractals::field_kinds::render_field;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Arc<RenderRequest>)>>,
    wake: Condvar,
    shutdown: AtomicBool,
}

pub struct InteractiveController {
    shared: Arc<SharedState>,
    frames: Receiver<FrameData>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    #[must_use]
    pub fn new() -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
        });

        let (sender, frames) = mpsc::channel();
        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared, &sender);
        });

        Self {
            shared,
            frames,
            worker: Some(worker),
        }
    }

    /// Replaces any request the worker has not yet started and returns its
    /// generation.
    pub fn submit_request(&self, request: Arc<RenderRequest>) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();
        debug!(generation, "render request submitted");

        generation
    }

    /// Next finished frame, if one is ready. Never blocks.
    pub fn poll_frame(&self) -> Option<FrameData> {
        self.frames.try_recv().ok()
    }

    /// Waits up to `timeout` for the next finished frame.
    pub fn wait_frame(&self, timeout: Duration) -> Option<FrameData> {
        self.frames.recv_timeout(timeout).ok()
    }

    /// Blocks until the next frame arrives. `None` once the worker has stopped.
    pub fn next_frame(&self) -> Option<FrameData> {
        self.frames.recv().ok()
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &SharedState, frames: &Sender<FrameData>) {
        loop {
            let (job_generation, request) = {
                let mut guard = shared
                    .latest_request
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(req) = guard.take() {
                        break req;
                    }

                    guard = shared
                        .wake
                        .wait(guard)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            let start = Instant::now();
            let pixel_buffer = render_field(request.kind, &request.params);
            let render_duration = start.elapsed();

            let current_gen = shared.generation.load(Ordering::Acquire);
            if job_generation != current_gen {
                warn!(
                    generation = job_generation,
                    current = current_gen,
                    "discarding stale frame"
                );
                continue;
            }

            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);

            let frame = FrameData {
                generation: job_generation,
                kind: request.kind,
                pixel_buffer,
                render_duration,
            };

            if frames.send(frame).is_err() {
                return;
            }
        }
    }
}

impl Default for InteractiveController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
