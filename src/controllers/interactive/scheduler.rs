use crate::controllers::interactive::data::render_request::RenderRequest;
use std::sync::Arc;

/// Keeps at most one render in flight and coalesces everything requested
/// meanwhile into the newest pending request.
pub struct RenderScheduler {
    pending_request: Option<Arc<RenderRequest>>,
    in_flight_generation: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerAction {
    Submitted { generation: u64 },
    Coalesced,
    NothingToDo,
}

impl RenderScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending_request: None,
            in_flight_generation: None,
        }
    }

    pub fn update(
        &mut self,
        desired: Arc<RenderRequest>,
        last_completed_gen: u64,
        submit: impl FnOnce(Arc<RenderRequest>) -> u64,
    ) -> SchedulerAction {
        self.mark_completed(last_completed_gen);
        self.pending_request = Some(desired);

        if self.in_flight_generation.is_none() {
            return self.submit_pending(submit);
        }

        SchedulerAction::Coalesced
    }

    /// Records a collected frame and submits the pending request, if any.
    pub fn observe_completion(
        &mut self,
        last_completed_gen: u64,
        submit: impl FnOnce(Arc<RenderRequest>) -> u64,
    ) -> SchedulerAction {
        self.mark_completed(last_completed_gen);

        if self.in_flight_generation.is_some() {
            return SchedulerAction::NothingToDo;
        }

        self.submit_pending(submit)
    }

    pub fn reset(&mut self) {
        self.pending_request = None;
        self.in_flight_generation = None;
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_request.is_some()
    }

    #[must_use]
    pub fn in_flight_generation(&self) -> Option<u64> {
        self.in_flight_generation
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending_request.is_none() && self.in_flight_generation.is_none()
    }

    fn mark_completed(&mut self, last_completed_gen: u64) {
        if self
            .in_flight_generation
            .is_some_and(|generation| last_completed_gen >= generation)
        {
            self.in_flight_generation = None;
        }
    }

    fn submit_pending(
        &mut self,
        submit: impl FnOnce(Arc<RenderRequest>) -> u64,
    ) -> SchedulerAction {
        let Some(request) = self.pending_request.take() else {
            return SchedulerAction::NothingToDo;
        };

        let generation = submit(request);
        self.in_flight_generation = Some(generation);

        SchedulerAction::Submitted { generation }
    }
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderScheduler, SchedulerAction};
    use crate::controllers::interactive::data::render_request::RenderRequest;
    use crate::core::data::field_params::FieldParams;
    use crate::core::fractals::field_kinds::FieldKind;
    use std::sync::Arc;

    fn request(max_iterations: u32) -> Arc<RenderRequest> {
        Arc::new(RenderRequest::new(
            FieldKind::EscapeTime,
            FieldParams {
                max_iterations,
                ..FieldParams::default()
            },
        ))
    }

    #[test]
    fn submits_immediately_when_nothing_is_in_flight() {
        let mut scheduler = RenderScheduler::new();

        let action = scheduler.update(request(10), 0, |_| 1);

        assert_eq!(action, SchedulerAction::Submitted { generation: 1 });
        assert_eq!(scheduler.in_flight_generation(), Some(1));
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn coalesces_while_in_flight() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.update(request(10), 0, |_| 1);

        let mut submitted = false;
        let next = request(11);
        let action = scheduler.update(Arc::clone(&next), 0, |_| {
            submitted = true;
            2
        });

        assert_eq!(action, SchedulerAction::Coalesced);
        assert!(!submitted);
        assert_eq!(scheduler.in_flight_generation(), Some(1));
        assert!(Arc::ptr_eq(
            scheduler.pending_request.as_ref().expect("pending exists"),
            &next
        ));
    }

    #[test]
    fn multiple_coalesced_updates_keep_only_the_newest_pending_request() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.update(request(10), 0, |_| 1);

        let mut last = request(11);
        for max_iterations in 12..=20 {
            let next = request(max_iterations);
            let _ = scheduler.update(Arc::clone(&next), 0, |_| panic!("must not submit"));
            last = next;
        }

        assert!(Arc::ptr_eq(
            scheduler.pending_request.as_ref().expect("pending exists"),
            &last
        ));
    }

    #[test]
    fn completion_allows_pending_request_to_submit() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.update(request(10), 0, |_| 1);
        let _ = scheduler.update(request(11), 0, |_| panic!("must not submit"));

        let newest = request(12);
        let mut submitted_request: Option<Arc<RenderRequest>> = None;
        let action = scheduler.update(Arc::clone(&newest), 1, |request| {
            submitted_request = Some(request);
            2
        });

        assert_eq!(action, SchedulerAction::Submitted { generation: 2 });
        assert_eq!(scheduler.in_flight_generation(), Some(2));
        assert!(!scheduler.has_pending());
        assert!(Arc::ptr_eq(
            submitted_request
                .as_ref()
                .expect("a request should have been submitted"),
            &newest
        ));
    }

    #[test]
    fn completion_mismatch_keeps_in_flight_generation() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.update(request(10), 0, |_| 5);

        let action = scheduler.update(request(11), 4, |_| panic!("must not submit"));

        assert_eq!(action, SchedulerAction::Coalesced);
        assert_eq!(scheduler.in_flight_generation(), Some(5));
        assert!(scheduler.has_pending());
    }

    #[test]
    fn observe_completion_submits_pending() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.update(request(10), 0, |_| 7);
        let _ = scheduler.update(request(11), 0, |_| panic!("must not submit"));

        let early = scheduler.observe_completion(6, |_| panic!("must not submit"));
        assert_eq!(early, SchedulerAction::NothingToDo);
        assert_eq!(scheduler.in_flight_generation(), Some(7));

        let action = scheduler.observe_completion(7, |_| 8);
        assert_eq!(action, SchedulerAction::Submitted { generation: 8 });
        assert_eq!(scheduler.in_flight_generation(), Some(8));
    }

    #[test]
    fn observe_completion_without_pending_goes_idle() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.update(request(10), 0, |_| 3);

        let action = scheduler.observe_completion(3, |_| panic!("must not submit"));

        assert_eq!(action, SchedulerAction::NothingToDo);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn reset_clears_pending_and_in_flight_state() {
        let mut scheduler = RenderScheduler::new();
        let _ = scheduler.update(request(10), 0, |_| 1);
        let _ = scheduler.update(request(11), 0, |_| panic!("must not submit"));

        scheduler.reset();

        assert!(!scheduler.has_pending());
        assert_eq!(scheduler.in_flight_generation(), None);
    }
}
