use std::collections::BTreeMap;

use crate::foundation::core::SubjectId;

/// Handle of one outstanding frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequest(pub u64);

/// The host's animation-frame scheduler.
///
/// A request asks for one callback on the next paint cycle; the host then
/// calls [`ParallaxEngine::on_frame`](crate::ParallaxEngine::on_frame) for the
/// subject. Requests are one-shot and must be cancellable.
pub trait FrameScheduler {
    /// Ask for a callback for `subject` on the next frame.
    fn request_frame(&mut self, subject: SubjectId) -> FrameRequest;

    /// Cancel a request that has not fired yet. Unknown handles are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Deterministic scheduler where the caller decides when a frame happens.
///
/// [`ManualScheduler::advance`] hands back the subjects whose requests are due
/// (all pending ones, in request order) and clears them, the same way a paint
/// cycle consumes `requestAnimationFrame` callbacks.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    next: u64,
    pending: BTreeMap<FrameRequest, SubjectId>,
}

impl ManualScheduler {
    /// Scheduler with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one paint cycle: return due subjects and forget their requests.
    pub fn advance(&mut self) -> Vec<SubjectId> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    /// Number of outstanding requests.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether `subject` has an outstanding request.
    pub fn is_pending(&self, subject: SubjectId) -> bool {
        self.pending.values().any(|s| *s == subject)
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self, subject: SubjectId) -> FrameRequest {
        let request = FrameRequest(self.next);
        self.next += 1;
        self.pending.insert(request, subject);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.pending.remove(&request);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/schedule.rs"]
mod tests;
