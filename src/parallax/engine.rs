use std::collections::BTreeMap;

use crate::{
    foundation::core::{NodeId, SubjectId},
    host::{ElementGeometry, StyleSink},
    parallax::{
        profile::{MotionProfile, ParallaxFrame},
        schedule::{FrameRequest, FrameScheduler},
    },
};

#[derive(Clone, Debug)]
struct Subject {
    reference: NodeId,
    profile: MotionProfile,
    pending: Option<FrameRequest>,
}

/// Per-frame parallax recomputation for every background layer of a page.
///
/// Each attached subject keeps exactly one outstanding frame request. Handling
/// a frame re-requests the next one, so the schedule repeats until
/// [`ParallaxEngine::detach`] cancels it; a missing reference element only
/// skips the write for that frame.
#[derive(Clone, Debug, Default)]
pub struct ParallaxEngine {
    subjects: BTreeMap<SubjectId, Subject>,
    next_id: u64,
}

impl ParallaxEngine {
    /// Engine with no subjects.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start recomputing `profile` against `reference` every frame.
    pub fn attach(
        &mut self,
        reference: NodeId,
        profile: MotionProfile,
        scheduler: &mut impl FrameScheduler,
    ) -> SubjectId {
        let id = SubjectId(self.next_id);
        self.next_id += 1;
        let pending = Some(scheduler.request_frame(id));
        tracing::debug!(subject = %id, %reference, "parallax subject attached");
        self.subjects.insert(
            id,
            Subject {
                reference,
                profile,
                pending,
            },
        );
        id
    }

    /// Stop the schedule of `id` and forget it. Returns `false` for unknown ids.
    pub fn detach(&mut self, id: SubjectId, scheduler: &mut impl FrameScheduler) -> bool {
        let Some(subject) = self.subjects.remove(&id) else {
            return false;
        };
        if let Some(request) = subject.pending {
            scheduler.cancel_frame(request);
        }
        tracing::debug!(subject = %id, "parallax subject detached");
        true
    }

    /// Detach every subject.
    pub fn detach_all(&mut self, scheduler: &mut impl FrameScheduler) {
        for (_, subject) in std::mem::take(&mut self.subjects) {
            if let Some(request) = subject.pending {
                scheduler.cancel_frame(request);
            }
        }
    }

    /// Frame callback for `id`.
    ///
    /// Reads the reference geometry, writes the frame to `sink` and requests
    /// the next frame. Callbacks for detached subjects do nothing and do not
    /// reschedule.
    pub fn on_frame(
        &mut self,
        id: SubjectId,
        geometry: &impl ElementGeometry,
        sink: &mut impl StyleSink,
        scheduler: &mut impl FrameScheduler,
    ) -> Option<ParallaxFrame> {
        let Some(subject) = self.subjects.get_mut(&id) else {
            tracing::trace!(subject = %id, "frame for detached subject");
            return None;
        };
        // One request per subject, also when called outside a paint cycle.
        if let Some(previous) = subject.pending.take() {
            scheduler.cancel_frame(previous);
        }
        subject.pending = Some(scheduler.request_frame(id));

        let frame = sample(subject.reference, &subject.profile, geometry);
        match &frame {
            Some(frame) => {
                tracing::trace!(subject = %id, progress = frame.progress, "parallax tick");
                sink.set_parallax(id, frame);
            }
            None => tracing::trace!(subject = %id, "reference unavailable; tick skipped"),
        }
        frame
    }

    /// Whether `id` is attached.
    pub fn is_attached(&self, id: SubjectId) -> bool {
        self.subjects.contains_key(&id)
    }

    /// Attached subject ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.subjects.keys().copied()
    }

    /// Profile of `id`.
    pub fn profile(&self, id: SubjectId) -> Option<&MotionProfile> {
        self.subjects.get(&id).map(|s| &s.profile)
    }

    /// Number of attached subjects.
    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    /// `true` when nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// One-off computation of the frame for `reference` under `profile`.
///
/// `None` when the host cannot report the viewport or the reference rect.
pub fn sample(
    reference: NodeId,
    profile: &MotionProfile,
    geometry: &impl ElementGeometry,
) -> Option<ParallaxFrame> {
    let viewport = geometry.viewport()?;
    let rect = geometry.rect(reference)?;
    let p = profile.progress(rect.y0, rect.height(), viewport.height);
    Some(profile.sample(p))
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/engine.rs"]
mod tests;
