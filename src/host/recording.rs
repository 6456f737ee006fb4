use crate::{
    foundation::core::{SubjectId, TargetId},
    host::StyleSink,
    parallax::profile::ParallaxFrame,
    reveal::{motion::MotionVector, state::RevealState},
};

/// One write received by a [`RecordingSink`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StyleWrite {
    /// Reveal state class toggle.
    RevealState {
        /// Target the class belongs to.
        target: TargetId,
        /// New state.
        state: RevealState,
    },
    /// Motion vector style variables.
    Motion {
        /// Target being moved.
        target: TargetId,
        /// Vector applied.
        motion: MotionVector,
    },
    /// Pending motion dropped.
    ClearMotion {
        /// Target whose motion was cancelled.
        target: TargetId,
    },
    /// Stagger delay.
    Delay {
        /// Target being delayed.
        target: TargetId,
        /// Delay in milliseconds.
        delay_ms: u32,
    },
    /// Parallax style variables.
    Parallax {
        /// Layer being transformed.
        subject: SubjectId,
        /// Values written.
        frame: ParallaxFrame,
    },
}

/// [`StyleSink`] that keeps every write in order.
///
/// Used by the command line front-end and by tests; a real host forwards the
/// same calls to its style system instead.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    writes: Vec<StyleWrite>,
}

impl RecordingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, oldest first.
    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// Take all writes, leaving the sink empty.
    pub fn drain(&mut self) -> Vec<StyleWrite> {
        std::mem::take(&mut self.writes)
    }

    /// Reveal states written for `target`, oldest first.
    pub fn states_for(&self, target: TargetId) -> Vec<RevealState> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                StyleWrite::RevealState { target: t, state } if *t == target => Some(*state),
                _ => None,
            })
            .collect()
    }

    /// Most recent motion vector written for `target`.
    pub fn last_motion(&self, target: TargetId) -> Option<MotionVector> {
        self.writes.iter().rev().find_map(|w| match w {
            StyleWrite::Motion { target: t, motion } if *t == target => Some(*motion),
            _ => None,
        })
    }

    /// Parallax frames written for `subject`, oldest first.
    pub fn parallax_for(&self, subject: SubjectId) -> Vec<&ParallaxFrame> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                StyleWrite::Parallax { subject: s, frame } if *s == subject => Some(frame),
                _ => None,
            })
            .collect()
    }
}

impl StyleSink for RecordingSink {
    fn set_reveal_state(&mut self, target: TargetId, state: RevealState) {
        self.writes.push(StyleWrite::RevealState { target, state });
    }

    fn set_motion(&mut self, target: TargetId, motion: &MotionVector) {
        self.writes.push(StyleWrite::Motion {
            target,
            motion: *motion,
        });
    }

    fn clear_motion(&mut self, target: TargetId) {
        self.writes.push(StyleWrite::ClearMotion { target });
    }

    fn set_delay(&mut self, target: TargetId, delay_ms: u32) {
        self.writes.push(StyleWrite::Delay { target, delay_ms });
    }

    fn set_parallax(&mut self, subject: SubjectId, frame: &ParallaxFrame) {
        self.writes.push(StyleWrite::Parallax {
            subject,
            frame: frame.clone(),
        });
    }
}
