//! Seams between the engines and the host runtime.
//!
//! The engines never touch a document directly. They read scroll and element
//! geometry through [`ScrollSource`] / [`ElementGeometry`], ask for animation
//! frames through [`FrameScheduler`](crate::FrameScheduler), and write their
//! results to a [`StyleSink`]: numeric style variables plus reveal-state class
//! toggles that the rendering layer maps to visual transforms.

pub(crate) mod document;
pub(crate) mod recording;

use crate::{
    foundation::core::{NodeId, Rect, Size, SubjectId, TargetId},
    parallax::profile::ParallaxFrame,
    reveal::{motion::MotionVector, state::RevealState},
};

/// Source of the scrolling container's offset.
pub trait ScrollSource {
    /// Current offset, or `None` when there is no scroll container.
    fn scroll_offset(&self) -> Option<f64>;
}

impl ScrollSource for f64 {
    fn scroll_offset(&self) -> Option<f64> {
        Some(*self)
    }
}

impl ScrollSource for Option<f64> {
    fn scroll_offset(&self) -> Option<f64> {
        *self
    }
}

/// Viewport-relative geometry of host elements.
pub trait ElementGeometry {
    /// Size of the viewport, or `None` before layout.
    fn viewport(&self) -> Option<Size>;

    /// Bounding rect of `node` relative to the viewport's top-left corner, or
    /// `None` when the node is detached or unknown.
    fn rect(&self, node: NodeId) -> Option<Rect>;
}

/// Output channel consumed by the rendering layer.
pub trait StyleSink {
    /// Class toggle: the reveal state of `target` changed.
    fn set_reveal_state(&mut self, target: TargetId, state: RevealState);

    /// Style variables: the motion vector `target` should animate along.
    fn set_motion(&mut self, target: TargetId, motion: &MotionVector);

    /// Drop any pending motion for `target`.
    fn clear_motion(&mut self, target: TargetId);

    /// Style variable: transition delay derived from the stagger index.
    fn set_delay(&mut self, target: TargetId, delay_ms: u32);

    /// Style variables: scale / translation of a parallax layer.
    fn set_parallax(&mut self, subject: SubjectId, frame: &ParallaxFrame);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_reveal_state(&mut self, target: TargetId, state: RevealState) {
        (**self).set_reveal_state(target, state);
    }

    fn set_motion(&mut self, target: TargetId, motion: &MotionVector) {
        (**self).set_motion(target, motion);
    }

    fn clear_motion(&mut self, target: TargetId) {
        (**self).clear_motion(target);
    }

    fn set_delay(&mut self, target: TargetId, delay_ms: u32) {
        (**self).set_delay(target, delay_ms);
    }

    fn set_parallax(&mut self, subject: SubjectId, frame: &ParallaxFrame) {
        (**self).set_parallax(subject, frame);
    }
}
