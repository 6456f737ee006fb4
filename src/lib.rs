//! folio-motion is the scroll-driven motion layer of a portfolio site.
//!
//! It owns the small amount of state that sits between the host's scroll and
//! frame callbacks and the style variables the page renders from:
//!
//! 1. **Scroll telemetry**: one [`ScrollState`] per page (offset and direction).
//! 2. **Reveal**: a per-target state machine ([`RevealEngine`]) driven by
//!    viewport intersection, choosing entry/exit vectors from the scroll
//!    direction and each target's [`SideAffinity`].
//! 3. **Parallax**: per-frame scale/translation for background layers
//!    ([`ParallaxEngine`]) from a [`MotionProfile`].
//! 4. **Radial layout**: a pure solver ([`solve_radial`]) that keeps satellite
//!    panels around a hub inside a bounded stage.
//!
//! The host is abstracted behind [`ScrollSource`], [`ElementGeometry`],
//! [`StyleSink`] and [`FrameScheduler`]. [`StaticDocument`],
//! [`RecordingSink`] and [`ManualScheduler`] are deterministic in-process
//! implementations used by the tests and the `folio-motion` binary.
//!
//! # Design constraints
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Engines never fail**: missing nodes and unknown ids are silent no-ops.
//!   Only configuration loading returns [`MotionError`].
//! - **Single-threaded**: every engine is plain `&mut self` state driven by
//!   host callbacks.
//!
//! See [`crate::guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod host;
mod layout;
mod page;
mod parallax;
mod reveal;
mod scroll;

/// Standalone walkthrough of the crate's concepts and host wiring.
pub mod guide;

pub use animation::ease::Ease;
pub use animation::stagger::Stagger;
pub use foundation::core::{NodeId, Point, Rect, Size, SubjectId, TargetId, Vec2};
pub use foundation::error::{MotionError, MotionResult};
pub use host::document::StaticDocument;
pub use host::recording::{RecordingSink, StyleWrite};
pub use host::{ElementGeometry, ScrollSource, StyleSink};
pub use layout::radial::{
    Connector, ConnectorGradient, Corner, GradientStop, Placement, RadialItem, SolverConstants,
    StageGeometry, solve as solve_radial, solve_with as solve_radial_with,
};
pub use page::config::{PageConfig, ParallaxConfig, RadialConfig, TargetConfig};
pub use page::section::SectionMotion;
pub use parallax::engine::{ParallaxEngine, sample as sample_parallax};
pub use parallax::profile::{
    ChannelRange, ChannelValue, MotionProfile, ParallaxFrame, ProgressMode, ScaleShape,
    TranslateShape,
};
pub use parallax::schedule::{FrameRequest, FrameScheduler, ManualScheduler};
pub use reveal::engine::{RevealConfig, RevealEngine, RevealTarget};
pub use reveal::motion::{MotionVector, RevealMotion, SideAffinity, entry_vector, exit_vector};
pub use reveal::observer::{
    ObserverConfig, RootMargin, VisibilityChange, VisibilityObserver, intersection_ratio,
};
pub use reveal::state::{RevealState, RevealTransition};
pub use scroll::telemetry::{ScrollDirection, ScrollState, ScrollTelemetry};
