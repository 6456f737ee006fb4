//! # folio-motion guide
//!
//! A walkthrough of how the motion layer is wired into a host page and what each engine
//! promises. For the command line front-end, run `folio-motion --help`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`ScrollTelemetry`](crate::ScrollTelemetry): single writer of a page's
//!   [`ScrollState`](crate::ScrollState) (offset + [`ScrollDirection`](crate::ScrollDirection))
//! - [`RevealEngine`](crate::RevealEngine): visibility-driven
//!   [`RevealState`](crate::RevealState) machine for every [`RevealTarget`](crate::RevealTarget)
//! - [`ParallaxEngine`](crate::ParallaxEngine): per-frame [`ParallaxFrame`](crate::ParallaxFrame)
//!   recomputation for background layers
//! - [`solve_radial`](crate::solve_radial): pure hub-and-panel placement
//! - [`SectionMotion`](crate::SectionMotion): one mounted page section, composing the above
//! - [`PageConfig`](crate::PageConfig): JSON description of a section
//!
//! ---
//!
//! ## Host seams
//!
//! Nothing in the crate talks to a real document. The host supplies:
//!
//! - [`ScrollSource`](crate::ScrollSource): the scroll container's offset, `None` when absent
//! - [`ElementGeometry`](crate::ElementGeometry): viewport size and viewport-relative element rects
//! - [`FrameScheduler`](crate::FrameScheduler): request/cancel of animation frames
//! - [`StyleSink`](crate::StyleSink): where results go
//!
//! The sink has two channels. Reveal states are class toggles (`is-hidden`, `is-entering`,
//! `is-shown`, `is-out`, see [`RevealState::class_name`](crate::RevealState::class_name)).
//! Everything else is a numeric style variable: motion vectors, stagger delays and parallax
//! frames. How those map to transforms and opacity is up to the rendering layer.
//!
//! In-process implementations exist for tests and tooling:
//! [`StaticDocument`](crate::StaticDocument), [`RecordingSink`](crate::RecordingSink) and
//! [`ManualScheduler`](crate::ManualScheduler).
//!
//! ---
//!
//! ## Wiring a section
//!
//! ```rust
//! use folio_motion::{
//!     ManualScheduler, NodeId, PageConfig, RecordingSink, Rect, RevealState, SectionMotion,
//!     Size, StaticDocument, TargetId,
//! };
//!
//! let page = PageConfig::from_json_str(r#"{ "targets": [ { "id": 1, "side": "left" } ] }"#)?;
//!
//! let mut doc = StaticDocument::new(Size::new(1280.0, 800.0));
//! doc.insert(NodeId(1), Rect::new(0.0, 1200.0, 600.0, 1500.0));
//!
//! let mut sink = RecordingSink::new();
//! let mut frames = ManualScheduler::new();
//! let mut section = SectionMotion::mount(&page, &mut sink, &mut frames);
//!
//! // Below the fold: nothing happens.
//! assert!(section.on_scroll(&doc, &mut sink).is_empty());
//!
//! doc.scroll_to(Some(900.0));
//! section.on_scroll(&doc, &mut sink);
//! assert_eq!(section.reveal().state(TargetId(1)), Some(RevealState::Visible));
//!
//! section.unmount(&mut sink, &mut frames);
//! # Ok::<(), folio_motion::MotionError>(())
//! ```
//!
//! Host callbacks map one-to-one:
//!
//! - page load: [`SectionMotion::mount_with_host`](crate::SectionMotion::mount_with_host)
//!   mounts and samples once, so content already on screen is revealed without a scroll
//! - scroll event: [`SectionMotion::on_scroll`](crate::SectionMotion::on_scroll)
//!   (telemetry first, then visibility, so reveal vectors use the fresh direction)
//! - animation frame: [`SectionMotion::on_frame`](crate::SectionMotion::on_frame)
//! - exit transition finished: [`SectionMotion::on_motion_end`](crate::SectionMotion::on_motion_end)
//! - teardown: [`SectionMotion::unmount`](crate::SectionMotion::unmount)
//!
//! ---
//!
//! ## Reveal
//!
//! Each target moves through `Hidden -> Entering -> Visible -> Leaving -> Hidden`.
//! `Entering` coalesces to `Visible` in the same call (both transitions are reported), and
//! `Leaving` only returns to `Hidden` when the host reports the exit motion finished.
//!
//! Entry comes from the right while scrolling down and from the left while scrolling up; a
//! `left`/`right` [`SideAffinity`](crate::SideAffinity) pins the scrolling-down side, `up` rises
//! vertically instead. Exits travel to the opposite side of the entry.
//!
//! With reduced motion the engine shows every target once on registration and ignores
//! visibility from then on. The flag is read once when the engine is built.
//!
//! ---
//!
//! ## Parallax
//!
//! A [`MotionProfile`](crate::MotionProfile) turns the reference element's position into a
//! progress `p` in `[0, 1]`, then shapes it into scale, vertical translation and any number of
//! named linear channels.
//!
//! - [`ProgressMode::Travel`](crate::ProgressMode::Travel): `0` when the element's top touches the
//!   bottom of the viewport, `1` once it has travelled its own height (or `travel_distance`)
//!   past the top.
//! - [`ProgressMode::Settle`](crate::ProgressMode::Settle): `1` when the element's top sits at the
//!   top of the viewport, falling off over one viewport height either way.
//!
//! Each attached subject keeps exactly one pending frame request; handling a frame asks for the
//! next one. Only [`ParallaxEngine::detach`](crate::ParallaxEngine::detach) stops the schedule.
//!
//! ---
//!
//! ## Radial layout
//!
//! [`solve_radial`](crate::solve_radial) places each [`RadialItem`](crate::RadialItem) on a ring
//! just outside the hub, measured along its direction, and pulls it inward when the ring would
//! push it past the stage's safe margin. Staying on stage always wins. The solver is pure and
//! deterministic, so hosts can run it on every resize.
