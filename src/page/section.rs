use crate::{
    foundation::core::{SubjectId, TargetId},
    host::{ElementGeometry, ScrollSource, StyleSink},
    page::config::PageConfig,
    parallax::{engine::ParallaxEngine, profile::ParallaxFrame, schedule::FrameScheduler},
    reveal::{engine::RevealEngine, state::RevealTransition},
    scroll::telemetry::{ScrollState, ScrollTelemetry},
};

/// Motion wiring of one mounted page section.
///
/// Owns the page's scroll telemetry, its reveal engine and its parallax
/// engine. Every host callback goes through here so the reveal engine always
/// sees the direction of the scroll sample that triggered it.
#[derive(Debug)]
pub struct SectionMotion {
    telemetry: ScrollTelemetry,
    reveal: RevealEngine,
    parallax: ParallaxEngine,
    subjects: Vec<SubjectId>,
}

impl SectionMotion {
    /// Register every target and attach every parallax layer of `config`.
    ///
    /// Nothing is sampled yet: targets stay hidden until the first
    /// [`SectionMotion::on_scroll`]. Use [`SectionMotion::mount_with_host`] to
    /// reveal above-the-fold content right away.
    #[tracing::instrument(skip_all, fields(targets = config.targets.len(), layers = config.parallax.len()))]
    pub fn mount(
        config: &PageConfig,
        sink: &mut impl StyleSink,
        scheduler: &mut impl FrameScheduler,
    ) -> Self {
        let mut reveal = RevealEngine::new(config.reveal_config(), config.reduced_motion);
        for target in &config.targets {
            reveal.register(target.target(), target.node(), sink);
        }

        let mut parallax = ParallaxEngine::new();
        let subjects = config
            .parallax
            .iter()
            .map(|layer| parallax.attach(layer.node, layer.profile.clone(), scheduler))
            .collect();

        Self {
            telemetry: ScrollTelemetry::new(),
            reveal,
            parallax,
            subjects,
        }
    }

    /// [`SectionMotion::mount`] followed by one scroll sample of `host`, the
    /// way a page evaluates its initial position on load.
    pub fn mount_with_host<H>(
        config: &PageConfig,
        host: &H,
        sink: &mut impl StyleSink,
        scheduler: &mut impl FrameScheduler,
    ) -> Self
    where
        H: ScrollSource + ElementGeometry,
    {
        let mut section = Self::mount(config, sink, scheduler);
        section.on_scroll(host, sink);
        section
    }

    /// Scroll event: sample telemetry, then re-evaluate visibility.
    pub fn on_scroll<H>(&mut self, host: &H, sink: &mut impl StyleSink) -> Vec<RevealTransition>
    where
        H: ScrollSource + ElementGeometry,
    {
        let state = self.telemetry.on_scroll(host);
        self.reveal.poll(host, state.direction, sink)
    }

    /// Frame callback for one parallax layer.
    pub fn on_frame(
        &mut self,
        subject: SubjectId,
        geometry: &impl ElementGeometry,
        sink: &mut impl StyleSink,
        scheduler: &mut impl FrameScheduler,
    ) -> Option<ParallaxFrame> {
        self.parallax.on_frame(subject, geometry, sink, scheduler)
    }

    /// The host finished the exit motion of `target`.
    pub fn on_motion_end(
        &mut self,
        target: TargetId,
        sink: &mut impl StyleSink,
    ) -> Option<RevealTransition> {
        self.reveal.finish_motion(target, sink)
    }

    /// Detach every layer and unregister every target.
    pub fn unmount(&mut self, sink: &mut impl StyleSink, scheduler: &mut impl FrameScheduler) {
        self.parallax.detach_all(scheduler);
        self.subjects.clear();
        self.reveal.unregister_all(sink);
        self.telemetry.reset();
        tracing::debug!("section unmounted");
    }

    /// Latest scroll sample.
    pub fn scroll_state(&self) -> ScrollState {
        self.telemetry.state()
    }

    /// Class name for the current scroll direction.
    pub fn direction_class(&self) -> &'static str {
        self.telemetry.direction_class()
    }

    /// Parallax subjects in configuration order.
    pub fn subjects(&self) -> &[SubjectId] {
        &self.subjects
    }

    /// Reveal engine.
    pub fn reveal(&self) -> &RevealEngine {
        &self.reveal
    }

    /// Parallax engine.
    pub fn parallax(&self) -> &ParallaxEngine {
        &self.parallax
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/section.rs"]
mod tests;
