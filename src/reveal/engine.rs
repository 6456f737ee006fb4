use std::collections::BTreeMap;

use crate::{
    animation::stagger::Stagger,
    foundation::core::{NodeId, TargetId},
    host::{ElementGeometry, StyleSink},
    reveal::{
        motion::{RevealMotion, SideAffinity, entry_vector, exit_vector},
        observer::{ObserverConfig, VisibilityChange, VisibilityObserver},
        state::{Edge, RevealState, RevealTransition, edge_for},
    },
    scroll::telemetry::ScrollDirection,
};

/// Settings shared by every target of one reveal engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealConfig {
    /// Observation threshold and margin.
    #[serde(default)]
    pub observer: ObserverConfig,
    /// Motion distances.
    #[serde(default)]
    pub motion: RevealMotion,
    /// Presentation delay per stagger index.
    #[serde(default)]
    pub stagger: Stagger,
}

/// One element whose appearance is driven by scroll visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RevealTarget {
    /// Identity within the page.
    pub id: TargetId,
    /// Preferred entry side.
    pub side: SideAffinity,
    /// Position in its sibling run; only affects the presentation delay.
    pub stagger_index: u32,
    state: RevealState,
}

impl RevealTarget {
    /// New target in the [`RevealState::Hidden`] state.
    pub fn new(id: TargetId, side: SideAffinity) -> Self {
        Self {
            id,
            side,
            stagger_index: 0,
            state: RevealState::Hidden,
        }
    }

    /// Same target with a stagger index.
    pub fn with_stagger(mut self, index: u32) -> Self {
        self.stagger_index = index;
        self
    }

    /// Current reveal state.
    pub fn state(&self) -> RevealState {
        self.state
    }
}

#[derive(Clone, Debug)]
struct Tracked {
    target: RevealTarget,
    node: NodeId,
}

/// Visibility-driven reveal state machine for every target of one page.
///
/// With reduced motion requested the engine forces every target to
/// [`RevealState::Visible`] once on registration and ignores visibility from
/// then on. The flag is fixed for the engine's lifetime.
#[derive(Clone, Debug)]
pub struct RevealEngine {
    config: RevealConfig,
    reduced_motion: bool,
    observer: VisibilityObserver,
    targets: BTreeMap<TargetId, Tracked>,
    by_node: BTreeMap<NodeId, TargetId>,
}

impl RevealEngine {
    /// Engine for one page.
    pub fn new(config: RevealConfig, reduced_motion: bool) -> Self {
        Self {
            observer: VisibilityObserver::new(config.observer),
            config,
            reduced_motion,
            targets: BTreeMap::new(),
            by_node: BTreeMap::new(),
        }
    }

    /// Settings in use.
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Whether reduced motion bypasses the state machine.
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Start tracking `target` on `node`.
    ///
    /// Registering an id again replaces the earlier registration (side,
    /// stagger index and node) but keeps its current state, so there is only
    /// ever one observation per id.
    pub fn register(&mut self, target: RevealTarget, node: NodeId, sink: &mut impl StyleSink) {
        let mut target = target;
        if let Some(prev) = self.targets.remove(&target.id) {
            tracing::debug!(target = %target.id, "re-registering reveal target");
            self.by_node.remove(&prev.node);
            self.observer.unobserve(prev.node);
            target.state = prev.target.state;
        }
        // A node drives at most one target; the newest registration claims it.
        if let Some(stale) = self.by_node.insert(node, target.id)
            && let Some(old) = self.targets.remove(&stale)
            && old.target.state.is_in_motion()
        {
            sink.clear_motion(stale);
        }

        sink.set_delay(target.id, self.config.stagger.delay_ms(target.stagger_index));

        if self.reduced_motion {
            if target.state != RevealState::Visible {
                target.state = RevealState::Visible;
                sink.set_reveal_state(target.id, RevealState::Visible);
            }
        } else {
            self.observer.observe(node);
        }
        self.targets.insert(target.id, Tracked { target, node });
    }

    /// Stop tracking `id`. Pending motion is cancelled; unknown ids are ignored.
    pub fn unregister(&mut self, id: TargetId, sink: &mut impl StyleSink) {
        let Some(tracked) = self.targets.remove(&id) else {
            tracing::trace!(target = %id, "unregister of unknown reveal target");
            return;
        };
        if self.by_node.get(&tracked.node) == Some(&id) {
            self.by_node.remove(&tracked.node);
        }
        self.observer.unobserve(tracked.node);
        if tracked.target.state.is_in_motion() {
            sink.clear_motion(id);
        }
    }

    /// Stop tracking every target.
    pub fn unregister_all(&mut self, sink: &mut impl StyleSink) {
        let ids = self.targets.keys().copied().collect::<Vec<_>>();
        for id in ids {
            self.unregister(id, sink);
        }
        self.observer.disconnect();
    }

    /// Current state of `id`.
    pub fn state(&self, id: TargetId) -> Option<RevealState> {
        self.targets.get(&id).map(|t| t.target.state)
    }

    /// Registered target `id`.
    pub fn target(&self, id: TargetId) -> Option<&RevealTarget> {
        self.targets.get(&id).map(|t| &t.target)
    }

    /// Registered target ids, ascending.
    pub fn ids(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.targets.keys().copied()
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// `true` when no target is registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Number of nodes under observation.
    pub fn observed_len(&self) -> usize {
        self.observer.len()
    }

    /// Re-evaluate visibility against `geometry` and apply every flip.
    pub fn poll(
        &mut self,
        geometry: &impl ElementGeometry,
        direction: ScrollDirection,
        sink: &mut impl StyleSink,
    ) -> Vec<RevealTransition> {
        if self.reduced_motion {
            return Vec::new();
        }
        let changes = self.observer.poll(geometry);
        let mut out = Vec::new();
        for change in changes {
            out.extend(self.on_visibility(change, direction, sink));
        }
        out
    }

    /// Apply one visibility notification from the host.
    ///
    /// Notifications for unknown nodes and same-polarity repeats are no-ops.
    pub fn on_visibility(
        &mut self,
        change: VisibilityChange,
        direction: ScrollDirection,
        sink: &mut impl StyleSink,
    ) -> Vec<RevealTransition> {
        if self.reduced_motion {
            return Vec::new();
        }
        let Some(id) = self.by_node.get(&change.node).copied() else {
            tracing::trace!(node = %change.node, "visibility change for unknown node");
            return Vec::new();
        };
        let Some(tracked) = self.targets.get_mut(&id) else {
            return Vec::new();
        };
        let target = &mut tracked.target;
        let Some(edge) = edge_for(target.state, change.intersecting) else {
            return Vec::new();
        };

        let mut out = Vec::with_capacity(2);
        match edge {
            Edge::Enter => {
                let vector = entry_vector(direction, target.side, &self.config.motion);
                sink.set_motion(id, &vector);
                out.push(step(target, RevealState::Entering, sink));
                out.push(step(target, RevealState::Visible, sink));
            }
            Edge::Leave => {
                let vector = exit_vector(direction, target.side, &self.config.motion);
                sink.set_motion(id, &vector);
                out.push(step(target, RevealState::Leaving, sink));
            }
        }
        out
    }

    /// The host finished playing the exit motion of `id`: `Leaving -> Hidden`.
    ///
    /// Any other state (or unknown id) is left alone.
    pub fn finish_motion(
        &mut self,
        id: TargetId,
        sink: &mut impl StyleSink,
    ) -> Option<RevealTransition> {
        let tracked = self.targets.get_mut(&id)?;
        if tracked.target.state != RevealState::Leaving {
            return None;
        }
        Some(step(&mut tracked.target, RevealState::Hidden, sink))
    }
}

fn step(
    target: &mut RevealTarget,
    to: RevealState,
    sink: &mut impl StyleSink,
) -> RevealTransition {
    let from = target.state;
    target.state = to;
    sink.set_reveal_state(target.id, to);
    tracing::debug!(target = %target.id, ?from, ?to, "reveal transition");
    RevealTransition {
        target: target.id,
        from,
        to,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/engine.rs"]
mod tests;
