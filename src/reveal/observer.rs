use std::collections::BTreeMap;

use crate::{
    foundation::core::{NodeId, Rect, Size},
    host::ElementGeometry,
};

/// Grow (positive) or shrink (negative) the observed viewport, per edge, in
/// percent of the viewport's extent along that edge's axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RootMargin {
    /// Top edge, percent of viewport height.
    #[serde(default)]
    pub top: f64,
    /// Right edge, percent of viewport width.
    #[serde(default)]
    pub right: f64,
    /// Bottom edge, percent of viewport height.
    #[serde(default)]
    pub bottom: f64,
    /// Left edge, percent of viewport width.
    #[serde(default)]
    pub left: f64,
}

impl RootMargin {
    /// Shrink only the bottom edge by `percent`.
    pub fn bottom_shrink(percent: f64) -> Self {
        Self {
            bottom: -percent,
            ..Self::default()
        }
    }

    /// Shrink top and bottom edges by `percent` each.
    pub fn vertical_shrink(percent: f64) -> Self {
        Self {
            top: -percent,
            bottom: -percent,
            ..Self::default()
        }
    }

    /// Observed root rect for a viewport of `size`.
    pub fn apply(&self, size: Size) -> Rect {
        let w = size.width;
        let h = size.height;
        Rect::new(
            -self.left / 100.0 * w,
            -self.top / 100.0 * h,
            w + self.right / 100.0 * w,
            h + self.bottom / 100.0 * h,
        )
    }
}

/// Per-page observation settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ObserverConfig {
    /// Fraction of the node that must be inside the root to count as visible.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Adjustment of the observed viewport.
    #[serde(default = "default_root_margin")]
    pub root_margin: RootMargin,
}

fn default_threshold() -> f64 {
    0.12
}

fn default_root_margin() -> RootMargin {
    RootMargin::bottom_shrink(10.0)
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            root_margin: default_root_margin(),
        }
    }
}

/// Visible fraction of `node` inside `root`, in `[0, 1]`.
///
/// Degenerate (zero-area) nodes count as fully visible when their origin lies
/// inside the root, and invisible otherwise.
pub fn intersection_ratio(node: Rect, root: Rect) -> f64 {
    let node = node.abs();
    let area = node.area();
    if area <= 0.0 {
        let origin = node.origin();
        let inside = origin.x >= root.x0
            && origin.x <= root.x1
            && origin.y >= root.y0
            && origin.y <= root.y1;
        return if inside { 1.0 } else { 0.0 };
    }
    crate::foundation::math::clamp01(node.intersect(root).area() / area)
}

/// A zero threshold means "any overlap at all".
fn crosses(threshold: f64, ratio: f64) -> bool {
    if threshold <= 0.0 {
        ratio > 0.0
    } else {
        ratio >= threshold
    }
}

/// Visibility flip reported for one node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    /// Node whose visibility changed.
    pub node: NodeId,
    /// Whether it now counts as intersecting.
    pub intersecting: bool,
}

/// Geometric stand-in for the host's intersection notifications.
///
/// Each observed node reports once on its first pass (like a freshly observed
/// element does) and afterwards only when its intersecting flag flips.
#[derive(Clone, Debug, Default)]
pub struct VisibilityObserver {
    config: ObserverConfig,
    observed: BTreeMap<NodeId, Option<bool>>,
}

impl VisibilityObserver {
    /// Observer with the given settings and no nodes.
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            observed: BTreeMap::new(),
        }
    }

    /// Settings in use.
    pub fn config(&self) -> &ObserverConfig {
        &self.config
    }

    /// Start observing `node`. Observing an already observed node restarts it.
    pub fn observe(&mut self, node: NodeId) {
        self.observed.insert(node, None);
    }

    /// Stop observing `node`. Unknown nodes are ignored.
    pub fn unobserve(&mut self, node: NodeId) {
        self.observed.remove(&node);
    }

    /// Stop observing every node.
    pub fn disconnect(&mut self) {
        self.observed.clear();
    }

    /// Number of observed nodes.
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// `true` when nothing is observed.
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Whether `ratio` counts as intersecting under this config.
    pub fn is_intersecting(&self, ratio: f64) -> bool {
        crosses(self.config.threshold, ratio)
    }

    /// Re-evaluate every observed node and return the flips, in node order.
    ///
    /// Nodes without geometry (and every node while the viewport is unknown)
    /// are skipped and keep their last known flag.
    pub fn poll(&mut self, geometry: &impl ElementGeometry) -> Vec<VisibilityChange> {
        let Some(viewport) = geometry.viewport() else {
            return Vec::new();
        };
        let root = self.config.root_margin.apply(viewport);
        let threshold = self.config.threshold;

        let mut changes = Vec::new();
        for (node, last) in self.observed.iter_mut() {
            let Some(rect) = geometry.rect(*node) else {
                tracing::trace!(%node, "observed node has no geometry");
                continue;
            };
            let ratio = intersection_ratio(rect, root);
            let intersecting = crosses(threshold, ratio);
            if *last != Some(intersecting) {
                *last = Some(intersecting);
                changes.push(VisibilityChange {
                    node: *node,
                    intersecting,
                });
            }
        }
        changes
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/observer.rs"]
mod tests;
