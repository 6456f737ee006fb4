use std::collections::BTreeMap;

use crate::{
    foundation::core::{NodeId, Rect, Size, Vec2},
    host::{ElementGeometry, ScrollSource},
};

/// In-memory document: element rects in document space plus a scroll offset.
///
/// Viewport-relative rects are the document rects shifted up by the current
/// scroll offset, which is what a browser's bounding-rect query reports for a
/// vertically scrolling page.
#[derive(Clone, Debug)]
pub struct StaticDocument {
    viewport: Option<Size>,
    scroll: Option<f64>,
    nodes: BTreeMap<NodeId, Rect>,
}

impl StaticDocument {
    /// Document with the given viewport, scrolled to the top.
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport: Some(viewport),
            scroll: Some(0.0),
            nodes: BTreeMap::new(),
        }
    }

    /// Place or move `node` at `rect` (document coordinates).
    pub fn insert(&mut self, node: NodeId, rect: Rect) {
        self.nodes.insert(node, rect);
    }

    /// Detach `node`; later geometry queries for it return `None`.
    pub fn remove(&mut self, node: NodeId) -> Option<Rect> {
        self.nodes.remove(&node)
    }

    /// Set the scroll offset, or `None` to model a missing scroll container.
    pub fn scroll_to(&mut self, offset: Option<f64>) {
        self.scroll = offset;
    }

    /// Replace the viewport size, or `None` to model a host before layout.
    pub fn set_viewport(&mut self, viewport: Option<Size>) {
        self.viewport = viewport;
    }
}

impl ScrollSource for StaticDocument {
    fn scroll_offset(&self) -> Option<f64> {
        self.scroll
    }
}

impl ElementGeometry for StaticDocument {
    fn viewport(&self) -> Option<Size> {
        self.viewport
    }

    fn rect(&self, node: NodeId) -> Option<Rect> {
        let rect = self.nodes.get(&node)?;
        Some(*rect - Vec2::new(0.0, self.scroll.unwrap_or(0.0)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/document.rs"]
mod tests;
