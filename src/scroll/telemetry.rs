use crate::host::ScrollSource;

/// Direction of the most recent scroll movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    /// Content moving toward the top of the document.
    Up,
    /// Content moving toward the bottom of the document.
    #[default]
    Down,
}

impl ScrollDirection {
    /// Class name a section carries while this direction is active.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Up => "dir-up",
            Self::Down => "dir-down",
        }
    }
}

/// Last sampled scroll offset and the direction derived from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScrollState {
    /// Scroll offset of the container, in CSS pixels.
    pub offset: f64,
    /// Direction of travel between the two most recent samples.
    pub direction: ScrollDirection,
}

/// Single writer of a page's [`ScrollState`].
///
/// Other components read [`ScrollTelemetry::state`] synchronously while they
/// handle their own events; there is no subscription fan-out.
#[derive(Clone, Debug, Default)]
pub struct ScrollTelemetry {
    state: ScrollState,
    sampled: bool,
}

impl ScrollTelemetry {
    /// Fresh telemetry: offset `0`, direction [`ScrollDirection::Down`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample `source` and update the stored state.
    ///
    /// A source without a position (no scroll container) leaves the state
    /// untouched.
    pub fn on_scroll(&mut self, source: &impl ScrollSource) -> ScrollState {
        match source.scroll_offset() {
            Some(offset) => self.record(offset),
            None => {
                tracing::trace!("scroll source unavailable; keeping previous state");
                self.state
            }
        }
    }

    /// Feed a raw offset. Ties keep the previous direction.
    pub fn record(&mut self, offset: f64) -> ScrollState {
        if !self.sampled {
            self.sampled = true;
            self.state = ScrollState {
                offset,
                direction: ScrollDirection::Down,
            };
            return self.state;
        }

        let previous = self.state;
        let direction = if offset > previous.offset {
            ScrollDirection::Down
        } else if offset < previous.offset {
            ScrollDirection::Up
        } else {
            previous.direction
        };
        if direction != previous.direction {
            tracing::debug!(?direction, offset, "scroll direction changed");
        }
        self.state = ScrollState { offset, direction };
        self.state
    }

    /// Current state.
    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Current direction.
    pub fn direction(&self) -> ScrollDirection {
        self.state.direction
    }

    /// Class name matching the current direction (`dir-down` / `dir-up`).
    pub fn direction_class(&self) -> &'static str {
        self.state.direction.class_name()
    }

    /// Forget all samples, as on a page reload.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/telemetry.rs"]
mod tests;
