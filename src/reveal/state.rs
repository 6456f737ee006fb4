/// Reveal state of one target.
///
/// ```text
///   Hidden --enter--> Entering --(coalesced)--> Visible
///     ^                  |                        |
///     |                leave                    leave
///     |                  v                        v
///     +--finish------ Leaving <-------------------+
///                        |
///                      enter --> Entering
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    /// Not intersecting, no motion applied.
    #[default]
    Hidden,
    /// Just became intersecting; the entry vector is active.
    Entering,
    /// Fully revealed.
    Visible,
    /// Lost intersection; the exit vector is active.
    Leaving,
}

impl RevealState {
    /// Class name the rendering layer keys its transforms on.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Hidden => "is-hidden",
            Self::Entering => "is-entering",
            Self::Visible => "is-shown",
            Self::Leaving => "is-out",
        }
    }

    /// `true` for states that count as on screen.
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Entering | Self::Visible)
    }

    /// `true` while a motion vector is still animating.
    pub fn is_in_motion(self) -> bool {
        matches!(self, Self::Entering | Self::Leaving)
    }
}

/// Boundary crossing a visibility event implies for a target in a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Edge {
    Enter,
    Leave,
}

/// Which edge (if any) an `intersecting` report triggers from `state`.
///
/// Same-polarity reports are ignored, so a target can never go straight from
/// `Hidden` to `Leaving` or from `Visible` to `Entering`.
pub(crate) fn edge_for(state: RevealState, intersecting: bool) -> Option<Edge> {
    match (state, intersecting) {
        (RevealState::Hidden | RevealState::Leaving, true) => Some(Edge::Enter),
        (RevealState::Visible | RevealState::Entering, false) => Some(Edge::Leave),
        _ => None,
    }
}

/// One state change, as reported to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct RevealTransition {
    /// Target that changed.
    pub target: crate::foundation::core::TargetId,
    /// State before.
    pub from: RevealState,
    /// State after.
    pub to: RevealState,
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/state.rs"]
mod tests;
