use super::*;

#[test]
fn enter_edges_only_from_hidden_or_leaving() {
    assert_eq!(edge_for(RevealState::Hidden, true), Some(Edge::Enter));
    assert_eq!(edge_for(RevealState::Leaving, true), Some(Edge::Enter));
    assert_eq!(edge_for(RevealState::Visible, true), None);
    assert_eq!(edge_for(RevealState::Entering, true), None);
}

#[test]
fn leave_edges_only_from_visible_or_entering() {
    assert_eq!(edge_for(RevealState::Visible, false), Some(Edge::Leave));
    assert_eq!(edge_for(RevealState::Entering, false), Some(Edge::Leave));
    assert_eq!(edge_for(RevealState::Hidden, false), None);
    assert_eq!(edge_for(RevealState::Leaving, false), None);
}

#[test]
fn class_names_and_flags() {
    assert_eq!(RevealState::default(), RevealState::Hidden);
    assert_eq!(RevealState::Visible.class_name(), "is-shown");
    assert_eq!(RevealState::Leaving.class_name(), "is-out");
    assert!(RevealState::Entering.is_shown());
    assert!(!RevealState::Leaving.is_shown());
    assert!(RevealState::Leaving.is_in_motion());
    assert!(!RevealState::Hidden.is_in_motion());
}
