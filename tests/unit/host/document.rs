use super::*;

#[test]
fn rects_are_reported_relative_to_scroll() {
    let mut doc = StaticDocument::new(Size::new(800.0, 600.0));
    doc.insert(NodeId(1), Rect::new(0.0, 900.0, 800.0, 1300.0));
    assert_eq!(doc.rect(NodeId(1)).unwrap().y0, 900.0);
    doc.scroll_to(Some(400.0));
    assert_eq!(doc.rect(NodeId(1)).unwrap().y0, 500.0);
    assert_eq!(doc.scroll_offset(), Some(400.0));
}

#[test]
fn removed_nodes_have_no_geometry() {
    let mut doc = StaticDocument::new(Size::new(800.0, 600.0));
    doc.insert(NodeId(2), Rect::new(0.0, 0.0, 10.0, 10.0));
    doc.remove(NodeId(2));
    assert!(doc.rect(NodeId(2)).is_none());
}
