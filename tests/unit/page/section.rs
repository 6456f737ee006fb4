use super::*;
use crate::{
    foundation::core::{NodeId, Rect, Size},
    host::{document::StaticDocument, recording::RecordingSink},
    page::config::{ParallaxConfig, TargetConfig},
    parallax::{profile::MotionProfile, schedule::ManualScheduler},
    reveal::{motion::SideAffinity, state::RevealState},
    scroll::telemetry::ScrollDirection,
};

fn target(id: u64, y0: f64, y1: f64) -> TargetConfig {
    TargetConfig {
        id: TargetId(id),
        node: None,
        side: SideAffinity::Center,
        stagger_index: 0,
        bounds: Some(Rect::new(0.0, y0, 1000.0, y1)),
    }
}

fn page() -> PageConfig {
    PageConfig {
        targets: vec![target(1, 100.0, 500.0), target(2, 1600.0, 2000.0)],
        parallax: vec![ParallaxConfig {
            node: NodeId(10),
            profile: MotionProfile::default(),
            bounds: Some(Rect::new(0.0, 0.0, 1000.0, 800.0)),
        }],
        ..PageConfig::default()
    }
}

#[test]
fn scroll_drives_reveal_with_the_sampled_direction() {
    let page = page();
    let mut doc = page.layout_document(Size::new(1000.0, 800.0));
    let mut sink = RecordingSink::new();
    let mut scheduler = ManualScheduler::new();
    let mut section = SectionMotion::mount(&page, &mut sink, &mut scheduler);
    assert_eq!(section.reveal().len(), 2);
    assert_eq!(section.subjects().len(), 1);

    let first = section.on_scroll(&doc, &mut sink);
    assert_eq!(
        first.iter().map(|t| t.to).collect::<Vec<_>>(),
        [RevealState::Entering, RevealState::Visible]
    );
    assert_eq!(section.scroll_state().direction, ScrollDirection::Down);

    doc.scroll_to(Some(1400.0));
    let second = section.on_scroll(&doc, &mut sink);
    assert_eq!(second.len(), 3);
    assert_eq!(second[0].target, TargetId(1));
    assert_eq!(second[0].to, RevealState::Leaving);
    assert_eq!(section.reveal().state(TargetId(2)), Some(RevealState::Visible));
    assert_eq!(section.direction_class(), "dir-down");

    let done = section.on_motion_end(TargetId(1), &mut sink).unwrap();
    assert_eq!(done.to, RevealState::Hidden);

    doc.scroll_to(Some(900.0));
    section.on_scroll(&doc, &mut sink);
    assert_eq!(section.direction_class(), "dir-up");
}

#[test]
fn frames_flow_through_to_the_sink() {
    let page = page();
    let mut doc = page.layout_document(Size::new(1000.0, 800.0));
    let mut sink = RecordingSink::new();
    let mut scheduler = ManualScheduler::new();
    let mut section = SectionMotion::mount(&page, &mut sink, &mut scheduler);
    let subject = section.subjects()[0];

    doc.scroll_to(Some(400.0));
    for due in scheduler.advance() {
        section.on_frame(due, &doc, &mut sink, &mut scheduler);
    }
    let frames = sink.parallax_for(subject);
    assert_eq!(frames.len(), 1);
    assert!((frames[0].progress - 0.75).abs() < 1e-9);
    assert!(scheduler.is_pending(subject));
}

#[test]
fn unmount_releases_every_schedule_and_target() {
    let page = page();
    let doc = page.layout_document(Size::new(1000.0, 800.0));
    let mut sink = RecordingSink::new();
    let mut scheduler = ManualScheduler::new();
    let mut section = SectionMotion::mount(&page, &mut sink, &mut scheduler);
    section.on_scroll(&doc, &mut sink);

    section.unmount(&mut sink, &mut scheduler);
    assert_eq!(scheduler.pending_len(), 0);
    assert!(section.reveal().is_empty());
    assert_eq!(section.reveal().observed_len(), 0);
    assert!(section.parallax().is_empty());
    assert!(section.subjects().is_empty());
    assert!(scheduler.advance().is_empty());
}

#[test]
fn reduced_motion_shows_everything_once_at_mount() {
    let page = PageConfig {
        reduced_motion: true,
        ..page()
    };
    let mut doc = page.layout_document(Size::new(1000.0, 800.0));
    let mut sink = RecordingSink::new();
    let mut scheduler = ManualScheduler::new();
    let mut section = SectionMotion::mount(&page, &mut sink, &mut scheduler);

    for offset in [0.0, 1400.0, 3000.0, 0.0] {
        doc.scroll_to(Some(offset));
        assert!(section.on_scroll(&doc, &mut sink).is_empty());
    }
    for id in [TargetId(1), TargetId(2)] {
        assert_eq!(sink.states_for(id), [RevealState::Visible]);
        assert_eq!(sink.last_motion(id), None);
    }
}

#[test]
fn mounting_against_a_host_reveals_content_above_the_fold() {
    let page = page();
    let doc = page.layout_document(Size::new(1000.0, 800.0));
    let mut sink = RecordingSink::new();
    let mut scheduler = ManualScheduler::new();
    let mut section = SectionMotion::mount_with_host(&page, &doc, &mut sink, &mut scheduler);

    assert_eq!(section.reveal().state(TargetId(1)), Some(RevealState::Visible));
    assert_eq!(section.reveal().state(TargetId(2)), Some(RevealState::Hidden));
    assert_eq!(section.scroll_state().direction, ScrollDirection::Down);
    assert!(section.on_scroll(&doc, &mut sink).is_empty());
}

#[test]
fn plain_mount_waits_for_the_first_scroll() {
    let page = page();
    let mut sink = RecordingSink::new();
    let mut scheduler = ManualScheduler::new();
    let section = SectionMotion::mount(&page, &mut sink, &mut scheduler);
    assert_eq!(section.reveal().state(TargetId(1)), Some(RevealState::Hidden));
}
