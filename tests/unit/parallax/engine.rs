use super::*;
use crate::{
    foundation::core::{Rect, Size},
    host::{document::StaticDocument, recording::RecordingSink},
    parallax::schedule::ManualScheduler,
};

const BG: NodeId = NodeId(7);

fn doc() -> StaticDocument {
    let mut doc = StaticDocument::new(Size::new(1200.0, 800.0));
    doc.insert(BG, Rect::new(0.0, 800.0, 1200.0, 1200.0));
    doc
}

fn pump(
    engine: &mut ParallaxEngine,
    doc: &StaticDocument,
    sink: &mut RecordingSink,
    scheduler: &mut ManualScheduler,
) -> Vec<ParallaxFrame> {
    let due = scheduler.advance();
    due.into_iter()
        .filter_map(|id| engine.on_frame(id, doc, sink, scheduler))
        .collect()
}

#[test]
fn attach_schedules_and_each_frame_reschedules() {
    let mut doc = doc();
    let mut sink = RecordingSink::new();
    let mut sched = ManualScheduler::new();
    let mut engine = ParallaxEngine::new();
    let id = engine.attach(BG, MotionProfile::soft_backdrop(0.06, 60.0), &mut sched);
    assert!(sched.is_pending(id));

    let frames = pump(&mut engine, &doc, &mut sink, &mut sched);
    assert_eq!(frames[0].progress, 0.0);
    assert!(sched.is_pending(id));

    doc.scroll_to(Some(400.0));
    let frames = pump(&mut engine, &doc, &mut sink, &mut sched);
    assert!((frames[0].progress - 1.0 / 3.0).abs() < 1e-9);
    assert_eq!(sink.parallax_for(id).len(), 2);
}

#[test]
fn detach_cancels_the_pending_request() {
    let doc = doc();
    let mut sink = RecordingSink::new();
    let mut sched = ManualScheduler::new();
    let mut engine = ParallaxEngine::new();
    let id = engine.attach(BG, MotionProfile::default(), &mut sched);
    pump(&mut engine, &doc, &mut sink, &mut sched);

    assert!(engine.detach(id, &mut sched));
    assert_eq!(sched.pending_len(), 0);
    assert!(!engine.detach(id, &mut sched));
    assert!(pump(&mut engine, &doc, &mut sink, &mut sched).is_empty());
}

#[test]
fn stale_callback_after_detach_does_not_reschedule() {
    let doc = doc();
    let mut sink = RecordingSink::new();
    let mut sched = ManualScheduler::new();
    let mut engine = ParallaxEngine::new();
    let id = engine.attach(BG, MotionProfile::default(), &mut sched);
    engine.detach(id, &mut sched);
    assert!(engine.on_frame(id, &doc, &mut sink, &mut sched).is_none());
    assert_eq!(sched.pending_len(), 0);
    assert!(sink.writes().is_empty());
}

#[test]
fn missing_reference_skips_the_write_but_keeps_the_schedule() {
    let mut doc = doc();
    let mut sink = RecordingSink::new();
    let mut sched = ManualScheduler::new();
    let mut engine = ParallaxEngine::new();
    let id = engine.attach(BG, MotionProfile::default(), &mut sched);

    doc.remove(BG);
    assert!(pump(&mut engine, &doc, &mut sink, &mut sched).is_empty());
    assert!(sched.is_pending(id));
    assert!(sink.writes().is_empty());

    doc.insert(BG, Rect::new(0.0, 0.0, 1200.0, 400.0));
    assert_eq!(pump(&mut engine, &doc, &mut sink, &mut sched).len(), 1);
}

#[test]
fn detach_all_leaves_no_pending_work() {
    let mut sched = ManualScheduler::new();
    let mut engine = ParallaxEngine::new();
    let a = engine.attach(BG, MotionProfile::default(), &mut sched);
    let b = engine.attach(NodeId(8), MotionProfile::hero_zoom(1.28, 80.0), &mut sched);
    assert_ne!(a, b);
    assert_eq!(engine.len(), 2);
    engine.detach_all(&mut sched);
    assert!(engine.is_empty());
    assert_eq!(sched.pending_len(), 0);
}

#[test]
fn out_of_band_frame_replaces_the_pending_request() {
    let doc = doc();
    let mut sink = RecordingSink::new();
    let mut sched = ManualScheduler::new();
    let mut engine = ParallaxEngine::new();
    let id = engine.attach(BG, MotionProfile::default(), &mut sched);

    assert!(engine.on_frame(id, &doc, &mut sink, &mut sched).is_some());
    assert_eq!(sched.pending_len(), 1);

    assert_eq!(pump(&mut engine, &doc, &mut sink, &mut sched).len(), 1);
    assert_eq!(sched.pending_len(), 1);

    engine.on_frame(id, &doc, &mut sink, &mut sched);
    assert!(engine.detach(id, &mut sched));
    assert_eq!(sched.pending_len(), 0);
    assert!(pump(&mut engine, &doc, &mut sink, &mut sched).is_empty());
}
