use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn travel_progress_is_zero_when_entering_and_one_when_past() {
    let profile = MotionProfile::default();
    assert_eq!(profile.progress(800.0, 400.0, 800.0), 0.0);
    assert_eq!(profile.progress(-400.0, 400.0, 800.0), 1.0);
    assert!(close(profile.progress(200.0, 400.0, 800.0), 0.5));
}

#[test]
fn travel_progress_is_clamped_outside_bounds() {
    let profile = MotionProfile::default();
    assert_eq!(profile.progress(5000.0, 400.0, 800.0), 0.0);
    assert_eq!(profile.progress(-5000.0, 400.0, 800.0), 1.0);
}

#[test]
fn fixed_travel_distance_overrides_height() {
    let profile = MotionProfile {
        travel_distance: Some(200.0),
        ..MotionProfile::default()
    };
    assert_eq!(profile.progress(-200.0, 2000.0, 800.0), 1.0);
    assert!(close(profile.progress(300.0, 2000.0, 800.0), 0.5));
}

#[test]
fn settle_progress_peaks_at_viewport_top() {
    let profile = MotionProfile::settle_zoom(0.06, -20.0);
    assert_eq!(profile.progress(0.0, 300.0, 800.0), 1.0);
    assert!(close(profile.progress(-400.0, 300.0, 800.0), 0.5));
    assert_eq!(profile.progress(1600.0, 300.0, 800.0), 0.0);
}

#[test]
fn zero_viewport_height_is_treated_as_one() {
    let profile = MotionProfile::default();
    let p = profile.progress(0.0, 0.0, 0.0);
    assert_eq!(p, 1.0);
}

#[test]
fn hero_zoom_starts_large_and_settles() {
    let profile = MotionProfile::hero_zoom(1.45, 140.0);
    let start = profile.sample(0.0);
    assert!(close(start.scale, 1.45));
    assert!(close(start.translate_y, 140.0));
    let end = profile.sample(1.0);
    assert!(close(end.scale, 1.0));
    assert!(close(end.translate_y, 0.0));
}

#[test]
fn soft_backdrop_peaks_mid_travel() {
    let profile = MotionProfile::soft_backdrop(0.02, 30.0);
    let mid = profile.sample(0.5);
    assert!(close(mid.scale, 1.02));
    assert!(close(mid.translate_y, 0.0));
    assert!(close(profile.sample(0.0).scale, 1.0));
    assert!(close(profile.sample(0.0).translate_y, -15.0));
    assert!(close(profile.sample(1.0).translate_y, 15.0));
}

#[test]
fn channels_interpolate_linearly() {
    let profile = MotionProfile {
        channels: vec![ChannelRange {
            name: "stars-tx".to_string(),
            from: -10.0,
            to: 10.0,
        }],
        ..MotionProfile::default()
    };
    let frame = profile.sample(0.75);
    assert_eq!(frame.channels.len(), 1);
    assert_eq!(frame.channels[0].name, "stars-tx");
    assert!(close(frame.channels[0].value, 5.0));
}

#[test]
fn sample_clamps_progress() {
    let frame = MotionProfile::default().sample(3.0);
    assert_eq!(frame.progress, 1.0);
}

#[test]
fn profile_json_uses_defaults() {
    let profile: MotionProfile =
        serde_json::from_str(r#"{"scale_amplitude": 0.06, "scale_shape": "peak"}"#).unwrap();
    assert_eq!(profile.scale_base, 1.0);
    assert_eq!(profile.mode, ProgressMode::Travel);
    assert_eq!(profile.scale_shape, ScaleShape::Peak);
}
