use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn stage() -> StageGeometry {
    StageGeometry::from_hub(1000.0, 800.0, 80.0)
}

fn item(angle_degrees: f64, half_width: f64, half_height: f64) -> RadialItem {
    RadialItem {
        angle_degrees,
        half_width,
        half_height,
    }
}

fn assert_in_stage(stage: &StageGeometry, placement: &Placement) {
    let safe = stage.safe_rect();
    let b = placement.bounds;
    let eps = 1e-9;
    assert!(b.x0 >= safe.x0 - eps, "{b:?} left of {safe:?}");
    assert!(b.y0 >= safe.y0 - eps, "{b:?} above {safe:?}");
    assert!(b.x1 <= safe.x1 + eps, "{b:?} right of {safe:?}");
    assert!(b.y1 <= safe.y1 + eps, "{b:?} below {safe:?}");
}

#[test]
fn diagonal_panel_sits_on_the_ring_when_room_allows() {
    let stage = stage();
    let out = solve(&stage, &[item(45.0, 120.0, 60.0)]);
    assert_eq!(out.len(), 1);
    let p = out[0];

    let expected_ring = 80.0 + std::f64::consts::FRAC_1_SQRT_2 * 180.0 + 100.0;
    assert!(close(p.ring_distance, expected_ring));
    assert!((p.ring_distance - 307.28).abs() < 0.01);
    assert_eq!(p.distance, p.ring_distance.min(p.max_distance));
    assert!(p.max_distance > p.ring_distance);
    assert!(close(p.center.x, 500.0 + p.distance * std::f64::consts::FRAC_1_SQRT_2));
    assert_in_stage(&stage, &p);
}

#[test]
fn tight_stage_pulls_the_panel_inward() {
    let stage = StageGeometry::from_hub(300.0, 200.0, 80.0);
    let p = solve(&stage, &[item(0.0, 120.0, 60.0)])[0];
    assert!(close(p.ring_distance, 300.0));
    assert!(close(p.max_distance, 8.0));
    assert!(close(p.distance, 8.0));
    assert!(close(p.center.x, 158.0));
    assert_in_stage(&stage, &p);
}

#[test]
fn every_placement_respects_the_safe_margin() {
    let stages = [
        stage(),
        StageGeometry::from_hub(640.0, 480.0, 60.0),
        StageGeometry::from_hub(360.0, 640.0, 40.0),
    ];
    let items: Vec<_> = (0..24)
        .map(|i| item(f64::from(i) * 15.0, 90.0, 40.0))
        .collect();
    for stage in &stages {
        for p in solve(stage, &items) {
            assert_in_stage(stage, &p);
        }
    }
}

#[test]
fn off_centre_hub_still_keeps_panels_on_stage() {
    let stage = StageGeometry {
        center_x: 50.0,
        ..stage()
    };
    let p = solve(&stage, &[item(180.0, 120.0, 60.0)])[0];
    assert_in_stage(&stage, &p);
    assert!(close(p.center.x, 142.0));
    // The reported distance stays the ray distance even though the centre moved off the ray.
    assert_eq!(p.distance, p.ring_distance.min(p.max_distance));
    assert!(close(p.distance, 300.0));
    assert!(!close(p.center.x, 50.0 - p.distance));
}

#[test]
fn solving_is_deterministic() {
    let stage = stage();
    let items = [
        RadialItem::at_corner(Corner::TopLeft, 140.0, 70.0),
        RadialItem::at_corner(Corner::TopRight, 140.0, 70.0),
        RadialItem::at_corner(Corner::BottomLeft, 140.0, 70.0),
        RadialItem::at_corner(Corner::BottomRight, 140.0, 70.0),
    ];
    let a = solve(&stage, &items);
    let b = solve(&stage, &items);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.center.x.to_bits(), y.center.x.to_bits());
        assert_eq!(x.center.y.to_bits(), y.center.y.to_bits());
        assert_eq!(x.connector.end.x.to_bits(), y.connector.end.x.to_bits());
    }
    assert_eq!(a, b);
}

#[test]
fn connector_runs_from_rim_to_just_short_of_the_panel() {
    let p = solve(&stage(), &[item(0.0, 100.0, 50.0)])[0];
    assert!(close(p.distance, 280.0));
    assert!(close(p.center.x, 780.0));
    assert!(close(p.connector.start.x, 500.0 + 80.0 * 0.94));
    assert!(close(p.connector.start.y, 400.0));
    assert!(close(p.connector.end.x, 780.0 - 100.0 - 10.0));
    assert!(close(p.connector.end.y, 400.0));
}

#[test]
fn vertical_direction_uses_half_height() {
    let p = solve(&stage(), &[item(90.0, 100.0, 50.0)])[0];
    assert!(close(p.ring_distance, 230.0));
    assert!(close(p.center.x, 500.0));
    assert!(close(p.center.y, 630.0));
    assert!(close(p.connector.end.y, 630.0 - 50.0 - 10.0));
}

#[test]
fn custom_constants_move_the_connector_ends() {
    let constants = SolverConstants {
        rim_start: 1.0,
        tip_fade: 0.0,
    };
    let p = solve_with(&stage(), &[item(0.0, 100.0, 50.0)], constants)[0];
    assert!(close(p.connector.start.x, 580.0));
    assert!(close(p.connector.end.x, 680.0));
}

#[test]
fn zero_half_extent_ends_the_connector_at_the_centre() {
    let p = solve(&stage(), &[item(30.0, 0.0, 0.0)])[0];
    assert_eq!(p.connector.end, p.center);
    assert!(p.connector.end.x.is_finite() && p.connector.end.y.is_finite());

    let p = solve(&stage(), &[item(0.0, 0.0, 50.0)])[0];
    assert_eq!(p.connector.end, p.center);
}

#[test]
fn empty_input_gives_empty_output() {
    assert!(solve(&stage(), &[]).is_empty());
}

#[test]
fn corner_presets_match_the_toolkit_layout() {
    assert_eq!(Corner::TopLeft.angle_degrees(), 225.0);
    assert_eq!(Corner::TopRight.angle_degrees(), 330.0);
    assert_eq!(Corner::BottomLeft.angle_degrees(), -350.0);
    assert_eq!(Corner::BottomRight.angle_degrees(), 150.0);
}

#[test]
fn default_gradient_fades_at_both_ends() {
    let g = ConnectorGradient::default();
    let css: Vec<_> = g.stops.iter().map(GradientStop::css).collect();
    assert_eq!(
        css,
        [
            "rgba(150,178,255,0)",
            "rgba(150,178,255,0.95)",
            "rgba(150,178,255,0)"
        ]
    );
    assert_eq!(g.stops[1].offset_pct, 55.0);
}

#[test]
fn stage_defaults_fill_in_from_json() {
    let stage: StageGeometry = serde_json::from_str(
        r#"{"width":1000,"height":800,"hub_radius":80,"center_x":500,"center_y":400}"#,
    )
    .unwrap();
    assert_eq!(stage, self::stage());
}
