use crate::foundation::{
    core::{Point, Rect, Vec2},
    math::min_positive_finite,
};

/// Bounded area the hub and its satellite panels live in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StageGeometry {
    /// Stage width.
    pub width: f64,
    /// Stage height.
    pub height: f64,
    /// Radius of the central hub.
    pub hub_radius: f64,
    /// Hub centre, x.
    pub center_x: f64,
    /// Hub centre, y.
    pub center_y: f64,
    /// Gap every panel keeps from the stage edges.
    #[serde(default = "default_safe_margin")]
    pub safe_margin: f64,
    /// Ideal gap between the hub rim and a panel.
    #[serde(default = "default_rim_clearance")]
    pub rim_clearance: f64,
}

fn default_safe_margin() -> f64 {
    22.0
}

fn default_rim_clearance() -> f64 {
    100.0
}

impl StageGeometry {
    /// Stage of `width × height` with the hub centred and default margins.
    pub fn from_hub(width: f64, height: f64, hub_radius: f64) -> Self {
        Self {
            width,
            height,
            hub_radius,
            center_x: width / 2.0,
            center_y: height / 2.0,
            safe_margin: default_safe_margin(),
            rim_clearance: default_rim_clearance(),
        }
    }

    /// Hub centre.
    pub fn hub_center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Stage rect shrunk by the safe margin.
    pub fn safe_rect(&self) -> Rect {
        Rect::new(
            self.safe_margin,
            self.safe_margin,
            self.width - self.safe_margin,
            self.height - self.safe_margin,
        )
    }
}

/// Named corner placements used by the design toolkit layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    /// Upper left.
    TopLeft,
    /// Upper right.
    TopRight,
    /// Lower left.
    BottomLeft,
    /// Lower right.
    BottomRight,
}

impl Corner {
    /// Direction angle in degrees (screen space, y down).
    pub fn angle_degrees(self) -> f64 {
        match self {
            Self::TopLeft => 225.0,
            Self::TopRight => 330.0,
            Self::BottomLeft => -350.0,
            Self::BottomRight => 150.0,
        }
    }
}

/// A satellite panel: intended direction and half extents.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialItem {
    /// Direction from the hub centre, degrees, screen space (y down).
    pub angle_degrees: f64,
    /// Half of the panel width.
    pub half_width: f64,
    /// Half of the panel height.
    pub half_height: f64,
}

impl RadialItem {
    /// Item pointing at one of the preset corners.
    pub fn at_corner(corner: Corner, half_width: f64, half_height: f64) -> Self {
        Self {
            angle_degrees: corner.angle_degrees(),
            half_width,
            half_height,
        }
    }
}

/// Tunables of the connector geometry.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SolverConstants {
    /// Fraction of the hub radius where connectors start.
    #[serde(default = "default_rim_start")]
    pub rim_start: f64,
    /// How far connectors stop short of the panel edge.
    #[serde(default = "default_tip_fade")]
    pub tip_fade: f64,
}

fn default_rim_start() -> f64 {
    0.94
}

fn default_tip_fade() -> f64 {
    10.0
}

impl Default for SolverConstants {
    fn default() -> Self {
        Self {
            rim_start: default_rim_start(),
            tip_fade: default_tip_fade(),
        }
    }
}

/// Line from the hub rim toward a panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Connector {
    /// Point on the hub rim.
    pub start: Point,
    /// Point just short of the panel's inner edge.
    pub end: Point,
}

/// Solved position of one panel.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Placement {
    /// Panel centre.
    pub center: Point,
    /// Unit direction from the hub centre.
    pub direction: Vec2,
    /// Distance actually used: `min(ring_distance, max_distance)`.
    ///
    /// When the hub lies outside the region a panel centre may occupy, the
    /// centre is clamped back into that region afterwards and no longer sits
    /// at `hub + distance * direction`; use [`Placement::center`] for position.
    pub distance: f64,
    /// Distance the panel would sit at on an unbounded stage.
    pub ring_distance: f64,
    /// Largest distance that keeps the panel on stage (`inf` when unbounded).
    pub max_distance: f64,
    /// Panel rectangle.
    pub bounds: Rect,
    /// Connector from hub to panel.
    pub connector: Connector,
}

/// Solve placements with the default connector constants.
pub fn solve(stage: &StageGeometry, items: &[RadialItem]) -> Vec<Placement> {
    solve_with(stage, items, SolverConstants::default())
}

/// Place every item around the hub.
///
/// Panels sit on a ring just outside the hub unless that would push them off
/// stage, in which case they are pulled in along their direction; staying on
/// stage always wins over the ring distance. Pure: identical inputs give
/// bit-identical outputs. Non-finite stage values propagate into the result.
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn solve_with(
    stage: &StageGeometry,
    items: &[RadialItem],
    constants: SolverConstants,
) -> Vec<Placement> {
    items
        .iter()
        .map(|item| place(stage, item, constants))
        .collect()
}

fn place(stage: &StageGeometry, item: &RadialItem, constants: SolverConstants) -> Placement {
    let rad = item.angle_degrees.to_radians();
    let dir = Vec2::new(rad.cos(), rad.sin());
    let hw = item.half_width;
    let hh = item.half_height;
    let hub = stage.hub_center();

    let projected_half = dir.x.abs() * hw + dir.y.abs() * hh;
    let ring_distance = stage.hub_radius + projected_half + stage.rim_clearance;

    let centers = center_box(stage, hw, hh);
    let max_distance = max_distance_within(centers, hub, dir);
    let distance = ring_distance.min(max_distance);

    let mut center = hub + dir * distance;
    if centers.x0 <= centers.x1 && centers.y0 <= centers.y1 {
        // The ray limit cannot help when the hub itself sits outside the box.
        center = Point::new(
            center.x.clamp(centers.x0, centers.x1),
            center.y.clamp(centers.y0, centers.y1),
        );
    }

    let start = hub + dir * (stage.hub_radius * constants.rim_start);
    let end = connector_end(center, dir, hw, hh, constants.tip_fade);

    Placement {
        center,
        direction: dir,
        distance,
        ring_distance,
        max_distance,
        bounds: Rect::new(center.x - hw, center.y - hh, center.x + hw, center.y + hh),
        connector: Connector { start, end },
    }
}

/// Region the panel centre may occupy.
fn center_box(stage: &StageGeometry, hw: f64, hh: f64) -> Rect {
    let safe = stage.safe_margin;
    Rect {
        x0: hw + safe,
        y0: hh + safe,
        x1: stage.width - hw - safe,
        y1: stage.height - hh - safe,
    }
}

/// How far the centre can travel from `origin` along `dir` before leaving `centers`.
fn max_distance_within(centers: Rect, origin: Point, dir: Vec2) -> f64 {
    let along = |component: f64, lo: f64, hi: f64, at: f64| {
        if component > 0.0 {
            Some((hi - at) / component)
        } else if component < 0.0 {
            Some((lo - at) / component)
        } else {
            None
        }
    };
    min_positive_finite(
        [
            along(dir.x, centers.x0, centers.x1, origin.x),
            along(dir.y, centers.y0, centers.y1, origin.y),
        ]
        .into_iter()
        .flatten(),
    )
}

/// Point just inside the hub-facing edge of the panel, pulled back by `tip_fade`.
fn connector_end(center: Point, dir: Vec2, hw: f64, hh: f64, tip_fade: f64) -> Point {
    if hw <= 0.0 || hh <= 0.0 {
        return center;
    }
    let k = 1.0 / (dir.x.abs() / hw).max(dir.y.abs() / hh);
    if !k.is_finite() {
        return center;
    }
    center - dir * (k + tip_fade)
}

/// One colour stop of the connector gradient.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the connector, percent.
    pub offset_pct: f64,
    /// RGB colour.
    pub rgb: [u8; 3],
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl GradientStop {
    /// CSS `rgba(..)` form.
    pub fn css(&self) -> String {
        let [r, g, b] = self.rgb;
        format!("rgba({r},{g},{b},{})", self.alpha)
    }
}

/// Gradient painted along each connector: fades in from the hub and out before the panel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConnectorGradient {
    /// Stops in ascending offset order.
    pub stops: Vec<GradientStop>,
}

impl Default for ConnectorGradient {
    fn default() -> Self {
        const TINT: [u8; 3] = [150, 178, 255];
        let stop = |offset_pct, alpha| GradientStop {
            offset_pct,
            rgb: TINT,
            alpha,
        };
        Self {
            stops: vec![stop(0.0, 0.0), stop(55.0, 0.95), stop(100.0, 0.0)],
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/radial.rs"]
mod tests;
