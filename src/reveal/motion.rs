use crate::{foundation::core::Vec2, scroll::telemetry::ScrollDirection};

/// Preferred side a target animates in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideAffinity {
    /// Enter from the left while scrolling down.
    Left,
    /// Enter from the right while scrolling down.
    Right,
    /// Rise vertically instead of sliding sideways.
    Up,
    /// No preference; follows the scroll direction.
    #[default]
    Center,
}

/// Distances used when building motion vectors.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealMotion {
    /// Horizontal offset an entering target starts from.
    #[serde(default = "default_enter_shift")]
    pub enter_shift: f64,
    /// Vertical offset an entering target starts from.
    #[serde(default = "default_enter_lift")]
    pub enter_lift: f64,
    /// Horizontal offset a leaving target travels to.
    #[serde(default = "default_exit_shift")]
    pub exit_shift: f64,
    /// Vertical offset a leaving target travels to.
    #[serde(default = "default_exit_lift")]
    pub exit_lift: f64,
}

fn default_enter_shift() -> f64 {
    48.0
}

fn default_enter_lift() -> f64 {
    12.0
}

fn default_exit_shift() -> f64 {
    42.0
}

fn default_exit_lift() -> f64 {
    16.0
}

impl Default for RevealMotion {
    fn default() -> Self {
        Self {
            enter_shift: default_enter_shift(),
            enter_lift: default_enter_lift(),
            exit_shift: default_exit_shift(),
            exit_lift: default_exit_lift(),
        }
    }
}

/// `from -> to` translation (and scale) for one reveal motion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MotionVector {
    /// Offset at the start of the motion.
    pub from: Vec2,
    /// Offset at the end of the motion.
    pub to: Vec2,
    /// Scale at the start of the motion.
    pub from_scale: f64,
    /// Scale at the end of the motion.
    pub to_scale: f64,
}

impl MotionVector {
    fn translate(from: Vec2, to: Vec2) -> Self {
        Self {
            from,
            to,
            from_scale: 1.0,
            to_scale: 1.0,
        }
    }
}

/// Sign of the travel axis an entering target starts on.
///
/// Scrolling down, targets come in from the right (`+1`) unless the side
/// affinity pins them left; scrolling up mirrors the mapping.
fn entry_sign(direction: ScrollDirection, side: SideAffinity) -> f64 {
    let down = match side {
        SideAffinity::Left => -1.0,
        SideAffinity::Right | SideAffinity::Center | SideAffinity::Up => 1.0,
    };
    match direction {
        ScrollDirection::Down => down,
        ScrollDirection::Up => -down,
    }
}

/// Vector for a target that just became visible.
pub fn entry_vector(
    direction: ScrollDirection,
    side: SideAffinity,
    motion: &RevealMotion,
) -> MotionVector {
    let sign = entry_sign(direction, side);
    let from = match side {
        // Rising targets start below when scrolling down, above when scrolling up.
        SideAffinity::Up => Vec2::new(0.0, sign * motion.enter_shift),
        _ => Vec2::new(sign * motion.enter_shift, motion.enter_lift),
    };
    MotionVector::translate(from, Vec2::ZERO)
}

/// Vector for a target that just lost visibility.
///
/// The target leaves toward the side opposite to where it would enter, so it
/// keeps its apparent direction of travel.
pub fn exit_vector(
    direction: ScrollDirection,
    side: SideAffinity,
    motion: &RevealMotion,
) -> MotionVector {
    let sign = -entry_sign(direction, side);
    let to = match side {
        SideAffinity::Up => Vec2::new(0.0, sign * motion.exit_shift),
        _ => Vec2::new(sign * motion.exit_shift, motion.exit_lift),
    };
    MotionVector::translate(Vec2::ZERO, to)
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/motion.rs"]
mod tests;
