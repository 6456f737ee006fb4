use crate::{
    animation::ease::Ease,
    foundation::math::{clamp01, lerp},
};

/// How an element's viewport position maps to progress `p ∈ [0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMode {
    /// `0` while the top edge sits on the viewport bottom, `1` once the
    /// element has travelled its full distance past the viewport top.
    #[default]
    Travel,
    /// `1` while the top edge sits on the viewport top, falling off linearly
    /// as it moves a viewport height away in either direction.
    Settle,
}

/// Scale curve as a function of eased progress `e`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleShape {
    /// `base + e * amplitude`.
    #[default]
    Grow,
    /// `base + (1 - e) * amplitude`; zooms out as the element scrolls by.
    Shrink,
    /// `base + (1 - |2e - 1|) * amplitude`; largest at mid-travel.
    Peak,
}

/// Vertical translation curve as a function of eased progress `e`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslateShape {
    /// `amplitude * (1 - e)`; drifts toward rest.
    #[default]
    Toward,
    /// `amplitude * e`.
    Away,
    /// `amplitude * (e - 0.5)`; symmetric around mid-travel.
    Centered,
}

/// An extra style variable interpolated linearly with progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelRange {
    /// Style variable name, e.g. `stars-tx`.
    pub name: String,
    /// Value at `p = 0`.
    pub from: f64,
    /// Value at `p = 1`.
    pub to: f64,
}

/// Numeric constants a page supplies for one background layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionProfile {
    /// Progress mapping.
    #[serde(default)]
    pub mode: ProgressMode,
    /// Fixed travel distance for [`ProgressMode::Travel`]; the element height
    /// when absent.
    #[serde(default)]
    pub travel_distance: Option<f64>,
    /// Curve applied to progress before shaping.
    #[serde(default)]
    pub ease: Ease,
    /// Scale at rest.
    #[serde(default = "default_scale_base")]
    pub scale_base: f64,
    /// Scale range added on top of `scale_base`.
    #[serde(default)]
    pub scale_amplitude: f64,
    /// Scale curve.
    #[serde(default)]
    pub scale_shape: ScaleShape,
    /// Translation range in CSS pixels; the sign picks the direction.
    #[serde(default)]
    pub translate_amplitude: f64,
    /// Translation curve.
    #[serde(default)]
    pub translate_shape: TranslateShape,
    /// Extra linear channels.
    #[serde(default)]
    pub channels: Vec<ChannelRange>,
}

fn default_scale_base() -> f64 {
    1.0
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            mode: ProgressMode::Travel,
            travel_distance: None,
            ease: Ease::Linear,
            scale_base: default_scale_base(),
            scale_amplitude: 0.0,
            scale_shape: ScaleShape::Grow,
            translate_amplitude: 0.0,
            translate_shape: TranslateShape::Toward,
            channels: Vec::new(),
        }
    }
}

/// Values written to the style sink for one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParallaxFrame {
    /// Progress in `[0, 1]`.
    pub progress: f64,
    /// Layer scale.
    pub scale: f64,
    /// Layer vertical translation in CSS pixels.
    pub translate_y: f64,
    /// Extra channels, in profile order.
    pub channels: Vec<ChannelValue>,
}

/// One extra channel value.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChannelValue {
    /// Style variable name.
    pub name: String,
    /// Value for this tick.
    pub value: f64,
}

impl MotionProfile {
    /// Hero backdrop that starts zoomed in and settles to `1.0` while drifting up.
    pub fn hero_zoom(start_scale: f64, drift: f64) -> Self {
        Self {
            scale_base: 1.0,
            scale_amplitude: start_scale - 1.0,
            scale_shape: ScaleShape::Shrink,
            translate_amplitude: drift,
            translate_shape: TranslateShape::Toward,
            ..Self::default()
        }
    }

    /// Section backdrop that swells mid-travel and pans through `±range / 2`.
    pub fn soft_backdrop(zoom: f64, range: f64) -> Self {
        Self {
            scale_amplitude: zoom,
            scale_shape: ScaleShape::Peak,
            translate_amplitude: range,
            translate_shape: TranslateShape::Centered,
            ..Self::default()
        }
    }

    /// Call-to-action backdrop keyed on how close the section is to the top.
    pub fn settle_zoom(zoom: f64, lift: f64) -> Self {
        Self {
            mode: ProgressMode::Settle,
            scale_amplitude: zoom,
            scale_shape: ScaleShape::Grow,
            translate_amplitude: lift,
            translate_shape: TranslateShape::Away,
            ..Self::default()
        }
    }

    /// Progress for an element whose top edge is `top` pixels below the
    /// viewport top, with height `height`, in a viewport `viewport_height` tall.
    ///
    /// A zero-height viewport is treated as one pixel tall.
    pub fn progress(&self, top: f64, height: f64, viewport_height: f64) -> f64 {
        let vh = if viewport_height > 0.0 {
            viewport_height
        } else {
            1.0
        };
        match self.mode {
            ProgressMode::Travel => {
                let travel = self.travel_distance.unwrap_or(height).max(0.0);
                clamp01((vh - top) / (vh + travel))
            }
            ProgressMode::Settle => clamp01(1.0 - (top / vh).abs()),
        }
    }

    /// Shape progress `p` into the frame written to the sink.
    pub fn sample(&self, progress: f64) -> ParallaxFrame {
        let p = clamp01(progress);
        let e = self.ease.apply(p);
        let scale_t = match self.scale_shape {
            ScaleShape::Grow => e,
            ScaleShape::Shrink => 1.0 - e,
            ScaleShape::Peak => 1.0 - (2.0 * e - 1.0).abs(),
        };
        let translate_t = match self.translate_shape {
            TranslateShape::Toward => 1.0 - e,
            TranslateShape::Away => e,
            TranslateShape::Centered => e - 0.5,
        };
        ParallaxFrame {
            progress: p,
            scale: self.scale_base + scale_t * self.scale_amplitude,
            translate_y: self.translate_amplitude * translate_t,
            channels: self
                .channels
                .iter()
                .map(|c| ChannelValue {
                    name: c.name.clone(),
                    value: lerp(c.from, c.to, p),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parallax/profile.rs"]
mod tests;
