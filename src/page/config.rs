use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    animation::stagger::Stagger,
    foundation::{
        core::{NodeId, Rect, Size, TargetId},
        error::{MotionError, MotionResult},
        math::finite_in,
    },
    host::document::StaticDocument,
    layout::radial::{Placement, RadialItem, SolverConstants, StageGeometry, solve_with},
    parallax::profile::MotionProfile,
    reveal::{
        engine::{RevealConfig, RevealTarget},
        motion::{RevealMotion, SideAffinity},
        observer::ObserverConfig,
    },
};

/// Everything one page section needs to set up its motion.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageConfig {
    /// The visitor asked for reduced motion.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Reveal observation settings.
    #[serde(default)]
    pub observer: ObserverConfig,
    /// Reveal motion distances.
    #[serde(default)]
    pub motion: RevealMotion,
    /// Reveal delays.
    #[serde(default)]
    pub stagger: Stagger,
    /// Reveal targets in document order.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
    /// Parallax background layers.
    #[serde(default)]
    pub parallax: Vec<ParallaxConfig>,
    /// Optional hub-and-panel stage.
    #[serde(default)]
    pub radial: Option<RadialConfig>,
}

/// One reveal target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TargetConfig {
    /// Identity within the page.
    pub id: TargetId,
    /// Observed element; defaults to the node with the same number as `id`.
    #[serde(default)]
    pub node: Option<NodeId>,
    /// Entry side preference.
    #[serde(default)]
    pub side: SideAffinity,
    /// Position in its sibling run.
    #[serde(default)]
    pub stagger_index: u32,
    /// Document-space box, used when the page is laid out synthetically.
    #[serde(default)]
    pub bounds: Option<Rect>,
}

impl TargetConfig {
    /// Element observed for this target.
    pub fn node(&self) -> NodeId {
        self.node.unwrap_or(NodeId(self.id.0))
    }

    /// Engine-side target.
    pub fn target(&self) -> RevealTarget {
        RevealTarget::new(self.id, self.side).with_stagger(self.stagger_index)
    }
}

/// One parallax background layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxConfig {
    /// Reference element whose geometry drives progress.
    pub node: NodeId,
    /// Motion constants.
    #[serde(default)]
    pub profile: MotionProfile,
    /// Document-space box of the reference, used for synthetic layouts.
    #[serde(default)]
    pub bounds: Option<Rect>,
}

/// Stage and panels of a radial layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialConfig {
    /// Stage the panels live on.
    pub stage: StageGeometry,
    /// Panels, in output order.
    #[serde(default)]
    pub items: Vec<RadialItem>,
    /// Connector tuning.
    #[serde(default)]
    pub constants: SolverConstants,
}

impl PageConfig {
    /// Parse and validate a JSON page description.
    #[tracing::instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json_str(json: &str) -> MotionResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            targets = config.targets.len(),
            parallax = config.parallax.len(),
            radial = config.radial.is_some(),
            "page config loaded"
        );
        Ok(config)
    }

    /// Parse and validate a JSON page description from `reader`.
    pub fn from_reader(reader: impl std::io::Read) -> MotionResult<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON page description from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MotionResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("open page config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reveal engine settings.
    pub fn reveal_config(&self) -> RevealConfig {
        RevealConfig {
            observer: self.observer,
            motion: self.motion,
            stagger: self.stagger,
        }
    }

    /// Document holding every configured box, for driving a page without a
    /// real host.
    ///
    /// Targets without `bounds` are stacked down the page one viewport apart,
    /// each half a viewport tall, in configuration order.
    pub fn layout_document(&self, viewport: Size) -> StaticDocument {
        let mut doc = StaticDocument::new(viewport);
        let mut slot = 0.0;
        for target in &self.targets {
            let rect = target.bounds.unwrap_or_else(|| {
                let top = slot * viewport.height;
                slot += 1.0;
                Rect::new(0.0, top, viewport.width, top + viewport.height / 2.0)
            });
            doc.insert(target.node(), rect);
        }
        for layer in &self.parallax {
            if let Some(bounds) = layer.bounds {
                doc.insert(layer.node, bounds);
            }
        }
        doc
    }

    /// Reject values the engines cannot work with.
    pub fn validate(&self) -> MotionResult<()> {
        if !finite_in(self.observer.threshold, 0.0, 1.0) {
            return Err(MotionError::validation(
                "observer threshold must be within [0, 1]",
            ));
        }
        let m = self.observer.root_margin;
        if ![m.top, m.right, m.bottom, m.left].iter().all(|v| v.is_finite()) {
            return Err(MotionError::validation("root margin must be finite"));
        }
        let mv = self.motion;
        if ![mv.enter_shift, mv.enter_lift, mv.exit_shift, mv.exit_lift]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(MotionError::validation("reveal motion distances must be finite"));
        }
        if self.stagger.cycle == 0 {
            return Err(MotionError::validation("stagger cycle must be > 0"));
        }

        let mut ids = BTreeSet::new();
        let mut nodes = BTreeSet::new();
        for target in &self.targets {
            if !ids.insert(target.id) {
                return Err(MotionError::validation(format!(
                    "duplicate reveal target '{}'",
                    target.id
                )));
            }
            if !nodes.insert(target.node()) {
                return Err(MotionError::validation(format!(
                    "reveal target '{}' shares node '{}' with another target",
                    target.id,
                    target.node()
                )));
            }
            if let Some(bounds) = target.bounds {
                validate_rect(&bounds, &format!("reveal target '{}'", target.id))?;
            }
        }

        for layer in &self.parallax {
            validate_profile(&layer.profile, layer.node)?;
            if let Some(bounds) = layer.bounds {
                validate_rect(&bounds, &format!("parallax layer '{}'", layer.node))?;
            }
        }

        if let Some(radial) = &self.radial {
            radial.validate()?;
        }
        Ok(())
    }

    /// Solve the radial stage, if the page has one.
    pub fn solve_radial(&self) -> Option<Vec<Placement>> {
        self.radial
            .as_ref()
            .map(|r| solve_with(&r.stage, &r.items, r.constants))
    }
}

impl RadialConfig {
    /// Reject stages and panels the solver would turn into non-finite output.
    pub fn validate(&self) -> MotionResult<()> {
        let s = &self.stage;
        if !(s.width.is_finite() && s.height.is_finite() && s.width > 0.0 && s.height > 0.0) {
            return Err(MotionError::validation("radial stage width/height must be > 0"));
        }
        if !finite_in(s.hub_radius, 0.0, f64::MAX) {
            return Err(MotionError::validation("radial hub radius must be >= 0"));
        }
        if !(s.center_x.is_finite() && s.center_y.is_finite()) {
            return Err(MotionError::validation("radial hub centre must be finite"));
        }
        if !finite_in(s.safe_margin, 0.0, f64::MAX) || !s.rim_clearance.is_finite() {
            return Err(MotionError::validation(
                "radial safe margin must be >= 0 and rim clearance finite",
            ));
        }
        if !(self.constants.rim_start.is_finite() && self.constants.tip_fade.is_finite()) {
            return Err(MotionError::validation("radial connector constants must be finite"));
        }
        for (i, item) in self.items.iter().enumerate() {
            if !item.angle_degrees.is_finite()
                || !finite_in(item.half_width, 0.0, f64::MAX)
                || !finite_in(item.half_height, 0.0, f64::MAX)
            {
                return Err(MotionError::validation(format!(
                    "radial item {i} needs a finite angle and non-negative half extents"
                )));
            }
        }
        Ok(())
    }
}

fn validate_profile(profile: &MotionProfile, node: NodeId) -> MotionResult<()> {
    let scalars = [
        profile.scale_base,
        profile.scale_amplitude,
        profile.translate_amplitude,
    ];
    if !scalars.iter().all(|v| v.is_finite()) {
        return Err(MotionError::validation(format!(
            "parallax layer '{node}' has a non-finite scale or translation"
        )));
    }
    if let Some(travel) = profile.travel_distance
        && !finite_in(travel, 0.0, f64::MAX)
    {
        return Err(MotionError::validation(format!(
            "parallax layer '{node}' travel distance must be >= 0"
        )));
    }
    for channel in &profile.channels {
        if channel.name.trim().is_empty() {
            return Err(MotionError::validation(format!(
                "parallax layer '{node}' has an unnamed channel"
            )));
        }
        if !(channel.from.is_finite() && channel.to.is_finite()) {
            return Err(MotionError::validation(format!(
                "parallax layer '{node}' channel '{}' must be finite",
                channel.name
            )));
        }
    }
    Ok(())
}

fn validate_rect(rect: &Rect, what: &str) -> MotionResult<()> {
    let finite = [rect.x0, rect.y0, rect.x1, rect.y1]
        .iter()
        .all(|v| v.is_finite());
    if !finite || rect.x0 > rect.x1 || rect.y0 > rect.y1 {
        return Err(MotionError::validation(format!(
            "{what} has an invalid bounds rectangle"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
