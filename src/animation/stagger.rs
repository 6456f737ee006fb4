/// Presentation delay for a run of sibling reveal targets.
///
/// The delay repeats every `cycle` items so long lists do not drift into
/// multi-second waits: `delay = base_ms + (index % cycle) * step_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    /// Delay of the first item in each cycle.
    #[serde(default = "default_base_ms")]
    pub base_ms: u32,
    /// Number of items before the delay wraps around.
    #[serde(default = "default_cycle")]
    pub cycle: u32,
    /// Extra delay per position within a cycle.
    #[serde(default = "default_step_ms")]
    pub step_ms: u32,
}

fn default_base_ms() -> u32 {
    110
}

fn default_cycle() -> u32 {
    6
}

fn default_step_ms() -> u32 {
    60
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            base_ms: default_base_ms(),
            cycle: default_cycle(),
            step_ms: default_step_ms(),
        }
    }
}

impl Stagger {
    /// Delay in milliseconds for the item at `index`.
    pub fn delay_ms(self, index: u32) -> u32 {
        let slot = index % self.cycle.max(1);
        self.base_ms.saturating_add(slot.saturating_mul(self.step_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stagger.rs"]
mod tests;
