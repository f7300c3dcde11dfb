//! Engine policy knobs.

use serde::{Deserialize, Serialize};

use crate::model::{Phase, PhaseRole};

/// Controls how the engine decides which phases form the top cut.
///
/// Phases carrying an explicit [`PhaseRole::Bracket`] tag are always top-cut
/// phases, however many of them there are. The legacy convention, "the phase
/// with `phase_order == 2` is the top cut", only applies to phases with no
/// role tag, and can be switched off entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsConfig {
    /// Phase order treated as the top cut when a phase has no explicit role.
    /// `None` disables the legacy shim.
    pub legacy_top_cut_phase_order: Option<u32>,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        StandingsConfig {
            legacy_top_cut_phase_order: Some(2),
        }
    }
}

impl StandingsConfig {
    /// Whether `phase` counts as a top-cut phase under this policy.
    pub fn is_top_cut_phase(&self, phase: &Phase) -> bool {
        match phase.role {
            Some(PhaseRole::Bracket) => true,
            Some(PhaseRole::Swiss) => false,
            None => self.legacy_top_cut_phase_order == Some(phase.phase_order),
        }
    }
}
