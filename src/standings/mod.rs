//! The standings pipeline: accumulate → resistance → rank.
//!
//! Pure and synchronous end to end. Callers hand in one tournament's
//! materialized entity lists and get an ordered standings table back; nothing
//! here logs or touches I/O, and the inputs are never mutated.

pub mod accumulate;
pub mod rank;
pub mod resistance;

pub use accumulate::{accumulate, Accumulation, StatMap};
pub use rank::rank;
pub use resistance::compute_resistance;

use crate::{
    config::StandingsConfig,
    model::{Match, Phase, Registration, StandingRecord},
};

/// Output of [`compute`]: the ordered table plus the orphaned-match count.
#[derive(Debug, Clone)]
pub struct StandingsOutcome {
    /// Standing records ordered by ascending placement.
    pub records: Vec<StandingRecord>,
    /// Matches dropped because a side had no registration. Upstream
    /// data-integrity signal; the caller logs it, the pipeline stays silent.
    pub skipped_matches: u32,
}

/// Runs the full pipeline over one tournament's materialized entities.
pub fn compute(
    phases: &[Phase],
    registrations: &[Registration],
    matches: &[Match],
    config: &StandingsConfig,
) -> StandingsOutcome {
    let acc = accumulate(phases, registrations, matches, config);
    let resistance = compute_resistance(&acc.stats);
    let records = rank(&acc.stats, &resistance);
    StandingsOutcome {
        records,
        skipped_matches: acc.skipped_matches,
    }
}
