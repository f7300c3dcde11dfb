//! Opponents' match-win percentage, the Swiss tie-break metric.

use std::collections::HashMap;

use super::StatMap;
use crate::model::{AltId, PlayerRunningStat};

/// Mean of each opponent's match-win rate, as a fraction in `[0, 1]`.
///
/// The opponent list is a multiset: meeting the same alt twice counts their
/// win rate twice. An opponent with no recorded matches contributes a zero
/// term rather than being skipped: a bye stand-in or a player who dropped
/// before round 1 dilutes the mean instead of inflating it by exclusion.
///
/// The metric is tournament-wide: call this only on a fully accumulated map,
/// a mid-accumulation map silently yields partial truths.
pub fn compute_resistance(stats: &StatMap) -> HashMap<AltId, f64> {
    let mut resistance = HashMap::with_capacity(stats.len());
    for (alt, stat) in stats.iter() {
        if stat.opponents.is_empty() {
            resistance.insert(alt, 0.0);
            continue;
        }
        let sum: f64 = stat
            .opponents
            .iter()
            .map(|o| stats.get(*o).map_or(0.0, PlayerRunningStat::win_rate))
            .sum();
        resistance.insert(alt, sum / stat.opponents.len() as f64);
    }
    resistance
}
