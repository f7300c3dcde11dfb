//! Final placement ordering.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::StatMap;
use crate::model::{AltId, PlayerRunningStat, StandingRecord};

type Entry<'a> = (AltId, &'a PlayerRunningStat, f64);

/// Sorts the accumulated stats into final standings and assigns dense
/// 1-based placements.
///
/// Tie-break keys, in order: top-cut membership, bracket depth (the
/// never-eliminated winner first, then later eliminations before earlier),
/// match wins, fewest match losses, resistance, game-win percentage. Exact
/// ties keep registration order; the sort is stable over the map's
/// iteration order.
///
/// A stats key missing from `resistance` is a caller bug
/// ([`compute_resistance`](super::compute_resistance) covers every key); it
/// panics in debug builds and falls back to zero resistance in release.
pub fn rank(stats: &StatMap, resistance: &HashMap<AltId, f64>) -> Vec<StandingRecord> {
    let mut entries: Vec<Entry<'_>> = stats
        .iter()
        .map(|(alt, stat)| {
            debug_assert!(
                resistance.contains_key(&alt),
                "no resistance entry for alt {alt}"
            );
            (alt, stat, resistance.get(&alt).copied().unwrap_or(0.0))
        })
        .collect();

    entries.sort_by(compare);

    entries
        .into_iter()
        .enumerate()
        .map(|(i, (alt, stat, res))| StandingRecord {
            alt_id: alt,
            placement: i as u32 + 1,
            wins: stat.wins,
            losses: stat.losses,
            game_wins: stat.game_wins,
            game_losses: stat.game_losses,
            resistance_pct: (res * 10_000.0).round() / 100.0,
        })
        .collect()
}

/// `Less` means `a` places ahead of `b`.
fn compare(a: &Entry<'_>, b: &Entry<'_>) -> Ordering {
    let (_, sa, ra) = a;
    let (_, sb, rb) = b;
    sb.made_top_cut
        .cmp(&sa.made_top_cut)
        .then_with(|| bracket_depth(sa, sb))
        .then_with(|| sb.wins.cmp(&sa.wins))
        .then_with(|| sa.losses.cmp(&sb.losses))
        .then_with(|| rb.partial_cmp(ra).unwrap_or(Ordering::Equal))
        .then_with(|| {
            sb.game_win_rate()
                .partial_cmp(&sa.game_win_rate())
                .unwrap_or(Ordering::Equal)
        })
}

/// Bracket-depth key, meaningful only between two top-cut players: the one
/// eliminated in a later round ran deeper and ranks higher.
fn bracket_depth(a: &PlayerRunningStat, b: &PlayerRunningStat) -> Ordering {
    if !(a.made_top_cut && b.made_top_cut) {
        return Ordering::Equal;
    }
    match (a.eliminated_round, b.eliminated_round) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ra), Some(rb)) => rb.cmp(&ra),
    }
}
