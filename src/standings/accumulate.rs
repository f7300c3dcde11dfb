//! Stat accumulation: walks matches phase by phase and builds one running
//! record per registered alt.

use std::collections::HashMap;

use crate::{
    config::StandingsConfig,
    model::{AltId, Match, Phase, PlayerRunningStat, Registration},
};

/// Per-alt stat map preserving registration order.
///
/// Iteration yields alts in the order they were registered, which is what
/// makes the final stable sort deterministic across runs; a bare `HashMap`
/// would shuffle exact ties arbitrarily.
#[derive(Debug, Clone, Default)]
pub struct StatMap {
    order: Vec<AltId>,
    by_alt: HashMap<AltId, PlayerRunningStat>,
}

impl StatMap {
    pub fn get(&self, alt: AltId) -> Option<&PlayerRunningStat> {
        self.by_alt.get(&alt)
    }

    pub fn contains(&self, alt: AltId) -> bool {
        self.by_alt.contains_key(&alt)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registration-ordered iteration.
    pub fn iter(&self) -> impl Iterator<Item = (AltId, &PlayerRunningStat)> {
        self.order.iter().map(|alt| (*alt, &self.by_alt[alt]))
    }

    fn insert_default(&mut self, alt: AltId) {
        if self.by_alt.insert(alt, PlayerRunningStat::default()).is_none() {
            self.order.push(alt);
        }
    }

    fn get_mut(&mut self, alt: AltId) -> Option<&mut PlayerRunningStat> {
        self.by_alt.get_mut(&alt)
    }
}

/// Result of [`accumulate`]: the stat map plus how many matches referenced an
/// unregistered alt and were dropped.
#[derive(Debug, Clone)]
pub struct Accumulation {
    pub stats: StatMap,
    pub skipped_matches: u32,
}

/// Builds the per-alt running stats for one tournament.
///
/// Phases are processed in ascending `phase_order` regardless of slice order
/// (the sort is stable, so equal orders keep their input position). Matches
/// are scoped to a phase by `phase_id`; matches pointing at none of the given
/// phases are ignored. Scores are taken as-is; validating their plausibility
/// happened upstream when the match was finalized.
pub fn accumulate(
    phases: &[Phase],
    registrations: &[Registration],
    matches: &[Match],
    config: &StandingsConfig,
) -> Accumulation {
    let mut stats = StatMap::default();
    for reg in registrations {
        stats.insert_default(reg.alt_id);
    }

    let mut ordered: Vec<&Phase> = phases.iter().collect();
    ordered.sort_by_key(|p| p.phase_order);

    let mut skipped = 0u32;
    for phase in ordered {
        let bracket = phase.phase_type.is_bracket();
        let mut appeared: Vec<AltId> = Vec::new();

        for m in matches.iter().filter(|m| m.phase_id == phase.id) {
            match m.alt2_id {
                // Bye: one eligible player, no opponent faced.
                None => {
                    let Some(stat) = stats.get_mut(m.alt1_id) else {
                        skipped += 1;
                        continue;
                    };
                    stat.game_wins += i64::from(m.alt1_score);
                    stat.game_losses += i64::from(m.alt2_score);
                    if m.winner_alt_id == Some(m.alt1_id) {
                        stat.wins += 1;
                    }
                    appeared.push(m.alt1_id);
                }
                Some(alt2) => {
                    if !stats.contains(m.alt1_id) || !stats.contains(alt2) {
                        // Orphaned side: drop the whole match rather than
                        // credit half of it.
                        skipped += 1;
                        continue;
                    }
                    apply_match(&mut stats, m, alt2, bracket);
                    appeared.push(m.alt1_id);
                    appeared.push(alt2);
                }
            }
        }

        if config.is_top_cut_phase(phase) {
            for alt in appeared {
                if let Some(stat) = stats.get_mut(alt) {
                    stat.made_top_cut = true;
                }
            }
        }
    }

    Accumulation {
        stats,
        skipped_matches: skipped,
    }
}

/// Credits one two-player match to both sides. Both alts are known to be
/// registered at this point.
fn apply_match(stats: &mut StatMap, m: &Match, alt2: AltId, bracket: bool) {
    if let Some(s1) = stats.get_mut(m.alt1_id) {
        s1.game_wins += i64::from(m.alt1_score);
        s1.game_losses += i64::from(m.alt2_score);
        s1.opponents.push(alt2);
    }
    if let Some(s2) = stats.get_mut(alt2) {
        s2.game_wins += i64::from(m.alt2_score);
        s2.game_losses += i64::from(m.alt1_score);
        s2.opponents.push(m.alt1_id);
    }

    // Match-level result: winner +1 win, loser +1 loss, never by score. A
    // winner id naming neither side is malformed and leaves the match
    // undecided.
    let Some(winner) = m.winner_alt_id else {
        return;
    };
    if winner != m.alt1_id && winner != alt2 {
        return;
    }
    let loser = if winner == m.alt1_id { alt2 } else { m.alt1_id };
    if let Some(w) = stats.get_mut(winner) {
        w.wins += 1;
    }
    if let Some(l) = stats.get_mut(loser) {
        l.losses += 1;
        if bracket {
            // Last recorded elimination wins if data holds more than one.
            l.eliminated_round = Some(m.round);
        }
    }
}
