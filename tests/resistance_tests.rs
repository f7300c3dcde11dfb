//! Unit tests for the resistance (opponents' win percentage) calculator.

use tourney_standings::standings::{accumulate, compute_resistance};
use tourney_standings::{Match, Phase, PhaseType, Registration, StandingsConfig};
use uuid::Uuid;

fn swiss_phase() -> Phase {
    Phase {
        id: Uuid::new_v4(),
        tournament_id: Uuid::nil(),
        phase_order: 1,
        phase_type: PhaseType::Swiss,
        role: None,
    }
}

fn regs(alts: &[i64]) -> Vec<Registration> {
    alts.iter()
        .map(|a| Registration {
            tournament_id: Uuid::nil(),
            alt_id: *a,
        })
        .collect()
}

fn duel(phase: &Phase, round: u32, a: i64, b: i64, winner: Option<i64>) -> Match {
    Match {
        id: Uuid::new_v4(),
        phase_id: phase.id,
        round,
        alt1_id: a,
        alt2_id: Some(b),
        alt1_score: if winner == Some(a) { 2 } else { 1 },
        alt2_score: if winner == Some(b) { 2 } else { 1 },
        winner_alt_id: winner,
    }
}

#[test]
fn no_opponents_means_zero_resistance() {
    let swiss = swiss_phase();
    let acc = accumulate(&[swiss], &regs(&[1, 2]), &[], &StandingsConfig::default());
    let res = compute_resistance(&acc.stats);
    assert_eq!(res[&1], 0.0);
    assert_eq!(res[&2], 0.0);
}

#[test]
fn resistance_is_mean_of_opponent_win_rates() {
    let swiss = swiss_phase();
    // 1 beats 2, 3 beats 1: player 1 faced {2: 0.0, 3: 1.0} → 0.5.
    let acc = accumulate(
        &[swiss.clone()],
        &regs(&[1, 2, 3]),
        &[
            duel(&swiss, 1, 1, 2, Some(1)),
            duel(&swiss, 2, 3, 1, Some(3)),
        ],
        &StandingsConfig::default(),
    );
    let res = compute_resistance(&acc.stats);
    assert!((res[&1] - 0.5).abs() < 1e-9);
}

#[test]
fn rematch_weighs_opponent_once_per_meeting() {
    let swiss = swiss_phase();
    // 1 beats 2 twice, then 3 beats 1. Player 1's opponent multiset is
    // {2, 2, 3}: (0 + 0 + 1) / 3, not the deduplicated (0 + 1) / 2.
    let acc = accumulate(
        &[swiss.clone()],
        &regs(&[1, 2, 3]),
        &[
            duel(&swiss, 1, 1, 2, Some(1)),
            duel(&swiss, 2, 1, 2, Some(1)),
            duel(&swiss, 3, 3, 1, Some(3)),
        ],
        &StandingsConfig::default(),
    );
    let res = compute_resistance(&acc.stats);
    assert!((res[&1] - 1.0 / 3.0).abs() < 1e-9);
}

#[test]
fn matchless_opponent_contributes_a_zero_term() {
    let swiss = swiss_phase();
    // Player 4 never finishes a match (their only one is undecided), yet
    // still dilutes player 1's average: {2: 0.5, 4: 0.0} → 0.25.
    let acc = accumulate(
        &[swiss.clone()],
        &regs(&[1, 2, 3, 4]),
        &[
            duel(&swiss, 1, 2, 3, Some(2)),
            duel(&swiss, 2, 1, 2, Some(1)),
            duel(&swiss, 3, 1, 4, None),
        ],
        &StandingsConfig::default(),
    );
    let res = compute_resistance(&acc.stats);
    assert!((res[&1] - 0.25).abs() < 1e-9, "got {}", res[&1]);
}

#[test]
fn resistance_stays_within_unit_interval() {
    let swiss = swiss_phase();
    let acc = accumulate(
        &[swiss.clone()],
        &regs(&[1, 2, 3, 4]),
        &[
            duel(&swiss, 1, 1, 2, Some(1)),
            duel(&swiss, 1, 3, 4, Some(3)),
            duel(&swiss, 2, 1, 3, Some(1)),
            duel(&swiss, 2, 2, 4, Some(2)),
        ],
        &StandingsConfig::default(),
    );
    for (_, frac) in compute_resistance(&acc.stats) {
        assert!((0.0..=1.0).contains(&frac));
    }
}
