//! Domain entities consumed and produced by the standings engine.
//!
//! These mirror the rows an external store materializes for one tournament.
//! They are finalized facts: the engine reads them, never mutates them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle for a competing identity. A player may enter under an alt
/// that differs from their account identity; the engine only sees the number.
pub type AltId = i64;

pub type TournamentId = Uuid;
pub type PhaseId = Uuid;
pub type MatchId = Uuid;

/// Scoping key for phases; the engine reads nothing else off it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
}

/// Pairing system used by a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseType {
    Swiss,
    SingleElimination,
    DoubleElimination,
    RoundRobin,
}

impl PhaseType {
    /// True for elimination systems, where a loss can end a player's run.
    pub fn is_bracket(self) -> bool {
        matches!(
            self,
            PhaseType::SingleElimination | PhaseType::DoubleElimination
        )
    }
}

/// Explicit role tag for a phase, supplied by the store. Preferred over the
/// legacy "second phase is the top cut" convention; see
/// [`StandingsConfig`](crate::config::StandingsConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseRole {
    Swiss,
    Bracket,
}

/// One stage of a tournament (e.g. Swiss rounds, then a top-cut bracket).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub id: PhaseId,
    pub tournament_id: TournamentId,
    /// 1-based position in the sequence the phases were played.
    pub phase_order: u32,
    pub phase_type: PhaseType,
    /// `None` on legacy rows that predate the role column.
    pub role: Option<PhaseRole>,
}

/// Links an alt to a tournament. Defines the universe of players standings
/// are produced for, even if a player never played a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub tournament_id: TournamentId,
    pub alt_id: AltId,
}

/// A finalized best-of series between two alts, or one alt and a bye.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub phase_id: PhaseId,
    pub round: u32,
    pub alt1_id: AltId,
    /// `None` marks a bye: a match with only one eligible player.
    pub alt2_id: Option<AltId>,
    /// Games won by side 1.
    pub alt1_score: i32,
    /// Games won by side 2.
    pub alt2_score: i32,
    /// `None` if the match never produced a winner (e.g. abandoned).
    pub winner_alt_id: Option<AltId>,
}

/// Per-player running totals built by the accumulator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRunningStat {
    /// Matches won (match level, independent of game scores).
    pub wins: u32,
    /// Matches lost.
    pub losses: u32,
    /// Individual games won, summed over all match scores.
    pub game_wins: i64,
    /// Individual games lost.
    pub game_losses: i64,
    /// Every opponent faced, one entry per match, duplicates kept: a rematch
    /// opponent weighs into resistance once per meeting.
    pub opponents: Vec<AltId>,
    /// Round of the bracket match the player lost; `None` means still alive
    /// or never in a bracket phase.
    pub eliminated_round: Option<u32>,
    /// Whether the player appeared in a top-cut phase at all.
    pub made_top_cut: bool,
}

impl PlayerRunningStat {
    /// Match-level win rate; 0 with no recorded matches.
    pub fn win_rate(&self) -> f64 {
        let total = self.wins + self.losses;
        if total == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(total)
        }
    }

    /// Game-level win rate; 0 with no games played.
    pub fn game_win_rate(&self) -> f64 {
        let total = self.game_wins + self.game_losses;
        if total == 0 {
            0.0
        } else {
            self.game_wins as f64 / total as f64
        }
    }
}

/// One row of the final standings table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRecord {
    pub alt_id: AltId,
    /// Dense 1-based rank; no shared placements.
    pub placement: u32,
    pub wins: u32,
    pub losses: u32,
    pub game_wins: i64,
    pub game_losses: i64,
    /// Opponents' match-win percentage, 0–100, two decimals.
    pub resistance_pct: f64,
}
