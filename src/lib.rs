//! Tournament standings and ranking engine.
//!
//! Turns a tournament's finalized matches into an ordered standings table:
//! match and game records, opponents'-win-percentage tie-breaks
//! ("resistance") and dense 1-based placements, with byes, elimination
//! brackets and multi-phase tournaments (Swiss into top cut) handled along
//! the way.
//!
//! The whole pipeline is pure: feed in materialized entity lists through
//! [`standings::compute`], or implement [`store::TournamentStore`] and use
//! the [`query`] entry points. Callers decide what to persist or cache.

pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod standings;
pub mod store;

pub use config::StandingsConfig;
pub use error::StandingsError;
pub use model::{
    AltId, Match, MatchId, Phase, PhaseId, PhaseRole, PhaseType, PlayerRunningStat, Registration,
    StandingRecord, Tournament, TournamentId,
};
pub use query::{get_standings, get_top_finishers};
pub use standings::{compute, StandingsOutcome};
