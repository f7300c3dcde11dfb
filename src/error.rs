//! Typed errors for the query entry points.

use thiserror::Error;

use crate::model::TournamentId;

#[derive(Debug, Error)]
pub enum StandingsError {
    #[error("unknown tournament {0}")]
    UnknownTournament(TournamentId),
}
