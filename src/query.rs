//! Convenience entry points over the pure pipeline.
//!
//! This is the caller side of the engine: it pulls materialized rows out of
//! the store, runs [`standings::compute`](crate::standings::compute) and logs
//! the data-integrity signal the pure functions deliberately stay silent
//! about.

use crate::{
    config::StandingsConfig,
    error::StandingsError,
    model::{StandingRecord, TournamentId},
    standings,
    store::TournamentStore,
};

/// Full standings table for a tournament, ordered by ascending placement.
pub fn get_standings(
    store: &impl TournamentStore,
    tournament_id: TournamentId,
    config: &StandingsConfig,
) -> Result<Vec<StandingRecord>, StandingsError> {
    store
        .tournament(tournament_id)
        .ok_or(StandingsError::UnknownTournament(tournament_id))?;

    let phases = store.phases(tournament_id);
    let registrations = store.registrations(tournament_id);
    let matches = store.matches(tournament_id);

    let outcome = standings::compute(&phases, &registrations, &matches, config);
    if outcome.skipped_matches > 0 {
        log::warn!(
            "tournament {tournament_id}: skipped {} match(es) referencing unregistered alts",
            outcome.skipped_matches
        );
    }
    Ok(outcome.records)
}

/// First `n` finishers of the standings table.
pub fn get_top_finishers(
    store: &impl TournamentStore,
    tournament_id: TournamentId,
    n: usize,
    config: &StandingsConfig,
) -> Result<Vec<StandingRecord>, StandingsError> {
    let mut records = get_standings(store, tournament_id, config)?;
    records.truncate(n);
    Ok(records)
}
