//! Read-side gateway to the external tournament store.
//!
//! The engine never talks to a database. Callers implement
//! [`TournamentStore`] over whatever backs their data and the query layer
//! pulls fully materialized lists through it.

use std::collections::HashMap;

use crate::model::{Match, Phase, Registration, Tournament, TournamentId};

/// Supplies one tournament's materialized entities.
pub trait TournamentStore {
    /// Tournament lookup; `None` if the id is unknown.
    fn tournament(&self, id: TournamentId) -> Option<Tournament>;

    /// All phases of the tournament, any order; the engine sorts by
    /// `phase_order` itself.
    fn phases(&self, id: TournamentId) -> Vec<Phase>;

    /// Every registration for the tournament, in registration order.
    fn registrations(&self, id: TournamentId) -> Vec<Registration>;

    /// Every finalized match across all the tournament's phases.
    fn matches(&self, id: TournamentId) -> Vec<Match>;
}

/// In-memory store for tests and embedding callers that already hold the
/// rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tournaments: HashMap<TournamentId, Tournament>,
    phases: Vec<Phase>,
    registrations: Vec<Registration>,
    matches: Vec<Match>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tournament(&mut self, tournament: Tournament) {
        self.tournaments.insert(tournament.id, tournament);
    }

    pub fn add_phase(&mut self, phase: Phase) {
        self.phases.push(phase);
    }

    pub fn add_registration(&mut self, registration: Registration) {
        self.registrations.push(registration);
    }

    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }
}

impl TournamentStore for MemoryStore {
    fn tournament(&self, id: TournamentId) -> Option<Tournament> {
        self.tournaments.get(&id).cloned()
    }

    fn phases(&self, id: TournamentId) -> Vec<Phase> {
        self.phases
            .iter()
            .filter(|p| p.tournament_id == id)
            .cloned()
            .collect()
    }

    fn registrations(&self, id: TournamentId) -> Vec<Registration> {
        self.registrations
            .iter()
            .filter(|r| r.tournament_id == id)
            .cloned()
            .collect()
    }

    fn matches(&self, id: TournamentId) -> Vec<Match> {
        let phase_ids: Vec<_> = self
            .phases
            .iter()
            .filter(|p| p.tournament_id == id)
            .map(|p| p.id)
            .collect();
        self.matches
            .iter()
            .filter(|m| phase_ids.contains(&m.phase_id))
            .cloned()
            .collect()
    }
}
