//! Tournament manager for running a Swiss-system tournament.

use super::errors::TournamentResult;
use super::models::{MatchOutcome, MatchRecord, Pairing, Player, PlayerId, Standing};
use super::pairing::pair_adjacent;
use crate::db::{Database, PgTournamentRepository, TournamentRepository};
use log::{debug, info};
use std::sync::Arc;

/// Tournament manager
///
/// Every call is one request/response against the repository; the manager
/// keeps no state of its own between calls.
pub struct TournamentManager<R = PgTournamentRepository> {
    repository: Arc<R>,
}

impl<R> Clone for TournamentManager<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl TournamentManager<PgTournamentRepository> {
    /// Create a manager backed by PostgreSQL
    pub fn from_database(db: &Database) -> Self {
        Self::new(PgTournamentRepository::new(db.pool().clone()))
    }
}

impl<R: TournamentRepository> TournamentManager<R> {
    /// Create a new tournament manager over any repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a reference to the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Remove all match records. Calling it again is a no-op.
    pub async fn reset_matches(&self) -> TournamentResult<()> {
        self.repository.delete_matches().await?;
        info!("All matches deleted");
        Ok(())
    }

    /// Remove all players together with their matches. Calling it again is a no-op.
    pub async fn reset_players(&self) -> TournamentResult<()> {
        self.repository.delete_players().await?;
        info!("All players deleted");
        Ok(())
    }

    /// Number of currently registered players
    pub async fn count_players(&self) -> TournamentResult<i64> {
        self.repository.count_players().await
    }

    /// Register a player
    ///
    /// The store assigns the id; names need not be unique.
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let id = self.repository.insert_player(name).await?;
        info!("Registered player {id} ({name})");
        Ok(id)
    }

    /// All registered players in id order
    pub async fn players(&self) -> TournamentResult<Vec<Player>> {
        self.repository.players().await
    }

    /// Players sorted by win credit, first place first
    ///
    /// Ties keep registration order.
    pub async fn standings(&self) -> TournamentResult<Vec<Standing>> {
        self.repository.standings().await
    }

    /// Record the outcome of a single match
    ///
    /// # Arguments
    ///
    /// * `winner` - Id of the player who won (or either participant for a draw)
    /// * `loser` - Id of the player who lost (or the other participant for a draw)
    /// * `outcome` - Whether the match was decisive or a draw
    ///
    /// # Errors
    ///
    /// * `TournamentError::UnknownPlayer` - Either id is not registered
    /// * `TournamentError::ConstraintViolation` - Both ids are the same player
    pub async fn report_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
        outcome: MatchOutcome,
    ) -> TournamentResult<()> {
        self.repository.insert_match(winner, loser, outcome).await?;
        match outcome {
            MatchOutcome::Decisive => info!("Match reported: {winner} beat {loser}"),
            MatchOutcome::Draw => info!("Match reported: {winner} drew with {loser}"),
        }
        Ok(())
    }

    /// Record a decisive match
    pub async fn report_win(&self, winner: PlayerId, loser: PlayerId) -> TournamentResult<()> {
        self.report_match(winner, loser, MatchOutcome::Decisive).await
    }

    /// Record a draw; both players are credited half a win
    pub async fn report_draw(&self, first: PlayerId, second: PlayerId) -> TournamentResult<()> {
        self.report_match(first, second, MatchOutcome::Draw).await
    }

    /// All reported matches in report order
    pub async fn matches(&self) -> TournamentResult<Vec<MatchRecord>> {
        self.repository.matches().await
    }

    /// Pairings for the next round
    ///
    /// Each player is paired with the player adjacent to them in the
    /// standings, so every player appears exactly once.
    ///
    /// # Errors
    ///
    /// * `TournamentError::OddPlayerCount` - an odd number of players is registered
    pub async fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.standings().await?;
        debug!("Pairing {} players", standings.len());

        let pairings = pair_adjacent(&standings)?;
        info!("Generated {} pairings", pairings.len());
        Ok(pairings)
    }
}
