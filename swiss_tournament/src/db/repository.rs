//! Repository trait definitions for testability and dependency injection.
//!
//! `TournamentRepository` is the seam between the tournament logic and the
//! relational store. `PgTournamentRepository` talks to PostgreSQL; the
//! `mock` module keeps everything in memory for unit tests.

use async_trait::async_trait;
use log::debug;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::transaction::with_transaction;
use crate::tournament::{
    MatchOutcome, MatchRecord, Player, PlayerId, Standing, TournamentError, TournamentResult,
};

/// Trait for tournament storage operations
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Remove all match records
    async fn delete_matches(&self) -> TournamentResult<()>;

    /// Remove all players (and, through the cascade, their matches)
    async fn delete_players(&self) -> TournamentResult<()>;

    /// Number of registered players
    async fn count_players(&self) -> TournamentResult<i64>;

    /// Insert a player and return the store-assigned id
    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// All players in id order
    async fn players(&self) -> TournamentResult<Vec<Player>>;

    /// Insert one match result
    async fn insert_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
        outcome: MatchOutcome,
    ) -> TournamentResult<()>;

    /// All matches in report order
    async fn matches(&self) -> TournamentResult<Vec<MatchRecord>>;

    /// Standings sorted by wins descending, ties by id ascending
    async fn standings(&self) -> TournamentResult<Vec<Standing>>;
}

/// Default PostgreSQL implementation of `TournamentRepository`
#[derive(Clone)]
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn delete_matches(&self) -> TournamentResult<()> {
        with_transaction(&self.pool, |conn| {
            Box::pin(async move {
                sqlx::query("TRUNCATE matches").execute(&mut *conn).await?;
                Ok::<_, TournamentError>(())
            })
        })
        .await
    }

    async fn delete_players(&self) -> TournamentResult<()> {
        with_transaction(&self.pool, |conn| {
            Box::pin(async move {
                sqlx::query("TRUNCATE players CASCADE")
                    .execute(&mut *conn)
                    .await?;
                Ok::<_, TournamentError>(())
            })
        })
        .await
    }

    async fn count_players(&self) -> TournamentResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS player_count FROM players")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("player_count"))
    }

    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let name = name.to_string();
        with_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                let row = sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
                    .bind(name)
                    .fetch_one(&mut *conn)
                    .await?;
                let id: PlayerId = row.get("id");
                Ok::<_, TournamentError>(id)
            })
        })
        .await
    }

    async fn players(&self) -> TournamentResult<Vec<Player>> {
        let rows = sqlx::query("SELECT id, name, registered_at FROM players ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|r| Player {
                id: r.get("id"),
                name: r.get("name"),
                registered_at: r.get("registered_at"),
            })
            .collect())
    }

    async fn insert_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
        outcome: MatchOutcome,
    ) -> TournamentResult<()> {
        with_transaction(&self.pool, move |conn| {
            Box::pin(async move {
                sqlx::query("INSERT INTO matches (winner, loser, draw) VALUES ($1, $2, $3)")
                    .bind(winner)
                    .bind(loser)
                    .bind(outcome.is_draw())
                    .execute(&mut *conn)
                    .await?;
                Ok::<_, TournamentError>(())
            })
        })
        .await
    }

    async fn matches(&self) -> TournamentResult<Vec<MatchRecord>> {
        let rows = sqlx::query(
            "SELECT id, winner, loser, draw, reported_at FROM matches ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|r| MatchRecord {
                id: r.get("id"),
                winner: r.get("winner"),
                loser: r.get("loser"),
                outcome: MatchOutcome::from_draw_flag(r.get("draw")),
                reported_at: r.get("reported_at"),
            })
            .collect())
    }

    async fn standings(&self) -> TournamentResult<Vec<Standing>> {
        // Views do not guarantee order, so sort again here.
        let rows = sqlx::query(
            "SELECT id, name, wins, matches_played FROM standings ORDER BY wins DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!("Fetched {} standings rows", rows.len());
        Ok(rows.iter().map(standing_from_row).collect())
    }
}

fn standing_from_row(r: &PgRow) -> Standing {
    Standing {
        id: r.get("id"),
        name: r.get("name"),
        wins: r.get("wins"),
        matches_played: r.get("matches_played"),
    }
}
