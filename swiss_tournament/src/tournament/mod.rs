//! Swiss-system tournament: registration, match results, standings and pairings.
//!
//! This module provides:
//! - Player registration and bulk resets
//! - Match reporting with decisive results and draws (half a win each)
//! - Standings ordered by win credit
//! - Next-round pairing of adjacent players in the standings
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::Database;
//! use swiss_tournament::tournament::TournamentManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     db.migrate().await?;
//!     let tournament = TournamentManager::from_database(&db);
//!
//!     let alice = tournament.register_player("Alice").await?;
//!     let bob = tournament.register_player("Bob").await?;
//!     tournament.report_win(alice, bob).await?;
//!
//!     for pairing in tournament.swiss_pairings().await? {
//!         println!("{} vs {}", pairing.name1, pairing.name2);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod pairing;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{
    DRAW_CREDIT, MatchId, MatchOutcome, MatchRecord, Pairing, Player, PlayerId, Standing,
    WIN_CREDIT,
};
pub use pairing::pair_adjacent;
