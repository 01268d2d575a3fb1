//! # Swiss Tournament
//!
//! A Swiss-system tournament store backed by PostgreSQL.
//!
//! Players are registered, match results are reported, and the library
//! derives standings and the pairings for the next round. Each round pairs
//! players with equal or nearly-equal win records: the standings are walked
//! top to bottom and every two adjacent players meet.
//!
//! ## Core Modules
//!
//! - [`db`]: Connection pool, schema migrations, repository seam and the unit-of-work helper
//! - [`tournament`]: Models, errors, pairing and the [`TournamentManager`]
//!
//! ## Example
//!
//! ```
//! use swiss_tournament::{Standing, pair_adjacent};
//!
//! let standings = vec![
//!     Standing::new(1, "A", 1.0, 1),
//!     Standing::new(2, "B", 0.0, 1),
//! ];
//! let pairings = pair_adjacent(&standings).unwrap();
//! assert_eq!(pairings[0].name1, "A");
//! ```

/// PostgreSQL access: pool, migrations, repositories and transactions.
pub mod db;
pub use db::{Database, DatabaseConfig};

/// Tournament logic and data models.
pub mod tournament;
pub use tournament::{
    MatchOutcome, MatchRecord, Pairing, Player, PlayerId, Standing, TournamentError,
    TournamentManager, TournamentResult, pair_adjacent,
};
