//! Tournament data models for Swiss-system rounds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type (assigned by the store)
pub type PlayerId = i64;

/// Match ID type (assigned by the store)
pub type MatchId = i64;

/// Win credit for a decisive win
pub const WIN_CREDIT: f64 = 1.0;

/// Win credit each participant receives for a draw
pub const DRAW_CREDIT: f64 = 0.5;

/// A registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Full name as registered (need not be unique)
    pub name: String,
    pub registered_at: DateTime<Utc>,
}

/// How a match ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// The first player won
    #[default]
    Decisive,
    /// Nobody won; both players get half a win
    Draw,
}

impl MatchOutcome {
    /// Build an outcome from the `draw` flag stored with each match
    pub fn from_draw_flag(draw: bool) -> Self {
        if draw { Self::Draw } else { Self::Decisive }
    }

    pub fn is_draw(self) -> bool {
        self == Self::Draw
    }

    /// Credit awarded to (winner, loser)
    pub fn credits(self) -> (f64, f64) {
        match self {
            Self::Decisive => (WIN_CREDIT, 0.0),
            Self::Draw => (DRAW_CREDIT, DRAW_CREDIT),
        }
    }
}

/// A reported match
///
/// For a draw `winner` and `loser` only name the two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub outcome: MatchOutcome,
    pub reported_at: DateTime<Utc>,
}

/// A player's aggregated record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    /// Win credit: 1 per win, 0.5 per draw
    pub wins: f64,
    pub matches_played: i64,
}

impl Standing {
    pub fn new(id: PlayerId, name: impl Into<String>, wins: f64, matches_played: i64) -> Self {
        Self {
            id,
            name: name.into(),
            wins,
            matches_played,
        }
    }
}

/// Two players meeting in the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    /// Pair two standings, keeping their order
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    /// Whether the given player sits on either side of this pairing
    pub fn involves(&self, player: PlayerId) -> bool {
        self.id1 == player || self.id2 == player
    }
}
