//! Tournament error types.

use sqlx::error::ErrorKind;
use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Store unreachable or any other database failure
    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    /// A match referenced a player id that does not exist
    #[error("Unknown player referenced (constraint {constraint})")]
    UnknownPlayer { constraint: String },

    /// The store rejected the row
    #[error("Constraint violation: {constraint}")]
    ConstraintViolation { constraint: String },

    /// Adjacent pairing needs an even number of players
    #[error("Cannot pair {0} players: an even player count is required")]
    OddPlayerCount(usize),

    /// Schema setup failed
    #[error("Migration error: {0}")]
    Migration(#[from] MigrateError),
}

impl From<sqlx::Error> for TournamentError {
    fn from(err: sqlx::Error) -> Self {
        let Some(db_err) = err.as_database_error() else {
            return Self::Database(err);
        };

        let constraint = db_err.constraint().unwrap_or("unknown").to_string();
        match db_err.kind() {
            ErrorKind::ForeignKeyViolation => Self::UnknownPlayer { constraint },
            ErrorKind::CheckViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::UniqueViolation => Self::ConstraintViolation { constraint },
            _ => Self::Database(err),
        }
    }
}

impl TournamentError {
    /// Get an operator-safe message that does not leak SQL details
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Database(_) => "Internal database error".to_string(),
            TournamentError::Migration(_) => "Schema setup failed".to_string(),
            TournamentError::UnknownPlayer { .. } => "Unknown player".to_string(),
            TournamentError::ConstraintViolation { .. } => "Invalid match report".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
