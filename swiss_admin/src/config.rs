//! Admin configuration management.
//!
//! Consolidates the environment reads and command line overrides.

use swiss_tournament::db::{ConfigError, DatabaseConfig};

/// Default connection string when neither `--db-url` nor `DATABASE_URL` is given
pub const DEFAULT_DATABASE_URL: &str = "postgres://postgres@localhost/tournament";

/// Complete admin configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Print list results as JSON instead of tables
    pub json: bool,
}

impl AdminConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `database_url_override` - Optional database URL override (from CLI args)
    /// * `json` - Whether JSON output was requested
    ///
    /// # Errors
    ///
    /// Returns error if a pool setting is not a valid number or the bounds are inverted
    pub fn from_env(
        database_url_override: Option<String>,
        json: bool,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url_override
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        if database_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "DATABASE_URL".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(Self {
            database: DatabaseConfig::from_env_with_url(database_url)?,
            json,
        })
    }
}
