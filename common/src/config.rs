//! Runtime configuration.
//!
//! Configuration comes from environment variables only: `DB_URL` names the
//! database target and is required, `PORT` picks the listen port and falls
//! back to a default when unset or unparseable.

use crate::errors::{AppError, AppResult};

/// Environment variable holding the database connection string.
pub const DB_URL_VAR: &str = "DB_URL";

/// Environment variable holding the listen port.
pub const PORT_VAR: &str = "PORT";

/// Listen port used when `PORT` is unset or not a valid port number.
pub const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration for a service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection string (from `DB_URL`).
    pub db_url: String,

    /// Listen port (from `PORT`, default 3000).
    pub port: u16,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    /// Returns `AppError::Config` when `DB_URL` is absent; the service
    /// cannot function without a database target, so startup must stop here.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through the given variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let db_url = lookup(DB_URL_VAR)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Config(format!("{} is not set", DB_URL_VAR)))?;

        let port = lookup(PORT_VAR)
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self { db_url, port })
    }
}
