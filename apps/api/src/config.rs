//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup. A `.env` file in the working
//! directory is honoured (loaded by `main` through `dotenvy`).
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `DATABASE_URL`: SQLite database (default: "sqlite://data/plants.db")
//! - `DATABASE_MAX_CONNECTIONS`: DB pool size (default: 5)
//! - `UPLOADS_DIR`: Directory uploaded photos are written to (default: "data/uploads")
//! - `UPLOADS_PUBLIC_PATH`: URL prefix the photos are served under (default: "/uploads")
//! - `UNIQUE_UPLOAD_NAMES`: Add a random suffix to upload file names (default: true)
//! - `LIKE_INCREMENT_STRATEGY`: "atomic" or "racy" (default: "atomic")
//! - `MAX_UPLOAD_BYTES`: Request body limit in bytes (default: 20 MiB)
//! - `ALLOWED_ORIGINS`: Comma-separated CORS origins; empty allows any (default: empty)
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `IGNORE_MISSING_MIGRATIONS`: Skip missing migrations (default: true)
//! - `RUST_LOG`: Logging level (default: "info,mygarden_api=debug,tower_http=debug")

use crate::domain::like::entity::IncrementStrategy;
use serde::Deserialize;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// SQLite connection string (e.g., `sqlite://data/plants.db`)
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Directory where uploaded photos are persisted
    pub uploads_dir: String,

    /// URL prefix under which `uploads_dir` is served
    pub uploads_public_path: String,

    /// Give same-second uploads distinct file names
    pub unique_upload_names: bool,

    /// How the like counter is incremented
    pub like_increment_strategy: IncrementStrategy,

    /// Maximum accepted request body size in bytes
    pub max_upload_bytes: usize,

    /// CORS origins; an empty list allows any origin
    pub allowed_origins: Vec<String>,

    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Skip missing migrations during startup
    pub ignore_missing_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env_or("DATABASE_URL", "sqlite://data/plants.db".to_string())?,
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", 5)?,
            uploads_dir: env_or("UPLOADS_DIR", "data/uploads".to_string())?,
            uploads_public_path: env_or("UPLOADS_PUBLIC_PATH", "/uploads".to_string())?,
            unique_upload_names: env_or("UNIQUE_UPLOAD_NAMES", true)?,
            like_increment_strategy: env_or("LIKE_INCREMENT_STRATEGY", IncrementStrategy::Atomic)?,
            max_upload_bytes: env_or("MAX_UPLOAD_BYTES", 20 * 1024 * 1024)?,
            allowed_origins: parse_origins(&env_or("ALLOWED_ORIGINS", String::new())?),
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            ignore_missing_migrations: env_or("IGNORE_MISSING_MIGRATIONS", true)?,
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
