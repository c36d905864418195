//! Daemon settings: an optional `minibank.toml`, then `MINIBANK_*` variables.
//!
//! ```toml
//! listen = "0.0.0.0:3000"
//! log = "minibankd=info,minibank=info"
//!
//! [database]
//! url = "sqlite:minibank.db?mode=rwc"
//! max_connections = 5
//! ```
//!
//! A malformed override is an error rather than silently ignored, so a typo
//! in a deployment never starts the daemon on the wrong port or database.

use std::net::SocketAddr;

use serde::Deserialize;

use minibank_adapter_storage_sqlite_sqlx::Config as StorageConfig;

const FILE: &str = "minibank.toml";

/// Everything `minibankd` needs to start.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Socket the HTTP API listens on.
    pub listen: SocketAddr,
    /// Tracing filter directive (`RUST_LOG` syntax).
    pub log: String,
    /// Account store.
    pub database: DatabaseConfig,
}

/// Where accounts are stored and how many connections may hit the file.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Config {
    /// Read `minibank.toml` (if present), apply environment overrides and
    /// validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is unreadable or malformed, an
    /// override does not parse, or a setting is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(FILE)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(val) = var("MINIBANK_LISTEN") {
            self.listen = parse_override("MINIBANK_LISTEN", val)?;
        }
        if let Some(val) = var("MINIBANK_PORT") {
            self.listen.set_port(parse_override("MINIBANK_PORT", val)?);
        }
        if let Some(val) = var("MINIBANK_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("MINIBANK_DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections =
                parse_override("MINIBANK_DATABASE_MAX_CONNECTIONS", val)?;
        }
        // RUST_LOG wins so the usual tracing habit keeps working.
        if let Some(val) = var("RUST_LOG").or_else(|| var("MINIBANK_LOG")) {
            self.log = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.listen.port() == 0 {
            return Err(ConfigError::Validation("listen port must be non-zero"));
        }
        if self.database.url.is_empty() {
            return Err(ConfigError::Validation("database url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database max_connections must be at least 1",
            ));
        }
        Ok(())
    }

    /// Settings for the `SQLite` account store.
    #[must_use]
    pub fn storage(&self) -> StorageConfig {
        StorageConfig {
            database_url: self.database.url.clone(),
            max_connections: self.database.max_connections,
        }
    }
}

fn parse_override<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::Override { key, value }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log: "minibankd=info,minibank=info,tower_http=debug".to_string(),
            database: DatabaseConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:minibank.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

/// Why the daemon refused its configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse minibank.toml")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read minibank.toml")]
    Io(#[from] std::io::Error),
    #[error("{key}={value:?} is not valid")]
    Override { key: &'static str, value: String },
    #[error("invalid configuration: {0}")]
    Validation(&'static str),
}
