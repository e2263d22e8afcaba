//! Server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Which storage backend to run against, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    File,
    Postgres,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "postgres" => Ok(Self::Postgres),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("unknown STORAGE backend: {0} (expected memory, file, or postgres)")]
    UnknownStorage(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on.
    pub port: u16,
    /// Selected storage backend.
    pub storage: StorageKind,
    /// Data directory for the file backend.
    pub data_dir: PathBuf,
    /// Connection DSN for the postgres backend, when selected.
    pub database_dsn: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port (default: 3000)
    /// - `STORAGE`: `memory` | `file` | `postgres` (default: `memory`)
    /// - `DATA_DIR`: data directory for the file backend (default: `./data`)
    ///
    /// Required when `STORAGE=postgres`:
    /// - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let storage = env::var("STORAGE")
            .unwrap_or_else(|_| "memory".to_string())
            .parse::<StorageKind>()?;

        let data_dir = env::var("DATA_DIR").map_or_else(|_| PathBuf::from("./data"), PathBuf::from);

        let database_dsn = if storage == StorageKind::Postgres {
            Some(Self::dsn_from_env()?)
        } else {
            None
        };

        Ok(Self {
            port,
            storage,
            data_dir,
            database_dsn,
        })
    }

    fn dsn_from_env() -> Result<String, ConfigError> {
        let var =
            |name: &str| env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()));

        let host = var("DB_HOST")?;
        let port = var("DB_PORT")?;
        let user = var("DB_USER")?;
        let password = var("DB_PASSWORD")?;
        let dbname = var("DB_NAME")?;

        Ok(format!(
            "host={host} port={port} user={user} password={password} dbname={dbname}"
        ))
    }
}
