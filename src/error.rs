use std::{fmt, io, path::PathBuf};
use thiserror::Error;

use crate::db::Driver;

/// Failure while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ConfigError {
    /// Path of the config file that could not be loaded
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

/// Failure while opening the database handle
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database connection string is empty")]
    Empty,

    #[error("unsupported database driver: {0}")]
    UnsupportedDriver(String),

    #[error("invalid database connection string")]
    InvalidDsn {
        #[source]
        source: dsn::ParseError,
    },

    #[error("failed to open {driver} connection")]
    Open {
        driver: Driver,
        #[source]
        source: sqlx::Error,
    },
}

/// Failure while building the HTTP client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid http client configuration: {0}")]
    ConfigInvalid(String),

    #[error("failed to build http client")]
    Build(#[source] reqwest::Error),
}

/// Bootstrap stage a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Database,
    HttpClient,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Config => "config",
            Self::Database => "database",
            Self::HttpClient => "http client",
        })
    }
}

/// Any failure of the bootstrap sequence, tagged by stage
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("bootstrap failed at config stage")]
    Config(#[from] ConfigError),

    #[error("bootstrap failed at database stage")]
    Database(#[from] DbError),

    #[error("bootstrap failed at http client stage")]
    Client(#[from] ClientError),
}

impl BootstrapError {
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Config(_) => Stage::Config,
            Self::Database(_) => Stage::Database,
            Self::Client(_) => Stage::HttpClient,
        }
    }
}
