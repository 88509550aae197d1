use serde::{Deserialize, Deserializer};
use std::{fs, path::Path};

use crate::error::ConfigError;

/// Default location of the config file, relative to the working directory
///
/// The file is always parsed as YAML; a JSON document is valid YAML too.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Application configuration loaded once at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Database connection string, `<mysql|postgres>://<username>:<password>@tcp(<host>:<port>)/<database>`
    #[serde(rename = "db", deserialize_with = "null_as_empty")]
    pub database: String,

    /// Base URL for the HTTP client
    #[serde(rename = "client", deserialize_with = "null_as_empty")]
    pub client_url: String,
}

/// `db: ~` and `db: null` load like a missing key
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Read and parse the config file at `path`
    ///
    /// Missing keys stay empty and unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file can't be read and
    /// [`ConfigError::Parse`] if it isn't a YAML mapping of strings
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
