//! Runtime settings read from the environment (after `.env`, if present).

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

pub const DATABASE_VAR: &str = "SCOREBOARD_DATABASE";
pub const HOST_VAR: &str = "SCOREBOARD_HOST";
pub const PORT_VAR: &str = "SCOREBOARD_PORT";
pub const SWAGGER_VAR: &str = "SCOREBOARD_SWAGGER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SCOREBOARD_PORT={value:?} is not a valid port: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{key}={value:?} is not a boolean flag")]
    InvalidFlag { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Mount Swagger UI next to `/scores`.
    pub swagger: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("database.json"),
            host: "127.0.0.1".into(),
            port: 5000,
            swagger: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup(DATABASE_VAR) {
            cfg.database_path = PathBuf::from(path);
        }
        if let Some(host) = lookup(HOST_VAR) {
            cfg.host = host;
        }
        if let Some(value) = lookup(PORT_VAR) {
            cfg.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        if let Some(value) = lookup(SWAGGER_VAR) {
            cfg.swagger = parse_flag(SWAGGER_VAR, value)?;
        }
        Ok(cfg)
    }
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { key, value }),
    }
}
