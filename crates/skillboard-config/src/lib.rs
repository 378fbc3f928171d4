//! Configuration parsing for skillboardd
//!
//! Supports TOML configuration with:
//! - Versioned schema
//! - Bind address and database path
//! - Defaults filled from the standard skillboard paths

mod schema;

pub use schema::*;

use skillboard_util::default_db_path;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Current supported config version
pub const CURRENT_CONFIG_VERSION: u32 = 1;

/// Default bind address when neither config nor CLI provide one
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Resolved configuration with all defaults applied
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind: SocketAddr,
    /// SQLite database file
    pub db_path: PathBuf,
}

impl Config {
    fn from_raw(raw: RawConfig) -> Self {
        Self {
            bind: raw.server.bind.unwrap_or_else(default_bind),
            db_path: raw.storage.db_path.unwrap_or_else(default_db_path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            db_path: default_db_path(),
        }
    }
}

fn default_bind() -> SocketAddr {
    DEFAULT_BIND.parse().expect("default bind address is valid")
}

/// Load and validate configuration from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from a TOML string
pub fn parse_config(content: &str) -> ConfigResult<Config> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.config_version != CURRENT_CONFIG_VERSION {
        return Err(ConfigError::UnsupportedVersion(raw.config_version));
    }

    Ok(Config::from_raw(raw))
}
