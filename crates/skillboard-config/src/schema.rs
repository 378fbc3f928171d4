//! Raw configuration schema (as parsed from TOML)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Raw configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfig {
    /// Config schema version
    pub config_version: u32,

    /// HTTP server settings
    #[serde(default)]
    pub server: RawServerConfig,

    /// Storage settings
    #[serde(default)]
    pub storage: RawStorageConfig,
}

/// Server-level settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawServerConfig {
    /// Bind address (default: 127.0.0.1:8080)
    pub bind: Option<SocketAddr>,
}

/// Storage settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawStorageConfig {
    /// Database file path (default: $XDG_DATA_HOME/skillboard/skills.db)
    pub db_path: Option<PathBuf>,
}
