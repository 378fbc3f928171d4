//! Default paths for skillboard components
//!
//! Paths are user-writable by default (no root required):
//! - Data: `$XDG_DATA_HOME/skillboard` or `~/.local/share/skillboard`
//! - Config: `$XDG_CONFIG_HOME/skillboard/config.toml` or `~/.config/skillboard/config.toml`

use std::path::PathBuf;

/// Environment variable for overriding the database path
pub const SKILLBOARD_DB_ENV: &str = "SKILLBOARD_DB";

/// Environment variable for overriding the bind address
pub const SKILLBOARD_ADDR_ENV: &str = "SKILLBOARD_ADDR";

/// Database filename within the data directory
const DB_FILENAME: &str = "skills.db";

/// Application subdirectory name
const APP_DIR: &str = "skillboard";

/// Get the default data directory.
///
/// Order of precedence:
/// 1. `$XDG_DATA_HOME/skillboard` (if XDG_DATA_HOME is set)
/// 2. `~/.local/share/skillboard` (fallback)
pub fn default_data_dir() -> PathBuf {
    if let Ok(data_home) = std::env::var("XDG_DATA_HOME") {
        return PathBuf::from(data_home).join(APP_DIR);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(APP_DIR);
    }

    // Last resort
    PathBuf::from("/tmp").join(APP_DIR).join("data")
}

/// Get the default database path: `<data dir>/skills.db`.
pub fn default_db_path() -> PathBuf {
    default_data_dir().join(DB_FILENAME)
}

/// Get the default config file path.
///
/// Order of precedence:
/// 1. `$XDG_CONFIG_HOME/skillboard/config.toml` (if XDG_CONFIG_HOME is set)
/// 2. `~/.config/skillboard/config.toml` (fallback)
pub fn default_config_path() -> PathBuf {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(config_home).join(APP_DIR).join("config.toml");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join("config.toml");
    }

    PathBuf::from("/tmp").join(APP_DIR).join("config.toml")
}
