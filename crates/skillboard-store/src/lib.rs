//! Persistence layer for skillboard
//!
//! Provides:
//! - The `skills` table (created on first startup if absent)
//! - Typed record operations behind the `Store` trait
//! - One short-lived connection per operation

mod sqlite;
mod traits;

pub use sqlite::*;
pub use traits::*;

use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
