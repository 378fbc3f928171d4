//! Skill record service
//!
//! Implements the six record operations (list, create, update, delete,
//! search, count) on top of the store, with field validation on create.

mod service;

pub use service::*;

use skillboard_store::StoreError;
use thiserror::Error;

/// Service errors.
///
/// Two kinds only: a client-caused validation rejection, or an
/// infrastructure failure surfaced from the store. No finer-grained
/// classification exists at this layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
