//! HTTP layer for skillboard
//!
//! Provides:
//! - TCP listener with one spawned task per connection
//! - Minimal HTTP/1.1 request parsing (keep-alive, Content-Length bodies)
//! - The routing table mapping the API surface onto the service
//!
//! Carries no business logic: every route delegates to the skill service
//! and serializes its result.

mod request;
mod response;
mod router;
mod server;

pub use request::*;
pub use response::*;
pub use router::*;
pub use server::*;

use thiserror::Error;

/// HTTP layer errors
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),
}

pub type HttpResult<T> = Result<T, HttpError>;
