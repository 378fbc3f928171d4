//! Wire types for the skillboard HTTP API
//!
//! This crate defines the stable JSON contract between the daemon and its
//! front-end clients:
//! - The skill record entity
//! - Request bodies (create, update)
//! - Response bodies (acknowledgments, errors, counts)

mod responses;
mod types;

pub use responses::*;
pub use types::*;
