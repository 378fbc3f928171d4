//! Shared utilities for skillboard
//!
//! This crate provides:
//! - The `SkillId` record identifier
//! - Default paths for the database and config file

mod ids;
mod paths;

pub use ids::*;
pub use paths::*;
