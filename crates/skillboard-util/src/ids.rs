//! Strongly-typed record identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a skill record, assigned by the store on insert.
///
/// Serializes as a bare integer, so it round-trips through the JSON wire
/// format unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SkillId(i64);

impl SkillId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SkillId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
