//! Store trait definitions

use skillboard_api::SkillRecord;
use skillboard_util::SkillId;

use crate::StoreResult;

/// Main store trait
pub trait Store: Send + Sync {
    /// List all records in natural row order (insertion order unless rows
    /// were deleted in between).
    fn list(&self) -> StoreResult<Vec<SkillRecord>>;

    /// Insert a record and return its assigned id.
    fn insert(&self, name: &str, skill: &str, level: &str) -> StoreResult<SkillId>;

    /// Overwrite all three fields of the record at `id`.
    ///
    /// Succeeds even when `id` does not exist (zero rows affected).
    fn update(&self, id: SkillId, name: &str, skill: &str, level: &str) -> StoreResult<()>;

    /// Delete the record at `id`, if present. Succeeds either way.
    fn delete(&self, id: SkillId) -> StoreResult<()>;

    /// List records whose `skill` field contains `fragment`.
    ///
    /// Matching uses SQLite's default `LIKE` semantics: case-insensitive
    /// for ASCII letters, case-sensitive beyond ASCII. `%` and `_` in the
    /// fragment keep their wildcard meaning. An empty fragment matches
    /// every record.
    fn search_skill(&self, fragment: &str) -> StoreResult<Vec<SkillRecord>>;

    /// Count all records.
    fn count(&self) -> StoreResult<u64>;

    /// Check if the store is reachable.
    fn is_healthy(&self) -> bool;
}
