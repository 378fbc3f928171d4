//! The skill record service

use skillboard_api::{SkillDraft, SkillRecord, SkillUpdate};
use skillboard_store::Store;
use skillboard_util::SkillId;
use std::sync::Arc;
use tracing::{debug, info};

use crate::{ServiceError, ServiceResult};

/// Validation message for a create request with missing or empty fields
pub const FIELDS_REQUIRED: &str = "All fields are required";

/// Stateless façade over the store.
///
/// Holds no state of its own; every operation is a self-contained
/// round-trip against the store, so instances can be shared freely across
/// connections.
pub struct SkillService {
    store: Arc<dyn Store>,
}

impl SkillService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// List all records in natural row order.
    pub fn list_all(&self) -> ServiceResult<Vec<SkillRecord>> {
        Ok(self.store.list()?)
    }

    /// Create a record from a draft.
    ///
    /// Every field must be present and non-empty (not trimmed: `" "` is
    /// accepted). A draft failing validation is rejected before the store
    /// is touched.
    pub fn create(&self, draft: &SkillDraft) -> ServiceResult<SkillRecord> {
        let (name, skill, level) = validate_draft(draft)?;

        let id = self.store.insert(name, skill, level)?;
        info!(id = %id, name, skill, "Skill created");

        Ok(SkillRecord {
            id,
            name: name.to_string(),
            skill: skill.to_string(),
            level: level.to_string(),
        })
    }

    /// Overwrite the record at `id` with the given fields.
    ///
    /// No field validation is performed, and updating an absent `id` is a
    /// silent success (zero rows affected). Callers that need stricter
    /// semantics must check first.
    pub fn update(&self, id: SkillId, update: &SkillUpdate) -> ServiceResult<()> {
        self.store
            .update(id, &update.name, &update.skill, &update.level)?;
        info!(id = %id, "Skill updated");
        Ok(())
    }

    /// Delete the record at `id`. Deleting an absent `id` succeeds.
    pub fn delete(&self, id: SkillId) -> ServiceResult<()> {
        self.store.delete(id)?;
        info!(id = %id, "Skill deleted");
        Ok(())
    }

    /// List records whose `skill` contains `fragment` (store collation;
    /// see `Store::search_skill`). An empty fragment returns all records.
    pub fn search(&self, fragment: &str) -> ServiceResult<Vec<SkillRecord>> {
        let records = self.store.search_skill(fragment)?;
        debug!(fragment, hits = records.len(), "Skill search");
        Ok(records)
    }

    /// Count all records.
    pub fn count(&self) -> ServiceResult<u64> {
        Ok(self.store.count()?)
    }
}

fn validate_draft(draft: &SkillDraft) -> ServiceResult<(&str, &str, &str)> {
    match (
        draft.name.as_deref(),
        draft.skill.as_deref(),
        draft.level.as_deref(),
    ) {
        (Some(name), Some(skill), Some(level))
            if !name.is_empty() && !skill.is_empty() && !level.is_empty() =>
        {
            Ok((name, skill, level))
        }
        _ => Err(ServiceError::validation(FIELDS_REQUIRED)),
    }
}
