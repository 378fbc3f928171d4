//! Skill record entity and request bodies

use serde::{Deserialize, Serialize};
use skillboard_util::SkillId;

/// A persisted skill record.
///
/// Serializes as `{"id": 1, "name": "...", "skill": "...", "level": "..."}`,
/// the shape clients receive from list and search responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Store-assigned identifier, immutable for the record's lifetime
    pub id: SkillId,
    /// Person the skill belongs to
    pub name: String,
    /// The named competency
    pub skill: String,
    /// Free-form proficiency label
    pub level: String,
}

/// Body of a create request.
///
/// Fields are optional so that an absent field surfaces as the service's
/// validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl SkillDraft {
    pub fn new(
        name: impl Into<String>,
        skill: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            skill: Some(skill.into()),
            level: Some(level.into()),
        }
    }
}

/// Body of an update request.
///
/// All three fields are required by the wire format; the service applies
/// them without further validation, overwriting the record as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillUpdate {
    pub name: String,
    pub skill: String,
    pub level: String,
}

impl SkillUpdate {
    pub fn new(
        name: impl Into<String>,
        skill: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            skill: skill.into(),
            level: level.into(),
        }
    }
}
