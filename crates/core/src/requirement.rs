//! Requirement view models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::label::label_enum;
use crate::{ClusterId, PersonaId, ProjectId, RequirementId};

/// Classification of a requirement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RequirementType {
    #[default]
    Feature,
    Bug,
    Improvement,
    Constraint,
}

label_enum!(RequirementType {
    Feature => "feature",
    Bug => "bug",
    Improvement => "improvement",
    Constraint => "constraint",
});

/// A typed statement of need attributed to a persona.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub id: RequirementId,
    pub project_id: ProjectId,
    pub persona_id: PersonaId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: RequirementType,
    /// Extractor confidence in `[0.0, 1.0]`, when one was recorded.
    pub confidence: Option<f64>,
    pub cluster_id: Option<ClusterId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Requirement rollup for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementCounts {
    pub total: u64,
    pub by_type: BTreeMap<RequirementType, u64>,
}

impl RequirementCounts {
    /// Count for one type; types with no requirements report zero.
    pub fn count(&self, kind: RequirementType) -> u64 {
        self.by_type.get(&kind).copied().unwrap_or(0)
    }
}
