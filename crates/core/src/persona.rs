//! Persona view models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::label::label_enum;
use crate::{PersonaId, ProjectId, UserId};

/// The stakeholder voice a persona speaks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaRole {
    #[default]
    Client,
    Lead,
    Developer,
    PmAgent,
}

label_enum!(PersonaRole {
    Client => "client",
    Lead => "lead",
    Developer => "developer",
    PmAgent => "pm_agent",
});

/// Lightweight persona embedded in project details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaSummary {
    pub id: PersonaId,
    pub role: PersonaRole,
    pub display_name: String,
}

/// Full persona record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    #[serde(flatten)]
    pub summary: PersonaSummary,
    pub project_id: ProjectId,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Persona {
    pub fn id(&self) -> PersonaId {
        self.summary.id
    }
}
