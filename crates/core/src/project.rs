//! Project view models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::label::label_enum;
use crate::persona::PersonaSummary;
use crate::requirement::RequirementCounts;
use crate::{ClientId, OrganizationId, ProjectId};

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    #[default]
    Active,
    Paused,
    Completed,
    Archived,
}

label_enum!(ProjectStatus {
    Planned => "planned",
    Active => "active",
    Paused => "paused",
    Completed => "completed",
    Archived => "archived",
});

/// Attributes shared by every project view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBase {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    /// Absent when the API omits it.
    pub organization_id: Option<OrganizationId>,
    pub client_id: Option<ClientId>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Project as listed on the dashboard, with denormalized counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub base: ProjectBase,
    pub persona_count: u64,
    pub requirement_count: u64,
}

/// Project with its personas and a requirement breakdown by type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub base: ProjectBase,
    pub personas: Vec<PersonaSummary>,
    pub requirement_counts: RequirementCounts,
}

impl ProjectDetail {
    pub fn id(&self) -> ProjectId {
        self.base.id
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }
}
