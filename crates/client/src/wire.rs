//! Raw wire records as the remote API sends them.
//!
//! Every field is optional: the API may omit or null anything, and deciding
//! what that means is the job of [`crate::normalize`], not of serde.

use std::collections::BTreeMap;

use serde::Deserialize;

use aipm_core::{
    ClientId, ClusterId, ConversationTurnId, OrganizationId, PersonaId, PersonaRole, ProjectId,
    ProjectStatus, RequirementId, RequirementType, UserId,
};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectRecord {
    pub id: Option<ProjectId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub organization_id: Option<OrganizationId>,
    pub client_id: Option<ClientId>,
    pub created_at: Option<String>,

    // summary listing
    pub persona_count: Option<u64>,
    pub requirement_count: Option<u64>,

    // detail view
    pub personas: Option<Vec<PersonaRecord>>,
    pub requirement_counts: Option<RequirementCountsRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequirementCountsRecord {
    pub total: Option<u64>,
    pub by_type: Option<BTreeMap<String, u64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PersonaRecord {
    pub id: Option<PersonaId>,
    pub role: Option<PersonaRole>,
    pub display_name: Option<String>,
    /// Some payloads echo the camelCase key; only consulted when
    /// `display_name` is absent.
    #[serde(rename = "displayName")]
    pub display_name_camel: Option<String>,
    pub project_id: Option<ProjectId>,
    pub user_id: Option<UserId>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RequirementRecord {
    pub id: Option<RequirementId>,
    pub project_id: Option<ProjectId>,
    pub persona_id: Option<PersonaId>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<RequirementType>,
    pub confidence: Option<f64>,
    pub cluster_id: Option<ClusterId>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConversationTurnRecord {
    pub id: Option<ConversationTurnId>,
    pub project_id: Option<ProjectId>,
    pub persona_id: Option<PersonaId>,
    pub text: Option<String>,
    pub embedding: Option<Vec<f64>>,
    pub created_at: Option<String>,
}
