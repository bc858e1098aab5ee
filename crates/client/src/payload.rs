//! Outgoing request bodies and query filters.
//!
//! Partial updates distinguish "leave untouched" from "clear": a field that is
//! [`Field::Unset`] (or `None` for fields that cannot be cleared) is left out of
//! the body entirely, while [`Field::Null`] is sent as an explicit `null`.

use serde::{Serialize, Serializer};

use aipm_core::{
    ClientId, ClusterId, DomainResult, OrganizationId, PersonaId, PersonaRole, ProjectId,
    ProjectStatus, RequirementType, UserId, non_blank,
};

/// A patchable field whose `null` is meaningful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// Not part of the request.
    Unset,
    /// Sent as `null`, clearing the stored value.
    Null,
    Set(T),
}

impl<T> Field<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Set(value),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Set(value) => value.serialize(serializer),
            Field::Unset | Field::Null => serializer.serialize_none(),
        }
    }
}

/// Query for the project listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectFilter {
    pub organization_id: OrganizationId,
    pub client_id: Option<ClientId>,
    pub user_id: Option<UserId>,
}

impl ProjectFilter {
    pub fn organization(organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            client_id: None,
            user_id: None,
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("organization_id", self.organization_id.to_string())];
        if let Some(client_id) = self.client_id {
            pairs.push(("client_id", client_id.to_string()));
        }
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        pairs
    }
}

/// Body of `POST /v1/projects`.
///
/// `client_id` is always sent (as `null` when absent); `description` and
/// `status` are omitted unless set so the API applies its own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewProject {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    organization_id: OrganizationId,
    client_id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<ProjectStatus>,
}

impl NewProject {
    /// Start a new project; `name` is trimmed and must not be blank.
    pub fn new(organization_id: OrganizationId, name: &str) -> DomainResult<Self> {
        Ok(Self {
            name: non_blank("project name", name)?.to_string(),
            description: None,
            organization_id,
            client_id: None,
            status: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_client(mut self, client_id: ClientId) -> Self {
        self.client_id = Some(client_id);
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Body of `PATCH /v1/projects/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub description: Field<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

/// Body of `POST /v1/personas`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPersona {
    project_id: ProjectId,
    role: PersonaRole,
    display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<UserId>,
}

impl NewPersona {
    /// `display_name` is trimmed and must not be blank.
    pub fn new(project_id: ProjectId, role: PersonaRole, display_name: &str) -> DomainResult<Self> {
        Ok(Self {
            project_id,
            role,
            display_name: non_blank("display name", display_name)?.to_string(),
            user_id: None,
        })
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

/// Body of `PATCH /v1/personas/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<PersonaRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Body of `POST /v1/requirements`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRequirement {
    pub project_id: ProjectId,
    pub persona_id: PersonaId,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: RequirementType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_id: Option<ClusterId>,
}

/// Body of `PATCH /v1/requirements/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RequirementUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RequirementType>,
    #[serde(skip_serializing_if = "Field::is_unset")]
    pub confidence: Field<f64>,
}

/// Body of `POST /v1/intake/extract`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntakeExtract {
    pub project_id: ProjectId,
    pub persona_id: PersonaId,
    pub text: String,
}

/// Body of `POST /v1/conversations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewConversationTurn {
    pub project_id: ProjectId,
    pub persona_id: PersonaId,
    pub text: String,
}
