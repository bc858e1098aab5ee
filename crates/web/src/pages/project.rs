use serde::Serialize;

use aipm_auth::{Capability, SessionUser};
use aipm_client::ApiClient;
use aipm_core::{ProjectDetail, ProjectId, Requirement};

use super::session_roles;
use crate::PageError;

/// A project page together with whether the user may change it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub project: ProjectDetail,
    pub can_manage: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakePage {
    pub project: ProjectDetail,
    pub requirements: Vec<Requirement>,
    pub can_extract: bool,
}

/// Resolve the `{id}` route segment to a project.
///
/// Anything but a positive integer, or a 404 from the API, is not-found.
async fn fetch_project(client: &ApiClient, raw_id: &str) -> Result<ProjectDetail, PageError> {
    let id = ProjectId::parse_positive(raw_id).map_err(|_| PageError::NotFound)?;
    client.get_project(id).await.map_err(|err| {
        tracing::warn!(%err, project_id = %id, "failed to load project");
        PageError::from_lookup(err)
    })
}

pub async fn load_project_settings(
    client: &ApiClient,
    session: Option<&SessionUser>,
    raw_id: &str,
) -> Result<ProjectPage, PageError> {
    let project = fetch_project(client, raw_id).await?;
    Ok(ProjectPage {
        project,
        can_manage: Capability::ManageProject.allows(&session_roles(session)),
    })
}

pub async fn load_project_personas(
    client: &ApiClient,
    session: Option<&SessionUser>,
    raw_id: &str,
) -> Result<ProjectPage, PageError> {
    let project = fetch_project(client, raw_id).await?;
    Ok(ProjectPage {
        project,
        can_manage: Capability::ManagePersonas.allows(&session_roles(session)),
    })
}

/// Load the intake workspace. Personas come with the project detail; a failed
/// requirement listing degrades to an empty backlog.
pub async fn load_project_intake(
    client: &ApiClient,
    session: Option<&SessionUser>,
    raw_id: &str,
) -> Result<IntakePage, PageError> {
    let project = fetch_project(client, raw_id).await?;
    let requirements = client
        .list_requirements(project.id(), None)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(%err, project_id = %project.id(), "failed to load requirements");
            Vec::new()
        });

    Ok(IntakePage {
        project,
        requirements,
        can_extract: Capability::ExtractRequirements.allows(&session_roles(session)),
    })
}
