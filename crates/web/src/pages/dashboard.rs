use serde::Serialize;

use aipm_auth::{Capability, SessionUser};
use aipm_client::{ApiClient, ProjectFilter};
use aipm_core::{ClientId, OrganizationId, ProjectSummary};

use super::session_roles;
use crate::AppConfig;

/// Query parameters of the projects dashboard.
///
/// Both camelCase and snake_case keys are accepted; when a key repeats, the
/// first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardQuery {
    pub organization_id: Option<String>,
    pub client_id: Option<String>,
}

impl DashboardQuery {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key {
                "organizationId" | "organization_id" => &mut query.organization_id,
                "clientId" | "client_id" => &mut query.client_id,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsDashboard {
    pub organization_id: OrganizationId,
    pub client_id: Option<ClientId>,
    pub projects: Vec<ProjectSummary>,
    pub can_open_console: bool,
    pub can_enter_intake: bool,
}

/// Load the projects dashboard.
///
/// A failed listing is logged and shown as an empty list rather than failing
/// the page.
pub async fn load_projects_dashboard(
    client: &ApiClient,
    config: &AppConfig,
    session: Option<&SessionUser>,
    query: &DashboardQuery,
) -> ProjectsDashboard {
    let organization_id = query
        .organization_id
        .as_deref()
        .and_then(|raw| OrganizationId::parse_positive(raw).ok())
        .unwrap_or(config.default_organization_id);
    let client_id = query
        .client_id
        .as_deref()
        .and_then(|raw| ClientId::parse_positive(raw).ok());

    let filter = ProjectFilter {
        client_id,
        ..ProjectFilter::organization(organization_id)
    };
    let projects = client.list_projects(&filter).await.unwrap_or_else(|err| {
        tracing::warn!(%err, %organization_id, "failed to load projects");
        Vec::new()
    });

    let roles = session_roles(session);
    ProjectsDashboard {
        organization_id,
        client_id,
        projects,
        can_open_console: Capability::OpenConsole.allows(&roles),
        can_enter_intake: Capability::EnterIntake.allows(&roles),
    }
}
