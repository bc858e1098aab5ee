use serde::Serialize;

use crate::{AuthzError, Role, RoleSet, ensure_required_role, has_required_role};

/// Something a page lets the user do, gated by role.
///
/// Mapping capabilities to roles lives here so pages never spell out role
/// lists themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Enter the admin/lead console.
    OpenConsole,
    /// Edit or delete a project.
    ManageProject,
    /// Create, edit or delete a project's personas.
    ManagePersonas,
    /// Submit intake text for requirement extraction.
    ExtractRequirements,
    /// Show the intake entry point on the dashboard.
    EnterIntake,
}

impl Capability {
    /// Roles that grant this capability; holding any one is enough.
    pub fn required_roles(self) -> &'static [Role] {
        match self {
            Capability::OpenConsole | Capability::ManageProject | Capability::ManagePersonas => {
                &[Role::Admin, Role::Lead]
            }
            Capability::ExtractRequirements => &[Role::Client, Role::Admin, Role::Lead],
            Capability::EnterIntake => &[Role::Client],
        }
    }

    pub fn allows(self, roles: &RoleSet) -> bool {
        has_required_role(roles, self.required_roles())
    }

    pub fn require(self, roles: &RoleSet) -> Result<RoleSet, AuthzError> {
        ensure_required_role(roles, self.required_roles())
    }
}
