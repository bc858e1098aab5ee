use serde::Serialize;

use crate::{Capability, RoleSet, SessionClaims, roles_from_claim};

/// The signed-in user as seen by page loaders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub roles: RoleSet,
}

impl SessionUser {
    /// Resolve a session user from decoded provider claims.
    ///
    /// The id is the claim subject, falling back to the email. When the token
    /// carries no roles claim, `fallback_roles` (the configured dev defaults)
    /// apply.
    pub fn from_claims(claims: &SessionClaims, fallback_roles: &RoleSet) -> Self {
        let email = claims.email.clone().unwrap_or_default();
        let id = claims
            .sub
            .clone()
            .filter(|sub| !sub.is_empty())
            .unwrap_or_else(|| email.clone());
        let roles = match &claims.roles {
            Some(value) => roles_from_claim(value),
            None => fallback_roles.clone(),
        };

        Self {
            id,
            email,
            name: claims.name.clone(),
            roles,
        }
    }

    /// Development sign-in: accept any email and grant the configured roles.
    ///
    /// The submitted email (or `default_email` when none was submitted) is
    /// trimmed and lowercased; a blank result refuses the sign-in.
    pub fn dev_sign_in(
        submitted_email: Option<&str>,
        default_email: &str,
        default_roles: &RoleSet,
    ) -> Option<Self> {
        let email = submitted_email.unwrap_or(default_email).trim().to_lowercase();
        if email.is_empty() {
            return None;
        }

        Some(Self {
            id: email.clone(),
            email,
            name: None,
            roles: default_roles.clone(),
        })
    }

    pub fn can(&self, capability: Capability) -> bool {
        capability.allows(&self.roles)
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Role, normalize_roles, parse_role_list};
    use serde_json::json;

    #[test]
    fn subject_falls_back_to_email() {
        let claims = SessionClaims {
            email: Some("lead@example.com".to_string()),
            roles: Some(json!(["lead"])),
            ..SessionClaims::default()
        };
        let user = SessionUser::from_claims(&claims, &RoleSet::default());
        assert_eq!(user.id, "lead@example.com");
        assert_eq!(user.roles.to_vec(), vec![Role::Lead]);
    }

    #[test]
    fn missing_roles_claim_uses_fallback_roles() {
        let claims = SessionClaims {
            sub: Some("u-1".to_string()),
            ..SessionClaims::default()
        };
        let fallback = parse_role_list("admin");
        let user = SessionUser::from_claims(&claims, &fallback);
        assert_eq!(user.id, "u-1");
        assert!(user.can(Capability::OpenConsole));
    }

    #[test]
    fn dev_sign_in_normalizes_email() {
        let roles = normalize_roles([Role::Lead]);
        let user = SessionUser::dev_sign_in(Some("  Dev@Example.COM "), "x@y.z", &roles).unwrap();
        assert_eq!(user.email, "dev@example.com");
        assert_eq!(user.id, "dev@example.com");
        assert_eq!(user.roles, roles);
    }

    #[test]
    fn dev_sign_in_uses_default_email_and_rejects_blank() {
        let roles = RoleSet::default();
        let user = SessionUser::dev_sign_in(None, "dev@example.com", &roles).unwrap();
        assert_eq!(user.display_name(), "dev@example.com");
        assert!(SessionUser::dev_sign_in(Some("   "), "dev@example.com", &roles).is_none());
    }
}
