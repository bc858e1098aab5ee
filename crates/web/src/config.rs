//! Process configuration, resolved once at startup and passed by reference.

use thiserror::Error;

use aipm_auth::{RoleSet, SessionClaims, SessionUser, parse_role_list};
use aipm_core::OrganizationId;

pub const ENV_API_BASE_URL: &str = "AIPM_API_BASE_URL";
pub const ENV_DEFAULT_ORGANIZATION_ID: &str = "AIPM_DEFAULT_ORGANIZATION_ID";
pub const ENV_DEV_DEFAULT_ROLES: &str = "AIPM_DEV_DEFAULT_ROLES";
pub const ENV_DEV_EMAIL: &str = "AIPM_DEV_EMAIL";
pub const ENV_ENVIRONMENT: &str = "AIPM_ENV";
pub const ENV_GOOGLE_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
pub const ENV_GOOGLE_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";

const DEFAULT_DEV_EMAIL: &str = "dev@example.com";
const FALLBACK_ORGANIZATION_ID: OrganizationId = OrganizationId::new(1);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Google OAuth provider must be configured in production")]
    ProviderRequired,
}

/// Identity provider the sign-in flow is wired to.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthProvider {
    Google {
        client_id: String,
        client_secret: String,
    },
    /// Development fallback: any email signs in with the dev default roles.
    Dev { email: String },
}

impl AuthProvider {
    pub fn id(&self) -> &'static str {
        match self {
            AuthProvider::Google { .. } => "google",
            AuthProvider::Dev { .. } => "dev",
        }
    }
}

impl core::fmt::Debug for AuthProvider {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AuthProvider::Google { client_id, .. } => f
                .debug_struct("Google")
                .field("client_id", client_id)
                .field("client_secret", &"<redacted>")
                .finish(),
            AuthProvider::Dev { email } => f.debug_struct("Dev").field("email", email).finish(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the remote API; empty means same-origin relative paths.
    pub api_base_url: String,
    pub default_organization_id: OrganizationId,
    pub auth: AuthProvider,
    /// Roles granted to dev sign-ins and to sessions without a roles claim.
    pub dev_default_roles: RoleSet,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_base_url = non_empty(ENV_API_BASE_URL).unwrap_or_default();

        let default_organization_id = match non_empty(ENV_DEFAULT_ORGANIZATION_ID) {
            None => FALLBACK_ORGANIZATION_ID,
            Some(raw) => OrganizationId::parse_positive(&raw).unwrap_or_else(|err| {
                tracing::warn!(%err, key = ENV_DEFAULT_ORGANIZATION_ID, "invalid default organization id; using 1");
                FALLBACK_ORGANIZATION_ID
            }),
        };

        let dev_default_roles = non_empty(ENV_DEV_DEFAULT_ROLES)
            .map(|raw| parse_role_list(&raw))
            .unwrap_or_default();

        let production = non_empty(ENV_ENVIRONMENT)
            .is_some_and(|env| env.eq_ignore_ascii_case("production"));

        let auth = match (non_empty(ENV_GOOGLE_CLIENT_ID), non_empty(ENV_GOOGLE_CLIENT_SECRET)) {
            (Some(client_id), Some(client_secret)) => AuthProvider::Google {
                client_id,
                client_secret,
            },
            _ if production => return Err(ConfigError::ProviderRequired),
            _ => {
                tracing::warn!("Google OAuth not configured; using dev sign-in");
                AuthProvider::Dev {
                    email: non_empty(ENV_DEV_EMAIL).unwrap_or_else(|| DEFAULT_DEV_EMAIL.to_string()),
                }
            }
        };

        Ok(Self {
            api_base_url,
            default_organization_id,
            auth,
            dev_default_roles,
        })
    }

    /// Resolve the session user for decoded provider claims.
    pub fn session_user(&self, claims: &SessionClaims) -> SessionUser {
        SessionUser::from_claims(claims, &self.dev_default_roles)
    }

    /// Dev sign-in; always refused when a real provider is configured.
    pub fn dev_sign_in(&self, submitted_email: Option<&str>) -> Option<SessionUser> {
        match &self.auth {
            AuthProvider::Dev { email } => {
                SessionUser::dev_sign_in(submitted_email, email, &self.dev_default_roles)
            }
            AuthProvider::Google { .. } => None,
        }
    }
}
