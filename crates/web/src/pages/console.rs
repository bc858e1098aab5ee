use serde::Serialize;

use aipm_auth::{Capability, RoleSet, SessionUser};

use crate::{AppConfig, AuthProvider, PageError};

pub const SIGN_IN_REDIRECT: &str = "/api/auth/signin?callbackUrl=/console";
pub const UNAUTHORIZED_REDIRECT: &str = "/?unauthorized=1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsoleView {
    pub greeting: String,
    pub email: String,
    pub roles: RoleSet,
    pub provider_id: &'static str,
    /// Shown as a hint while dev sign-in is active.
    pub dev_email: Option<String>,
}

/// Gate the admin/lead console.
///
/// Anonymous visitors go to sign-in; signed-in users without the role go home
/// with the unauthorized flag.
pub fn console_gate(config: &AppConfig, session: Option<&SessionUser>) -> Result<ConsoleView, PageError> {
    let Some(user) = session else {
        return Err(PageError::redirect(SIGN_IN_REDIRECT));
    };

    let roles = Capability::OpenConsole
        .require(&user.roles)
        .map_err(|_| PageError::redirect(UNAUTHORIZED_REDIRECT))?;

    let dev_email = match &config.auth {
        AuthProvider::Dev { email } => Some(email.clone()),
        AuthProvider::Google { .. } => None,
    };

    Ok(ConsoleView {
        greeting: format!("Welcome back, {}", user.display_name()),
        email: user.email.clone(),
        roles,
        provider_id: config.auth.id(),
        dev_email,
    })
}
