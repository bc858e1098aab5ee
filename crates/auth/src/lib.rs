//! `aipm-auth` — role-based access control for the web front end.
//!
//! Pure functions only: no HTTP, no storage, no session transport. Callers hand
//! in whatever role list the identity provider produced and get a decision.

pub mod authorize;
pub mod capability;
pub mod claims;
pub mod principal;
pub mod roles;

pub use authorize::{
    AuthzError, RequiredRoles, ensure_required_role, has_required_role, normalize_roles,
};
pub use capability::Capability;
pub use claims::{SessionClaims, parse_role_list, roles_from_claim};
pub use principal::SessionUser;
pub use roles::{DEFAULT_ROLE, Role, RoleSet, UnknownRole};
