//! Page loaders: fetch what a page shows and decide what the user may do.
//!
//! Rendering is left to the caller; a loader returns either view data or a
//! [`crate::PageError`] telling it to redirect or show not-found.

pub mod console;
pub mod dashboard;
pub mod health;
pub mod project;

use aipm_auth::{RoleSet, SessionUser};

/// Roles of the signed-in user, or `{client}` for anonymous visitors.
fn session_roles(session: Option<&SessionUser>) -> RoleSet {
    session.map(|user| user.roles.clone()).unwrap_or_default()
}
