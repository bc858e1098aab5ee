use std::borrow::Borrow;

use thiserror::Error;

use crate::{Role, RoleSet};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing required role")]
    Forbidden,
}

/// Roles that satisfy an access requirement.
///
/// Holding **any one** of them grants access. An empty requirement can never
/// be satisfied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredRoles(Vec<Role>);

impl RequiredRoles {
    pub fn as_slice(&self) -> &[Role] {
        &self.0
    }
}

impl From<Role> for RequiredRoles {
    fn from(role: Role) -> Self {
        Self(vec![role])
    }
}

impl<const N: usize> From<[Role; N]> for RequiredRoles {
    fn from(roles: [Role; N]) -> Self {
        Self(roles.to_vec())
    }
}

impl From<&[Role]> for RequiredRoles {
    fn from(roles: &[Role]) -> Self {
        Self(roles.to_vec())
    }
}

impl From<Vec<Role>> for RequiredRoles {
    fn from(roles: Vec<Role>) -> Self {
        Self(roles)
    }
}

/// Normalize a role list into a [`RoleSet`].
///
/// Duplicates collapse. An empty input (the caller's stand-in for "no roles
/// attached") yields `{client}`.
pub fn normalize_roles<I>(roles: I) -> RoleSet
where
    I: IntoIterator,
    I::Item: Borrow<Role>,
{
    RoleSet::from_iter_normalized(roles)
}

/// Whether `roles` holds at least one of the `required` roles.
///
/// - No IO
/// - No panics
/// - `roles` is normalized first, so an empty list behaves as `{client}`
pub fn has_required_role<I>(roles: I, required: impl Into<RequiredRoles>) -> bool
where
    I: IntoIterator,
    I::Item: Borrow<Role>,
{
    let normalized = normalize_roles(roles);
    required
        .into()
        .as_slice()
        .iter()
        .any(|role| normalized.contains(*role))
}

/// Like [`has_required_role`], but denial is an error.
///
/// On success the normalized role set is returned so callers can keep using
/// it.
pub fn ensure_required_role<I>(
    roles: I,
    required: impl Into<RequiredRoles>,
) -> Result<RoleSet, AuthzError>
where
    I: IntoIterator,
    I::Item: Borrow<Role>,
{
    let normalized = normalize_roles(roles);
    let granted = required
        .into()
        .as_slice()
        .iter()
        .any(|role| normalized.contains(*role));

    if granted {
        Ok(normalized)
    } else {
        Err(AuthzError::Forbidden)
    }
}
