use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application role used for RBAC.
///
/// The set is closed: anything else coming from an identity provider is
/// discarded during claim parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Lead,
    Client,
}

/// Role assumed by an authenticated principal that carries no roles at all.
pub const DEFAULT_ROLE: Role = Role::Client;

impl Role {
    pub const ALL: &'static [Role] = &[Role::Admin, Role::Lead, Role::Client];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Lead => "lead",
            Role::Client => "client",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownRole(wanted.to_string()))
    }
}

/// A normalized, de-duplicated and never-empty set of roles.
///
/// The only way to obtain one is through [`crate::normalize_roles`] (or the
/// claim parsers built on it), so an empty input has already been replaced by
/// [`DEFAULT_ROLE`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub(crate) fn from_iter_normalized<I>(roles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Borrow<Role>,
    {
        let set: BTreeSet<Role> = roles.into_iter().map(|r| *r.borrow()).collect();
        if set.is_empty() {
            Self(BTreeSet::from([DEFAULT_ROLE]))
        } else {
            Self(set)
        }
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Every constructor substitutes [`DEFAULT_ROLE`] for an empty input, so
    /// this is `false` for any value that exists.
    pub fn is_empty(&self) -> bool {
        debug_assert!(!self.0.is_empty(), "role set lost its default role");
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Role> + '_ {
        self.0.iter()
    }

    pub fn to_vec(&self) -> Vec<Role> {
        self.0.iter().copied().collect()
    }
}

impl Default for RoleSet {
    fn default() -> Self {
        Self(BTreeSet::from([DEFAULT_ROLE]))
    }
}

impl<'a> IntoIterator for &'a RoleSet {
    type Item = &'a Role;
    type IntoIter = std::collections::btree_set::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl core::fmt::Display for RoleSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for role in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(role.as_str())?;
            first = false;
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for RoleSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(crate::roles_from_claim(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_trimmed_and_case_insensitive() {
        assert_eq!(" Admin ".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("LEAD".parse::<Role>().unwrap(), Role::Lead);
        assert_eq!("owner".parse::<Role>(), Err(UnknownRole("owner".to_string())));
    }

    #[test]
    fn role_set_displays_comma_separated() {
        let set = RoleSet::from_iter_normalized([Role::Lead, Role::Admin]);
        assert_eq!(set.to_string(), "admin, lead");
    }

    #[test]
    fn deserialized_empty_role_set_falls_back_to_default() {
        let set: RoleSet = serde_json::from_str("[]").unwrap();
        assert_eq!(set.to_vec(), vec![DEFAULT_ROLE]);
        assert!(!set.is_empty());
    }

    #[test]
    fn deserialized_role_set_reads_like_a_claim() {
        let set: RoleSet = serde_json::from_str(r#"[" Admin ", "LEAD", "owner"]"#).unwrap();
        assert_eq!(set.to_vec(), vec![Role::Admin, Role::Lead]);

        let set: RoleSet = serde_json::from_str(r#""lead, client""#).unwrap();
        assert_eq!(set.to_vec(), vec![Role::Lead, Role::Client]);

        let set: RoleSet = serde_json::from_str(r#"["owner"]"#).unwrap();
        assert_eq!(set.to_vec(), vec![DEFAULT_ROLE]);
    }

    #[test]
    fn role_sets_are_never_empty() {
        assert!(!RoleSet::default().is_empty());
        assert!(!RoleSet::from_iter_normalized(Vec::<Role>::new()).is_empty());
        assert_eq!(RoleSet::from_iter_normalized(Vec::<Role>::new()).len(), 1);
    }
}
