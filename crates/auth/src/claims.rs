use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Role, RoleSet, normalize_roles};

/// Claims the identity provider attaches to a signed-in session.
///
/// Signature verification and cookie transport happen upstream; this is the
/// decoded payload only. `roles` is kept as raw JSON because providers send
/// either an array of names or a single comma-separated string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub sub: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub roles: Option<Value>,
}

/// Parse a comma-separated role list such as `"admin, Lead"`.
///
/// Unknown names are dropped; if nothing survives the result is `{client}`.
pub fn parse_role_list(raw: &str) -> RoleSet {
    normalize_roles(raw.split(',').filter_map(|name| name.parse::<Role>().ok()))
}

/// Parse a roles claim that is either an array of names or a comma string.
///
/// Non-string array entries and any other JSON type are ignored the same way
/// unknown names are.
pub fn roles_from_claim(value: &Value) -> RoleSet {
    match value {
        Value::Array(items) => normalize_roles(
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|name| name.parse::<Role>().ok()),
        ),
        Value::String(raw) => parse_role_list(raw),
        _ => RoleSet::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn comma_list_is_trimmed_lowercased_and_filtered() {
        let roles = parse_role_list(" Admin ,lead, owner,,");
        assert_eq!(roles.to_vec(), vec![Role::Admin, Role::Lead]);
    }

    #[test]
    fn unknown_only_list_falls_back_to_client() {
        assert_eq!(parse_role_list("owner,root").to_vec(), vec![Role::Client]);
        assert_eq!(parse_role_list("").to_vec(), vec![Role::Client]);
    }

    #[test]
    fn array_claim_skips_non_strings() {
        let roles = roles_from_claim(&json!(["lead", 7, null, "LEAD", "client"]));
        assert_eq!(roles.to_vec(), vec![Role::Lead, Role::Client]);
    }

    #[test]
    fn string_claim_is_split() {
        assert_eq!(roles_from_claim(&json!("admin,client")).to_vec(), vec![Role::Admin, Role::Client]);
    }

    #[test]
    fn other_claim_shapes_yield_default() {
        assert_eq!(roles_from_claim(&json!(42)).to_vec(), vec![Role::Client]);
        assert_eq!(roles_from_claim(&json!({"admin": true})).to_vec(), vec![Role::Client]);
    }

    #[test]
    fn claims_deserialize_with_missing_fields() {
        let claims: SessionClaims = serde_json::from_value(json!({ "email": "a@b.c" })).unwrap();
        assert_eq!(claims.email.as_deref(), Some("a@b.c"));
        assert!(claims.sub.is_none());
        assert!(claims.roles.is_none());
    }
}
