//! Wire record → view model normalization.
//!
//! Pure functions. Absent or null optional fields get their documented
//! defaults; absent identity fields make the record malformed. A project only
//! needs `id` and `name`.
//!
//! | field | default |
//! |---|---|
//! | project `status` | `active` |
//! | project `description`, `client_id` | none |
//! | persona `role` | `client` |
//! | summary `persona_count`, `requirement_count` | 0 |
//! | requirement `type` | `feature` |
//! | requirement `confidence`, `cluster_id` | none |
//! | detail `requirement_counts.total` | 0 |
//! | detail `requirement_counts.by_type` | empty |

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};

use aipm_core::{
    ConversationTurn, Persona, PersonaSummary, ProjectBase, ProjectDetail, ProjectSummary,
    Requirement, RequirementCounts, RequirementType,
};

use crate::error::{ClientError, ClientResult};
use crate::wire::{
    ConversationTurnRecord, PersonaRecord, ProjectRecord, RequirementCountsRecord,
    RequirementRecord,
};

fn required<T>(value: Option<T>, entity: &'static str, field: &'static str) -> ClientResult<T> {
    value.ok_or_else(|| ClientError::malformed(entity, field))
}

/// Parse an API timestamp.
///
/// Accepts RFC 3339, and naive ISO-8601 date-times which are taken as UTC.
fn timestamp(
    raw: Option<&str>,
    entity: &'static str,
    field: &'static str,
) -> ClientResult<DateTime<Utc>> {
    parse_timestamp(required(raw, entity, field)?, entity, field)
}

/// Like [`timestamp`], but absence is fine; a present value must still parse.
fn optional_timestamp(
    raw: Option<&str>,
    entity: &'static str,
    field: &'static str,
) -> ClientResult<Option<DateTime<Utc>>> {
    raw.map(|raw| parse_timestamp(raw, entity, field)).transpose()
}

fn parse_timestamp(raw: &str, entity: &'static str, field: &'static str) -> ClientResult<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ClientError::malformed(entity, field))
}

pub fn normalize_project_base(record: &ProjectRecord) -> ClientResult<ProjectBase> {
    const ENTITY: &str = "project";

    Ok(ProjectBase {
        id: required(record.id, ENTITY, "id")?,
        name: required(record.name.clone(), ENTITY, "name")?,
        description: record.description.clone(),
        status: record.status.unwrap_or_default(),
        organization_id: record.organization_id,
        client_id: record.client_id,
        created_at: optional_timestamp(record.created_at.as_deref(), ENTITY, "created_at")?,
    })
}

pub fn normalize_project_summary(record: &ProjectRecord) -> ClientResult<ProjectSummary> {
    Ok(ProjectSummary {
        base: normalize_project_base(record)?,
        persona_count: record.persona_count.unwrap_or(0),
        requirement_count: record.requirement_count.unwrap_or(0),
    })
}

pub fn normalize_project_detail(record: &ProjectRecord) -> ClientResult<ProjectDetail> {
    let personas = record
        .personas
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(normalize_persona_summary)
        .collect::<ClientResult<Vec<_>>>()?;

    let requirement_counts = match &record.requirement_counts {
        Some(counts) => normalize_requirement_counts(counts)?,
        None => RequirementCounts::default(),
    };

    Ok(ProjectDetail {
        base: normalize_project_base(record)?,
        personas,
        requirement_counts,
    })
}

pub fn normalize_requirement_counts(
    record: &RequirementCountsRecord,
) -> ClientResult<RequirementCounts> {
    let mut by_type = BTreeMap::new();
    for (label, count) in record.by_type.iter().flatten() {
        let kind: RequirementType = label
            .parse()
            .map_err(|_| ClientError::malformed("requirement_counts", "by_type"))?;
        by_type.insert(kind, *count);
    }

    Ok(RequirementCounts {
        total: record.total.unwrap_or(0),
        by_type,
    })
}

pub fn normalize_persona_summary(record: &PersonaRecord) -> ClientResult<PersonaSummary> {
    const ENTITY: &str = "persona";

    let display_name = record
        .display_name
        .clone()
        .or_else(|| record.display_name_camel.clone());

    Ok(PersonaSummary {
        id: required(record.id, ENTITY, "id")?,
        role: record.role.unwrap_or_default(),
        display_name: required(display_name, ENTITY, "display_name")?,
    })
}

pub fn normalize_persona(record: &PersonaRecord) -> ClientResult<Persona> {
    const ENTITY: &str = "persona";

    Ok(Persona {
        summary: normalize_persona_summary(record)?,
        project_id: required(record.project_id, ENTITY, "project_id")?,
        user_id: record.user_id,
        created_at: timestamp(record.created_at.as_deref(), ENTITY, "created_at")?,
        updated_at: timestamp(record.updated_at.as_deref(), ENTITY, "updated_at")?,
    })
}

pub fn normalize_requirement(record: &RequirementRecord) -> ClientResult<Requirement> {
    const ENTITY: &str = "requirement";

    Ok(Requirement {
        id: required(record.id, ENTITY, "id")?,
        project_id: required(record.project_id, ENTITY, "project_id")?,
        persona_id: required(record.persona_id, ENTITY, "persona_id")?,
        text: required(record.text.clone(), ENTITY, "text")?,
        kind: record.kind.unwrap_or_default(),
        confidence: record.confidence,
        cluster_id: record.cluster_id,
        created_at: timestamp(record.created_at.as_deref(), ENTITY, "created_at")?,
        updated_at: timestamp(record.updated_at.as_deref(), ENTITY, "updated_at")?,
    })
}

pub fn normalize_conversation_turn(
    record: &ConversationTurnRecord,
) -> ClientResult<ConversationTurn> {
    const ENTITY: &str = "conversation_turn";

    Ok(ConversationTurn {
        id: required(record.id, ENTITY, "id")?,
        project_id: required(record.project_id, ENTITY, "project_id")?,
        persona_id: required(record.persona_id, ENTITY, "persona_id")?,
        text: required(record.text.clone(), ENTITY, "text")?,
        embedding: record.embedding.clone().unwrap_or_default(),
        created_at: timestamp(record.created_at.as_deref(), ENTITY, "created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use aipm_core::{ClientId, OrganizationId, PersonaRole, ProjectId, ProjectStatus};
    use chrono::TimeZone;
    use serde_json::json;

    fn project(value: serde_json::Value) -> ProjectRecord {
        serde_json::from_value(value).unwrap()
    }

    fn base_project_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "X",
            "status": null,
            "client_id": null,
            "organization_id": 4,
            "created_at": "2024-05-01T09:30:00Z"
        })
    }

    #[test]
    fn null_status_and_client_take_defaults() {
        let base = normalize_project_base(&project(base_project_json())).unwrap();
        assert_eq!(base.id, ProjectId::new(1));
        assert_eq!(base.name, "X");
        assert_eq!(base.status, ProjectStatus::Active);
        assert_eq!(base.client_id, None);
        assert_eq!(base.description, None);
    }

    #[test]
    fn bare_project_record_takes_defaults() {
        let record = project(json!({ "id": 1, "name": "X", "status": null, "client_id": null }));
        let base = normalize_project_base(&record).unwrap();
        assert_eq!(base.id, ProjectId::new(1));
        assert_eq!(base.name, "X");
        assert_eq!(base.status, ProjectStatus::Active);
        assert_eq!(base.client_id, None);
        assert_eq!(base.organization_id, None);
        assert_eq!(base.created_at, None);
    }

    #[test]
    fn present_fields_are_kept() {
        let mut value = base_project_json();
        value["status"] = json!("paused");
        value["client_id"] = json!(12);
        value["description"] = json!("Pilot");
        let base = normalize_project_base(&project(value)).unwrap();
        assert_eq!(base.status, ProjectStatus::Paused);
        assert_eq!(base.client_id, Some(ClientId::new(12)));
        assert_eq!(base.description.as_deref(), Some("Pilot"));
        assert_eq!(base.organization_id, Some(OrganizationId::new(4)));
    }

    #[test]
    fn absent_counts_default_to_zero() {
        let mut value = base_project_json();
        value["requirement_count"] = json!(6);
        let summary = normalize_project_summary(&project(value)).unwrap();
        assert_eq!(summary.persona_count, 0);
        assert_eq!(summary.requirement_count, 6);
    }

    #[test]
    fn detail_without_personas_or_counts_is_empty() {
        let detail = normalize_project_detail(&project(base_project_json())).unwrap();
        assert!(detail.personas.is_empty());
        assert_eq!(detail.requirement_counts.total, 0);
        assert!(detail.requirement_counts.by_type.is_empty());
    }

    #[test]
    fn detail_embeds_persona_summaries_and_counts() {
        let mut value = base_project_json();
        value["personas"] = json!([
            { "id": "6f1c2b1e-6d8a-4a53-9f0a-3f1f1b0c2d11", "display_name": "Ops lead", "role": "lead" },
            { "id": "0d5f0a43-2c1e-4d3b-8a6f-1b2c3d4e5f60", "displayName": "Buyer" }
        ]);
        value["requirement_counts"] = json!({ "total": 3, "by_type": { "bug": 1, "feature": 2 } });

        let detail = normalize_project_detail(&project(value)).unwrap();
        assert_eq!(detail.personas.len(), 2);
        assert_eq!(detail.personas[0].role, PersonaRole::Lead);
        assert_eq!(detail.personas[1].role, PersonaRole::Client);
        assert_eq!(detail.personas[1].display_name, "Buyer");
        assert_eq!(detail.requirement_counts.total, 3);
        assert_eq!(detail.requirement_counts.count(RequirementType::Feature), 2);
    }

    #[test]
    fn unknown_requirement_type_in_counts_is_malformed() {
        let record = RequirementCountsRecord {
            total: Some(1),
            by_type: Some(BTreeMap::from([("epic".to_string(), 1)])),
        };
        assert!(matches!(
            normalize_requirement_counts(&record),
            Err(ClientError::MalformedRecord { field: "by_type", .. })
        ));
    }

    #[test]
    fn missing_identity_is_malformed() {
        let mut value = base_project_json();
        value.as_object_mut().unwrap().remove("id");
        let err = normalize_project_base(&project(value)).unwrap_err();
        assert!(matches!(
            err,
            ClientError::MalformedRecord { entity: "project", field: "id" }
        ));
    }

    #[test]
    fn naive_timestamps_are_read_as_utc() {
        let mut value = base_project_json();
        value["created_at"] = json!("2024-05-01T09:30:00.250000");
        let base = normalize_project_base(&project(value)).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
            + chrono::Duration::milliseconds(250);
        assert_eq!(base.created_at, Some(expected));
    }

    #[test]
    fn garbage_timestamp_is_malformed() {
        let mut value = base_project_json();
        value["created_at"] = json!("yesterday");
        assert!(normalize_project_base(&project(value)).is_err());
    }

    #[test]
    fn requirement_defaults() {
        let record: RequirementRecord = serde_json::from_value(json!({
            "id": "9b2f4c8e-1a2b-4c3d-8e9f-0a1b2c3d4e5f",
            "project_id": 1,
            "persona_id": "6f1c2b1e-6d8a-4a53-9f0a-3f1f1b0c2d11",
            "text": "Export invoices",
            "type": null,
            "created_at": "2024-05-01T09:30:00Z",
            "updated_at": "2024-05-01T09:30:00Z"
        }))
        .unwrap();

        let requirement = normalize_requirement(&record).unwrap();
        assert_eq!(requirement.kind, RequirementType::Feature);
        assert_eq!(requirement.confidence, None);
        assert_eq!(requirement.cluster_id, None);
    }

    #[test]
    fn full_persona_requires_timestamps() {
        let record: PersonaRecord = serde_json::from_value(json!({
            "id": "6f1c2b1e-6d8a-4a53-9f0a-3f1f1b0c2d11",
            "display_name": "Ops lead",
            "project_id": 1
        }))
        .unwrap();
        assert!(normalize_persona_summary(&record).is_ok());
        assert!(matches!(
            normalize_persona(&record),
            Err(ClientError::MalformedRecord { field: "created_at", .. })
        ));
    }

    #[test]
    fn conversation_turn_embedding_defaults_to_empty() {
        let record: ConversationTurnRecord = serde_json::from_value(json!({
            "id": "1c9e7a52-7b7e-4f0e-9d55-2a9b8c7d6e5f",
            "project_id": 2,
            "persona_id": "6f1c2b1e-6d8a-4a53-9f0a-3f1f1b0c2d11",
            "text": "We need SSO",
            "created_at": "2024-05-01T09:30:00Z"
        }))
        .unwrap();
        let turn = normalize_conversation_turn(&record).unwrap();
        assert!(turn.embedding.is_empty());
        assert_eq!(turn.text, "We need SSO");
    }
}
