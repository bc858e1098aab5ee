//! Conversation turns recorded for a persona.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{ConversationTurnId, PersonaId, ProjectId};

/// One message a persona contributed to a project's intake conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationTurn {
    pub id: ConversationTurnId,
    pub project_id: ProjectId,
    pub persona_id: PersonaId,
    pub text: String,
    pub embedding: Vec<f64>,
    pub created_at: DateTime<Utc>,
}
