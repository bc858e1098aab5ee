use reqwest::Method;

use aipm_core::{ConversationTurn, PersonaId, ProjectId};

use crate::normalize::normalize_conversation_turn;
use crate::payload::NewConversationTurn;
use crate::wire::ConversationTurnRecord;
use crate::{ApiClient, ClientResult};

impl ApiClient {
    pub async fn list_conversation_turns(
        &self,
        project_id: ProjectId,
        persona_id: Option<PersonaId>,
    ) -> ClientResult<Vec<ConversationTurn>> {
        let mut query = vec![("project_id", project_id.to_string())];
        if let Some(persona_id) = persona_id {
            query.push(("persona_id", persona_id.to_string()));
        }
        let records: Vec<ConversationTurnRecord> = self.get("/v1/conversations", &query).await?;
        records.iter().map(normalize_conversation_turn).collect()
    }

    pub async fn record_conversation_turn(
        &self,
        turn: &NewConversationTurn,
    ) -> ClientResult<ConversationTurn> {
        let record: ConversationTurnRecord =
            self.send_json(Method::POST, "/v1/conversations", turn).await?;
        normalize_conversation_turn(&record)
    }
}
