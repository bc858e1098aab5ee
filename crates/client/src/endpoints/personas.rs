use reqwest::Method;

use aipm_core::{Persona, PersonaId, ProjectId};

use crate::normalize::normalize_persona;
use crate::payload::{NewPersona, PersonaUpdate};
use crate::wire::PersonaRecord;
use crate::{ApiClient, ClientResult};

fn persona_path(id: PersonaId) -> String {
    format!("/v1/personas/{id}")
}

impl ApiClient {
    pub async fn list_personas(&self, project_id: ProjectId) -> ClientResult<Vec<Persona>> {
        let query = [("project_id", project_id.to_string())];
        let records: Vec<PersonaRecord> = self.get("/v1/personas", &query).await?;
        records.iter().map(normalize_persona).collect()
    }

    pub async fn get_persona(&self, id: PersonaId) -> ClientResult<Persona> {
        let record: PersonaRecord = self.get(&persona_path(id), &[]).await?;
        normalize_persona(&record)
    }

    pub async fn create_persona(&self, persona: &NewPersona) -> ClientResult<Persona> {
        let record: PersonaRecord = self.send_json(Method::POST, "/v1/personas", persona).await?;
        normalize_persona(&record)
    }

    pub async fn update_persona(&self, id: PersonaId, update: &PersonaUpdate) -> ClientResult<Persona> {
        let record: PersonaRecord = self.send_json(Method::PATCH, &persona_path(id), update).await?;
        normalize_persona(&record)
    }

    pub async fn delete_persona(&self, id: PersonaId) -> ClientResult<()> {
        self.delete(&persona_path(id)).await
    }
}
