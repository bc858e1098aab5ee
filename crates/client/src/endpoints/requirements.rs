use reqwest::Method;

use aipm_core::{PersonaId, ProjectId, Requirement, RequirementId};

use crate::normalize::normalize_requirement;
use crate::payload::{NewRequirement, RequirementUpdate};
use crate::wire::RequirementRecord;
use crate::{ApiClient, ClientResult};

fn requirement_path(id: RequirementId) -> String {
    format!("/v1/requirements/{id}")
}

impl ApiClient {
    /// List a project's requirements, optionally only those authored by one
    /// persona.
    pub async fn list_requirements(
        &self,
        project_id: ProjectId,
        persona_id: Option<PersonaId>,
    ) -> ClientResult<Vec<Requirement>> {
        let mut query = vec![("project_id", project_id.to_string())];
        if let Some(persona_id) = persona_id {
            query.push(("persona_id", persona_id.to_string()));
        }
        let records: Vec<RequirementRecord> = self.get("/v1/requirements", &query).await?;
        records.iter().map(normalize_requirement).collect()
    }

    pub async fn create_requirement(&self, requirement: &NewRequirement) -> ClientResult<Requirement> {
        let record: RequirementRecord =
            self.send_json(Method::POST, "/v1/requirements", requirement).await?;
        normalize_requirement(&record)
    }

    pub async fn update_requirement(
        &self,
        id: RequirementId,
        update: &RequirementUpdate,
    ) -> ClientResult<Requirement> {
        let record: RequirementRecord =
            self.send_json(Method::PATCH, &requirement_path(id), update).await?;
        normalize_requirement(&record)
    }

    pub async fn delete_requirement(&self, id: RequirementId) -> ClientResult<()> {
        self.delete(&requirement_path(id)).await
    }
}
