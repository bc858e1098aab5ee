use reqwest::Method;

use aipm_core::{ProjectDetail, ProjectId, ProjectSummary};

use crate::normalize::{normalize_project_detail, normalize_project_summary};
use crate::payload::{NewProject, ProjectFilter, ProjectUpdate};
use crate::wire::ProjectRecord;
use crate::{ApiClient, ClientResult};

fn project_path(id: ProjectId) -> String {
    format!("/v1/projects/{id}")
}

impl ApiClient {
    /// List project summaries, filtered server-side.
    pub async fn list_projects(&self, filter: &ProjectFilter) -> ClientResult<Vec<ProjectSummary>> {
        let records: Vec<ProjectRecord> = self.get("/v1/projects", &filter.query_pairs()).await?;
        records.iter().map(normalize_project_summary).collect()
    }

    pub async fn create_project(&self, project: &NewProject) -> ClientResult<ProjectDetail> {
        let record: ProjectRecord = self.send_json(Method::POST, "/v1/projects", project).await?;
        normalize_project_detail(&record)
    }

    /// Fetch one project. An unknown id surfaces as `RequestFailed` with 404.
    pub async fn get_project(&self, id: ProjectId) -> ClientResult<ProjectDetail> {
        let record: ProjectRecord = self.get(&project_path(id), &[]).await?;
        normalize_project_detail(&record)
    }

    pub async fn update_project(
        &self,
        id: ProjectId,
        update: &ProjectUpdate,
    ) -> ClientResult<ProjectDetail> {
        let record: ProjectRecord = self.send_json(Method::PATCH, &project_path(id), update).await?;
        normalize_project_detail(&record)
    }

    /// Delete a project. The API removes its personas and requirements too.
    pub async fn delete_project(&self, id: ProjectId) -> ClientResult<()> {
        self.delete(&project_path(id)).await
    }
}
