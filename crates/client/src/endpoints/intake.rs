use reqwest::Method;

use aipm_core::Requirement;

use crate::normalize::normalize_requirement;
use crate::payload::IntakeExtract;
use crate::wire::RequirementRecord;
use crate::{ApiClient, ClientResult};

impl ApiClient {
    /// Hand free text to the server-side extractor; returns the requirements
    /// it created.
    pub async fn extract_requirements(&self, intake: &IntakeExtract) -> ClientResult<Vec<Requirement>> {
        let records: Vec<RequirementRecord> =
            self.send_json(Method::POST, "/v1/intake/extract", intake).await?;
        records.iter().map(normalize_requirement).collect()
    }
}
