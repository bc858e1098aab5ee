use aipm_core::Health;

use crate::{ApiClient, ClientResult};

impl ApiClient {
    /// `GET /v1/ping`.
    pub async fn get_health(&self) -> ClientResult<Health> {
        self.get("/v1/ping", &[]).await
    }
}
