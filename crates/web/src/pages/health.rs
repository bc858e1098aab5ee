use serde::Serialize;

use aipm_client::ApiClient;
use aipm_core::Health;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HealthView {
    Reachable(Health),
    /// `message` is the raw error text.
    Unreachable { message: String },
}

/// Probe `/v1/ping` once; no retry.
pub async fn load_health(client: &ApiClient) -> HealthView {
    match client.get_health().await {
        Ok(health) => HealthView::Reachable(health),
        Err(err) => HealthView::Unreachable {
            message: err.to_string(),
        },
    }
}
