use aipm_client::ApiClient;
use aipm_web::{AppConfig, HealthView, load_health};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    aipm_observability::init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        provider = config.auth.id(),
        api_base_url = %config.api_base_url,
        default_organization_id = %config.default_organization_id,
        dev_default_roles = %config.dev_default_roles,
        "configuration loaded"
    );

    let client = ApiClient::new(config.api_base_url.clone())?;
    match load_health(&client).await {
        HealthView::Reachable(health) => {
            tracing::info!(status = %health.status, message = ?health.message, "API reachable");
        }
        HealthView::Unreachable { message } => {
            tracing::warn!(%message, "API unreachable");
        }
    }

    Ok(())
}
