use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{error, info, warn};

/// Why a job trigger did not end in acceptance. Only ever logged; nothing
/// propagates past [`run_task`].
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("rejected (409 Conflict), worker busy")]
    WorkerBusy,
    #[error("authorization rejected (403 Forbidden)")]
    AuthRejected,
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Ask a downstream worker to start an asynchronous data-collection job.
///
/// The POST goes out immediately (no jitter) and the response status only
/// communicates acceptance, never completion. The worker enforces
/// single-flight execution itself: a 409 means it was busy and this tick's
/// trigger is simply dropped until the next scheduled one. No retry, no
/// return value.
pub async fn run_task(
    client: &Client,
    service_name: &str,
    base_url: &str,
    endpoint_path: &str,
    timeframe: &str,
    token: &str,
) {
    let url = format!("{base_url}{endpoint_path}");
    info!("🚀 [{service_name}] triggering {timeframe} collection job");

    match send_trigger(client, &url, timeframe, token).await {
        Ok(status) => {
            info!("✅ [{service_name}] {timeframe} job accepted ({status})");
        }
        Err(e @ TriggerError::WorkerBusy) => {
            warn!("⚠️ [{service_name}] {timeframe} job {e}");
        }
        Err(e @ TriggerError::AuthRejected) => {
            error!("🚫 [{service_name}] {timeframe} job {e}");
        }
        Err(e) => {
            error!("❌ [{service_name}] {timeframe} job failed: {e}");
        }
    }
}

async fn send_trigger(
    client: &Client,
    url: &str,
    timeframe: &str,
    token: &str,
) -> Result<StatusCode, TriggerError> {
    let response = client
        .post(url)
        .bearer_auth(token)
        .json(&serde_json::json!({ "timeframe": timeframe }))
        .send()
        .await?;

    match response.status() {
        status @ (StatusCode::OK | StatusCode::ACCEPTED) => Ok(status),
        StatusCode::CONFLICT => Err(TriggerError::WorkerBusy),
        StatusCode::FORBIDDEN => Err(TriggerError::AuthRejected),
        status => Err(TriggerError::UnexpectedStatus {
            status,
            body: response.text().await.unwrap_or_default(),
        }),
    }
}
