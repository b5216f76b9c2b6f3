use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Health-check endpoint used by the hosting platform's liveness probe.
pub async fn ok() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Catch-all for every other method and path. The service has no real
/// inbound API surface, so anything else gets a static greeting.
pub async fn placeholder() -> &'static str {
    "Hello from Stoker Cron & Wake-Up Service!"
}
