use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{api, app::App};

pub fn router(app: App) -> Router {
    // The method-router fallback keeps non-GET requests to /health on the
    // placeholder path instead of a 405.
    Router::new()
        .route(
            "/health",
            get(api::health_checks::ok).fallback(api::health_checks::placeholder),
        )
        .fallback(api::health_checks::placeholder)
        .with_state(app)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{Config, ServerConfig, TargetsConfig, TracingConfig},
        environment::Environment,
    };
    use axum_test::TestServer;

    fn test_app() -> App {
        App::new(
            Config {
                tracing: TracingConfig::default(),
                server: ServerConfig::default(),
                secret_token: "test-token".to_string(),
                targets: TargetsConfig::default(),
            },
            Environment::Test,
        )
    }

    #[tokio::test]
    async fn health_returns_ok_json() {
        let server = TestServer::new(router(test_app())).unwrap();

        let response = server.get("/health").await;

        response.assert_status_ok();
        response.assert_text(r#"{"status":"ok"}"#);
        assert_eq!(response.header("content-type"), "application/json");
    }

    #[tokio::test]
    async fn unknown_paths_get_the_placeholder_body() {
        let server = TestServer::new(router(test_app())).unwrap();

        let response = server.get("/definitely-not-a-route").await;

        response.assert_status_ok();
        response.assert_text("Hello from Stoker Cron & Wake-Up Service!");
    }

    #[tokio::test]
    async fn non_get_methods_fall_through_to_the_placeholder() {
        let server = TestServer::new(router(test_app())).unwrap();

        let response = server.post("/health").await;

        response.assert_status_ok();
        response.assert_text("Hello from Stoker Cron & Wake-Up Service!");
    }
}
