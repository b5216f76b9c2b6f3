use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client};
use tokio::time::sleep;
use tracing::{error, info, warn};

use super::{AuthMode, AUTH_TOKEN_HEADER};

/// Uniform integer draw over `[0, max_seconds]` inclusive. The spread keeps
/// triggers that fire on the same cron tick from hitting their downstream
/// services in the same instant.
#[must_use]
pub fn draw_jitter(max_seconds: u64) -> Duration {
    Duration::from_secs(fastrand::u64(0..=max_seconds))
}

/// Ping a dormant service's cheap endpoint so the platform spins it back up.
///
/// Fire-and-forget: the drawn delay is logged up front, the single GET goes
/// out once the delay elapses, and every outcome ends in a log line. No
/// retry, nothing returned.
pub async fn wake_up(
    client: &Client,
    service_name: &str,
    url: &str,
    auth_mode: AuthMode,
    token: &str,
    max_jitter_seconds: u64,
) {
    let jitter = draw_jitter(max_jitter_seconds);
    info!(
        "⏳ [{service_name}] wake-up ping scheduled in {}s",
        jitter.as_secs()
    );
    sleep(jitter).await;

    let request = match auth_mode {
        AuthMode::TokenHeader => client.get(url).header(AUTH_TOKEN_HEADER, token),
        AuthMode::Bearer => client
            .get(url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json"),
    };

    match request.send().await {
        Ok(response) if response.status().is_success() => {
            info!("✅ [{service_name}] awake ({})", response.status());
        }
        Ok(response) => {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("⚠️ [{service_name}] wake-up ping answered {status}: {body}");
        }
        Err(e) => {
            error!("💥 [{service_name}] wake-up ping failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        Client::new()
    }

    #[test]
    fn jitter_is_within_inclusive_bounds() {
        for max in [0u64, 1, 5, 90, 200] {
            for _ in 0..200 {
                let jitter = draw_jitter(max);
                assert!(jitter <= Duration::from_secs(max));
            }
        }
    }

    #[test]
    fn zero_bound_always_draws_zero() {
        for _ in 0..50 {
            assert_eq!(draw_jitter(0), Duration::ZERO);
        }
    }

    #[tokio::test]
    async fn token_header_mode_sends_raw_token_and_no_bearer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blacklist"))
            .and(header(AUTH_TOKEN_HEADER, "s3cret"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        wake_up(
            &client(),
            "coin-sifter",
            &format!("{}/blacklist", server.uri()),
            AuthMode::TokenHeader,
            "s3cret",
            0,
        )
        .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn bearer_mode_sends_authorization_and_no_custom_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/klines"))
            .and(header("authorization", "Bearer s3cret"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        wake_up(
            &client(),
            "kline-provider",
            &format!("{}/klines", server.uri()),
            AuthMode::Bearer,
            "s3cret",
            0,
        )
        .await;

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get(AUTH_TOKEN_HEADER).is_none());
    }

    #[tokio::test]
    async fn non_success_status_is_swallowed_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("cold start"))
            .expect(1)
            .mount(&server)
            .await;

        wake_up(
            &client(),
            "coin-sifter",
            &server.uri(),
            AuthMode::TokenHeader,
            "s3cret",
            0,
        )
        .await;

        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_swallowed() {
        // Nothing listens on this port; the call must not panic or retry.
        wake_up(
            &client(),
            "coin-sifter",
            "http://127.0.0.1:1/blacklist",
            AuthMode::TokenHeader,
            "s3cret",
            0,
        )
        .await;
    }
}
