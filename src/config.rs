use serde::{Deserialize, Serialize};

/// Full application configuration, assembled once at startup and passed
/// into [`crate::app::App`]. Nothing reads the process environment after
/// this has been built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tracing: TracingConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// Shared secret sent to every authenticated downstream call.
    /// Required: loading fails (and startup aborts) when it is absent.
    pub secret_token: String,
    #[serde(default)]
    pub targets: TargetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

/// Base URLs of the external services we ping and trigger.
///
/// Each URL is optional on its own: a scheduled action whose target is not
/// configured is skipped (and logged) at fire time without affecting the
/// other triggers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default)]
    pub coin_sifter_url: Option<String>,
    #[serde(default)]
    pub kline_provider_url: Option<String>,
    #[serde(default)]
    pub price_feed_url: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_port() -> u16 {
    8000
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_apply_when_only_token_is_given() {
        let config: Config = serde_json::from_value(json!({
            "secret_token": "s3cret"
        }))
        .unwrap();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.tracing.log_level, "info");
        assert!(config.targets.coin_sifter_url.is_none());
        assert!(config.targets.kline_provider_url.is_none());
        assert!(config.targets.price_feed_url.is_none());
    }

    #[test]
    fn missing_secret_token_is_a_hard_error() {
        let result: Result<Config, _> = serde_json::from_value(json!({
            "server": { "port": 9000 }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn target_urls_are_independent() {
        let config: Config = serde_json::from_value(json!({
            "secret_token": "s3cret",
            "targets": { "kline_provider_url": "http://kline.internal" }
        }))
        .unwrap();

        assert_eq!(
            config.targets.kline_provider_url.as_deref(),
            Some("http://kline.internal")
        );
        assert!(config.targets.coin_sifter_url.is_none());
    }
}
