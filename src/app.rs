use std::time::Duration;

use crate::{config::Config, environment::Environment};

/// A stalled downstream call may not hold a dispatch slot forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state, cloned into the router and into every
/// scheduler task. Cloning is cheap: the reqwest client is a handle over a
/// shared connection pool.
#[derive(Clone, Debug)]
pub struct App {
    pub config: Config,
    pub environment: Environment,
    pub http: reqwest::Client,
}

impl App {
    #[must_use]
    pub fn new(config: Config, environment: Environment) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            environment,
            http,
        }
    }
}
