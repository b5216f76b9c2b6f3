pub mod run_task;
pub mod wake_up;

/// Header carrying the raw shared secret in [`AuthMode::TokenHeader`] mode.
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// How a wake-up ping authenticates against its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Raw shared secret in a custom header, no authorization header.
    TokenHeader,
    /// Standard bearer authorization plus a JSON content type.
    Bearer,
}
