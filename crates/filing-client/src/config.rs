use std::time::Duration;

/// Connection settings for the portal REST API.
///
/// Every request carries `timeout` so a dead backend surfaces as an
/// ordinary save/submit error instead of leaving the wizard stuck in
/// "Saving…" forever.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash.
    pub base_url: String,
    /// Bearer token attached to every request.
    pub auth_token: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_trailing_slash(base_url.into()),
            ..Self::default()
        }
    }

    /// Read settings from the environment (and `.env`, when present):
    /// `LEGAL_AID_API_URL`, `LEGAL_AID_API_TOKEN`,
    /// `LEGAL_AID_HTTP_TIMEOUT_SECS`. Missing or unparseable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let base_url = std::env::var("LEGAL_AID_API_URL")
            .map(trim_trailing_slash)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let auth_token = std::env::var("LEGAL_AID_API_TOKEN").ok();
        let timeout = std::env::var("LEGAL_AID_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Self {
            base_url,
            auth_token,
            timeout,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
