//! Session configuration
//!
//! Options are consumed once at controller construction. The default
//! endpoint comes from the deployment environment (`AGNO_API_URL`); after
//! startup the endpoint changes only through the controller's
//! `set_endpoint`.

use std::time::Duration;

/// Environment variable naming the default backend base URL
pub const ENDPOINT_ENV_VAR: &str = "AGNO_API_URL";

/// Fallback backend base URL (AgentOS default port)
pub const DEFAULT_ENDPOINT: &str = "http://localhost:7777";

/// Default bound on how long one request may stay in flight
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for a chat session
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Backend base URL the first dispatch goes to
    pub endpoint: String,
    /// Per-request deadline; a request that outlives it settles as a failure
    pub request_timeout: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl SessionOptions {
    /// Create a builder for session options
    #[must_use]
    pub fn builder() -> SessionOptionsBuilder {
        SessionOptionsBuilder::default()
    }

    /// Build options from the environment, falling back to defaults
    #[must_use]
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(url) = std::env::var(ENDPOINT_ENV_VAR) {
            if !url.trim().is_empty() {
                options.endpoint = url;
            }
        }
        options
    }
}

/// Builder for [`SessionOptions`]
#[derive(Debug, Default)]
pub struct SessionOptionsBuilder {
    endpoint: Option<String>,
    request_timeout: Option<Duration>,
}

impl SessionOptionsBuilder {
    /// Set the initial backend base URL
    #[must_use]
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the per-request deadline
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build the options, applying defaults for unset fields
    #[must_use]
    pub fn build(self) -> SessionOptions {
        let defaults = SessionOptions::default();
        SessionOptions {
            endpoint: self.endpoint.unwrap_or(defaults.endpoint),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
        }
    }
}
