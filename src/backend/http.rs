//! HTTP implementation of the agent backend boundary

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use crate::error::{ChatError, Result};

use super::AgentBackend;

/// Connect timeout for the underlying client (10 seconds)
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Request body posted to the backend
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

/// Agent backend reached over HTTP
///
/// Posts the user text as JSON to the configured base URL. The per-request
/// deadline lives in the session controller, not here; this client only
/// bounds connection establishment.
pub struct HttpBackend {
    http: reqwest::Client,
}

impl HttpBackend {
    /// Create a backend with a default client
    #[must_use]
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
                .build()
                .expect("failed to build HTTP client"),
        }
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentBackend for HttpBackend {
    async fn send(&self, endpoint: &str, text: &str) -> Result<String> {
        log::debug!("dispatching chat request to {endpoint}");

        let response = self
            .http
            .post(endpoint)
            .json(&ChatRequest { message: text })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::timeout(e.to_string())
                } else {
                    ChatError::connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::status(status.as_u16(), &body));
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));

        let body = response
            .text()
            .await
            .map_err(|e| ChatError::connection(e.to_string()))?;

        if is_json {
            let value: serde_json::Value = serde_json::from_str(&body)?;
            extract_reply(&value)
        } else {
            Ok(body)
        }
    }
}

/// Extract the reply text from a JSON backend body.
///
/// AgentOS run responses carry the reply under a top-level `content` string;
/// any other shape cannot be shown as an assistant turn and is rejected as
/// malformed.
pub fn extract_reply(value: &serde_json::Value) -> Result<String> {
    match value.get("content").and_then(|c| c.as_str()) {
        Some(content) => Ok(content.to_string()),
        None => Err(ChatError::malformed(
            "missing textual `content` field",
            Some(value.clone()),
        )),
    }
}
