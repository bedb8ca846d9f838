//! Agent backend boundary
//!
//! The backend is an external collaborator reached over HTTP. The session
//! controller only ever sees this trait, so tests substitute scripted
//! implementations and the HTTP details stay in one place.

mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use http::HttpBackend;
pub use http::extract_reply;

/// One request/response exchange with the agent backend.
///
/// `send` carries only the latest accepted user text, not the accumulated
/// transcript; the backend keeps its own conversation context if it wants
/// any. Implementations make exactly one attempt per call.
#[async_trait]
pub trait AgentBackend: Send + Sync {
    /// Deliver `text` to the backend at `endpoint` and return the reply text.
    async fn send(&self, endpoint: &str, text: &str) -> Result<String>;
}
