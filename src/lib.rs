//! # Agno Chat Session Core
//!
//! The conversational session core behind a minimal chat client for an Agno
//! AgentOS deployment. It holds the message transcript, serializes outbound
//! requests to a single configurable backend endpoint, and manages the
//! busy/settings state machine. Rendering is left to whatever front end
//! consumes the [`SessionView`] snapshots.
//!
//! ## Quick Start
//!
//! ```no_run
//! use agno_chat::{HttpBackend, SessionController, SessionOptions};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = SessionOptions::builder()
//!         .endpoint("http://localhost:7777")
//!         .build();
//!     let controller = SessionController::new(options, Arc::new(HttpBackend::new()));
//!
//!     controller.submit("hello").await;
//!     for turn in controller.transcript() {
//!         log::info!("{:?}: {}", turn.role, turn.content);
//!     }
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Admission control**: whitespace-only text and submissions while a
//!   request is in flight are silent no-ops.
//! - **Single-flight**: at most one outstanding backend request per session,
//!   so settlement order equals dispatch order.
//! - **Ordering**: the user turn is appended before dispatch, the assistant
//!   turn only after settlement.
//! - **Liveness**: every dispatch is bounded by a timeout and every
//!   settlement path clears the busy state.
//!
//! Custom backends implement [`AgentBackend`]; the crate ships
//! [`HttpBackend`] for the plain HTTP request/response boundary.

pub mod backend;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use backend::{AgentBackend, HttpBackend, extract_reply};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_REQUEST_TIMEOUT, SessionOptions};
pub use error::{ChatError, Result};
pub use session::{
    DispatchState, EndpointStore, SessionController, SessionView, SubmitOutcome, Transcript,
};
pub use types::{Role, SessionId, Turn};
