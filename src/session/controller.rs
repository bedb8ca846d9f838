//! Session controller
//!
//! Orchestrates sending a user turn: admission control, single-flight
//! dispatch to the configured endpoint, and appending the settlement result
//! to the transcript in strict temporal order.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::AgentBackend;
use crate::config::SessionOptions;
use crate::error::ChatError;
use crate::types::{SessionId, Turn};

use super::endpoint::EndpointStore;
use super::transcript::Transcript;

/// Dispatch state of the controller, per conversation
///
/// There is no terminal state; the controller is long-lived for the session.
/// The only way out of `Sending` is settlement of the in-flight request,
/// which includes the timeout bound on every dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    /// No request in flight; submissions are admitted
    Idle,
    /// Exactly one request in flight; submissions are rejected
    Sending,
}

/// Result of a `submit` call
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Input rejected by admission control; nothing changed
    Rejected,
    /// Backend replied and the assistant turn was appended
    Answered,
    /// Dispatch settled as a failure; no assistant turn was appended
    Failed(ChatError),
}

impl SubmitOutcome {
    /// Whether the submission passed admission control
    #[must_use]
    pub fn accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Read-only snapshot of session state for the presentation layer
#[derive(Debug, Clone)]
pub struct SessionView {
    /// Transcript in conversational order
    pub turns: Vec<Turn>,
    /// Current contents of the input box
    pub draft: String,
    /// Whether a request is in flight
    pub busy: bool,
    /// Currently configured backend base URL
    pub endpoint: String,
    /// Whether the settings panel is open
    pub settings_open: bool,
}

/// Mutable session state, guarded by one lock
struct SessionState {
    transcript: Transcript,
    draft: String,
    dispatch: DispatchState,
    endpoint: EndpointStore,
    settings_open: bool,
}

/// Controller for one chat session
///
/// Owns the transcript and endpoint store exclusively for the session's
/// lifetime. At most one request is in flight at a time: the admission rule
/// in [`submit`](Self::submit) rejects submissions while `Sending`, so
/// settlement order trivially equals dispatch order. The state lock is never
/// held across the network await.
pub struct SessionController {
    session_id: SessionId,
    state: Mutex<SessionState>,
    backend: Arc<dyn AgentBackend>,
    request_timeout: Duration,
}

impl SessionController {
    /// Create a controller for a fresh session
    pub fn new(options: SessionOptions, backend: Arc<dyn AgentBackend>) -> Self {
        let session_id = SessionId::generate();
        log::info!(
            "session {session_id}: created with endpoint {}",
            options.endpoint
        );
        Self {
            session_id,
            state: Mutex::new(SessionState {
                transcript: Transcript::new(),
                draft: String::new(),
                dispatch: DispatchState::Idle,
                endpoint: EndpointStore::new(options.endpoint),
                settings_open: false,
            }),
            backend,
            request_timeout: options.request_timeout,
        }
    }

    /// Submit user text to the backend.
    ///
    /// Admission control: whitespace-only text, or a submission while a
    /// request is already in flight, is a silent no-op returning
    /// [`SubmitOutcome::Rejected`]. On acceptance the trimmed text is
    /// appended as a user turn, the draft is cleared, and exactly one
    /// request is dispatched to the endpoint value read at this moment.
    ///
    /// Settlement always returns the controller to `Idle`, on success,
    /// failure, and timeout alike. A failed settlement appends nothing; the
    /// error is logged and returned in [`SubmitOutcome::Failed`].
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Rejected;
        }

        // Admission and dispatch bookkeeping under one lock acquisition, so
        // two concurrent submits can never both pass the busy gate.
        let endpoint = {
            let mut state = self.state.lock();
            if state.dispatch == DispatchState::Sending {
                log::debug!("session {}: submission rejected, busy", self.session_id);
                return SubmitOutcome::Rejected;
            }
            state.transcript.append(Turn::user(trimmed));
            state.draft.clear();
            state.dispatch = DispatchState::Sending;
            state.endpoint.get().to_string()
        };

        let settled = tokio::time::timeout(
            self.request_timeout,
            self.backend.send(&endpoint, trimmed),
        )
        .await
        .unwrap_or_else(|_| {
            Err(ChatError::timeout(format!(
                "no settlement within {:?}",
                self.request_timeout
            )))
        });

        let mut state = self.state.lock();
        state.dispatch = DispatchState::Idle;
        match settled {
            Ok(reply) => {
                state.transcript.append(Turn::assistant(reply));
                SubmitOutcome::Answered
            }
            Err(e) => {
                log::warn!(
                    "session {}: request to {endpoint} failed: {e}",
                    self.session_id
                );
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Replace the backend base URL.
    ///
    /// Effective for the next dispatch only; an in-flight request keeps the
    /// destination it was dispatched with. No validation is performed.
    pub fn set_endpoint(&self, url: impl Into<String>) {
        let url = url.into();
        log::info!("session {}: endpoint set to {url}", self.session_id);
        self.state.lock().endpoint.set(url);
    }

    /// Flip the settings panel open/closed
    pub fn toggle_settings(&self) {
        let mut state = self.state.lock();
        state.settings_open = !state.settings_open;
    }

    /// Replace the draft text backing the input box
    pub fn set_draft(&self, text: impl Into<String>) {
        self.state.lock().draft = text.into();
    }

    /// Snapshot of the session for rendering
    #[must_use]
    pub fn view(&self) -> SessionView {
        let state = self.state.lock();
        SessionView {
            turns: state.transcript.all().to_vec(),
            draft: state.draft.clone(),
            busy: state.dispatch == DispatchState::Sending,
            endpoint: state.endpoint.get().to_string(),
            settings_open: state.settings_open,
        }
    }

    /// Transcript snapshot in conversational order
    #[must_use]
    pub fn transcript(&self) -> Vec<Turn> {
        self.state.lock().transcript.all().to_vec()
    }

    /// Whether a request is currently in flight
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.lock().dispatch == DispatchState::Sending
    }

    /// Currently configured backend base URL
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.state.lock().endpoint.get().to_string()
    }

    /// Whether the settings panel is open
    #[must_use]
    pub fn settings_open(&self) -> bool {
        self.state.lock().settings_open
    }

    /// Identifier of this session
    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}
