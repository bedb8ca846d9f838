//! Integration tests for the session controller
//!
//! Drives the controller against scripted backends to pin down admission
//! control, single-flight dispatch, ordering, liveness, and endpoint
//! isolation.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_test::{assert_pending, assert_ready, task};

use agno_chat::{
    AgentBackend, ChatError, Role, SessionController, SessionOptions, SubmitOutcome, Turn,
};

/// Backend that answers each call from a fixed script, recording dispatches
struct ScriptedBackend {
    replies: Mutex<Vec<agno_chat::Result<String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedBackend {
    fn new(replies: Vec<agno_chat::Result<String>>) -> Self {
        let mut replies = replies;
        replies.reverse();
        Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl AgentBackend for ScriptedBackend {
    async fn send(&self, endpoint: &str, text: &str) -> agno_chat::Result<String> {
        self.calls
            .lock()
            .push((endpoint.to_string(), text.to_string()));
        self.replies
            .lock()
            .pop()
            .unwrap_or_else(|| Ok("ok".to_string()))
    }
}

/// Backend that suspends until the test releases a reply over a channel
struct GatedBackend {
    replies: tokio::sync::Mutex<mpsc::UnboundedReceiver<agno_chat::Result<String>>>,
    endpoints: Mutex<Vec<String>>,
}

impl GatedBackend {
    fn new() -> (Arc<Self>, mpsc::UnboundedSender<agno_chat::Result<String>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let backend = Arc::new(Self {
            replies: tokio::sync::Mutex::new(rx),
            endpoints: Mutex::new(Vec::new()),
        });
        (backend, tx)
    }

    fn endpoints(&self) -> Vec<String> {
        self.endpoints.lock().clone()
    }
}

#[async_trait]
impl AgentBackend for GatedBackend {
    async fn send(&self, endpoint: &str, _text: &str) -> agno_chat::Result<String> {
        self.endpoints.lock().push(endpoint.to_string());
        self.replies
            .lock()
            .await
            .recv()
            .await
            .expect("test dropped the reply sender")
    }
}

/// Backend whose requests never settle on their own
struct NeverBackend;

#[async_trait]
impl AgentBackend for NeverBackend {
    async fn send(&self, _endpoint: &str, _text: &str) -> agno_chat::Result<String> {
        std::future::pending().await
    }
}

fn controller_with(backend: Arc<dyn AgentBackend>) -> SessionController {
    let options = SessionOptions::builder()
        .endpoint("http://agent.test:7777")
        .build();
    SessionController::new(options, backend)
}

#[tokio::test]
async fn submit_appends_user_then_assistant_turn() {
    let _ = env_logger::builder().is_test(true).try_init();

    let backend = Arc::new(ScriptedBackend::new(vec![Ok("hi there".to_string())]));
    let controller = controller_with(backend.clone());

    let outcome = controller.submit("hello").await;
    assert!(matches!(outcome, SubmitOutcome::Answered));
    assert!(!controller.is_busy());

    let turns = controller.transcript();
    assert_eq!(turns, vec![Turn::user("hello"), Turn::assistant("hi there")]);
    assert_eq!(
        backend.calls(),
        vec![("http://agent.test:7777".to_string(), "hello".to_string())]
    );
}

#[tokio::test]
async fn whitespace_submissions_are_rejected() {
    let backend = Arc::new(ScriptedBackend::new(vec![]));
    let controller = controller_with(backend.clone());

    assert!(matches!(controller.submit("").await, SubmitOutcome::Rejected));
    assert!(matches!(
        controller.submit("   ").await,
        SubmitOutcome::Rejected
    ));
    assert!(matches!(
        controller.submit("\n\t").await,
        SubmitOutcome::Rejected
    ));

    assert!(controller.transcript().is_empty());
    assert!(!controller.is_busy());
    assert!(backend.calls().is_empty());
}

#[tokio::test]
async fn submitted_text_is_trimmed_before_dispatch() {
    let backend = Arc::new(ScriptedBackend::new(vec![Ok("ok".to_string())]));
    let controller = controller_with(backend.clone());

    controller.submit("  hello  ").await;

    assert_eq!(controller.transcript()[0], Turn::user("hello"));
    assert_eq!(backend.calls()[0].1, "hello");
}

#[tokio::test]
async fn busy_gate_rejects_submission_while_in_flight() {
    let _ = env_logger::builder().is_test(true).try_init();

    let (backend, release) = GatedBackend::new();
    let controller = controller_with(backend.clone());

    let mut in_flight = task::spawn(controller.submit("a"));
    assert_pending!(in_flight.poll());
    assert!(controller.is_busy());
    assert_eq!(controller.transcript(), vec![Turn::user("a")]);

    // Second submission while busy: rejected, no dispatch, log unchanged
    assert!(matches!(
        controller.submit("b").await,
        SubmitOutcome::Rejected
    ));
    assert_eq!(controller.transcript(), vec![Turn::user("a")]);
    assert_eq!(backend.endpoints().len(), 1);

    release.send(Ok("reply a".to_string())).unwrap();
    let outcome = assert_ready!(in_flight.poll());
    assert!(matches!(outcome, SubmitOutcome::Answered));
    assert!(!controller.is_busy());
    assert_eq!(
        controller.transcript(),
        vec![Turn::user("a"), Turn::assistant("reply a")]
    );

    // Now that the first request settled, "b" is admitted
    release.send(Ok("reply b".to_string())).unwrap();
    assert!(matches!(
        controller.submit("b").await,
        SubmitOutcome::Answered
    ));
    assert_eq!(controller.transcript().len(), 4);
}

#[tokio::test]
async fn failed_dispatch_appends_no_assistant_turn() {
    let _ = env_logger::builder().is_test(true).try_init();

    let backend = Arc::new(ScriptedBackend::new(vec![
        Err(ChatError::connection("connection refused")),
        Ok("recovered".to_string()),
    ]));
    let controller = controller_with(backend);

    let outcome = controller.submit("x").await;
    assert!(matches!(outcome, SubmitOutcome::Failed(ChatError::Connection(_))));
    assert_eq!(controller.transcript(), vec![Turn::user("x")]);
    assert!(!controller.is_busy());

    // The session stays usable after a failure
    assert!(matches!(
        controller.submit("y").await,
        SubmitOutcome::Answered
    ));
    assert_eq!(controller.transcript().len(), 3);
}

#[tokio::test]
async fn endpoint_change_mid_flight_affects_next_dispatch_only() {
    let (backend, release) = GatedBackend::new();
    let controller = controller_with(backend.clone());

    let mut in_flight = task::spawn(controller.submit("first"));
    assert_pending!(in_flight.poll());

    controller.set_endpoint("http://other.test:9999");
    assert_eq!(controller.endpoint(), "http://other.test:9999");

    release.send(Ok("one".to_string())).unwrap();
    assert_ready!(in_flight.poll());

    release.send(Ok("two".to_string())).unwrap();
    controller.submit("second").await;

    assert_eq!(
        backend.endpoints(),
        vec![
            "http://agent.test:7777".to_string(),
            "http://other.test:9999".to_string()
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn unsettled_request_times_out_and_clears_busy() {
    let _ = env_logger::builder().is_test(true).try_init();

    let options = SessionOptions::builder()
        .endpoint("http://agent.test:7777")
        .request_timeout(std::time::Duration::from_secs(5))
        .build();
    let controller = SessionController::new(options, Arc::new(NeverBackend));

    let outcome = controller.submit("hello?").await;
    assert!(matches!(outcome, SubmitOutcome::Failed(ChatError::Timeout(_))));
    assert!(!controller.is_busy());
    assert_eq!(controller.transcript(), vec![Turn::user("hello?")]);
}

#[tokio::test]
async fn submit_clears_draft_on_acceptance_only() {
    let backend = Arc::new(ScriptedBackend::new(vec![Ok("ok".to_string())]));
    let controller = controller_with(backend);

    controller.set_draft("   ");
    controller.submit("   ").await;
    assert_eq!(controller.view().draft, "   ");

    controller.set_draft("hello");
    controller.submit("hello").await;
    assert_eq!(controller.view().draft, "");
}

#[tokio::test]
async fn view_reflects_settings_toggle_and_state() {
    let backend = Arc::new(ScriptedBackend::new(vec![Ok("hey".to_string())]));
    let controller = controller_with(backend);

    assert!(!controller.settings_open());
    controller.toggle_settings();
    assert!(controller.settings_open());
    controller.toggle_settings();
    assert!(!controller.settings_open());

    controller.submit("hi").await;
    let view = controller.view();
    assert!(!view.busy);
    assert!(!view.settings_open);
    assert_eq!(view.endpoint, "http://agent.test:7777");
    assert_eq!(view.turns.len(), 2);
    assert_eq!(view.turns[0].role, Role::User);
    assert_eq!(view.turns[1].role, Role::Assistant);
}
