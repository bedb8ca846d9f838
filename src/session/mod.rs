//! Stateful session core
//!
//! One controller per chat session owns the transcript, the endpoint store,
//! and the dispatch state machine. Everything user-visible flows through the
//! controller; the presentation layer only consumes [`SessionView`]
//! snapshots.

mod controller;
mod endpoint;
mod transcript;

pub use controller::{DispatchState, SessionController, SessionView, SubmitOutcome};
pub use endpoint::EndpointStore;
pub use transcript::Transcript;
