//! Type definitions for the chat session core
//!
//! Split into submodules by concern: conversation turns and newtype
//! identifiers.

mod identifiers;
mod turn;

pub use identifiers::SessionId;
pub use turn::{Role, Turn};
