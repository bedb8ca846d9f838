//! Append-only conversation transcript

use crate::types::Turn;

/// Ordered, append-only record of conversation turns
///
/// Insertion order is conversational order. Turns are never reordered,
/// deduplicated, or mutated in place once appended; the transcript lives for
/// one session and is dropped with it.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn at the end
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Read-only view of all turns in conversational order
    #[must_use]
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns recorded so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the conversation has no turns yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recently appended turn, if any
    #[must_use]
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
