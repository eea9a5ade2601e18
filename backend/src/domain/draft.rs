//! Draft slot state machine.
//!
//! Each session carries at most one draft note, used only to redisplay user
//! input after a failed validation round-trip. The slot is an explicit tagged
//! state rather than a nullable field so handlers cannot invent transitions:
//!
//! ```text
//! Empty --validation failure--> Holding(note)
//! Holding(note) --list entered--> Empty
//! Holding(note) --validation failure--> Holding(newer note)   (overwritten)
//! ```
//!
//! A successful submission never writes to the slot; the next list view
//! clears whatever is left behind.

use serde::{Deserialize, Serialize};

use crate::domain::Note;

/// Per-session scratch storage for a failed create or edit submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DraftSlot {
    #[default]
    Empty,
    Holding(Note),
}

impl DraftSlot {
    /// Rebuild the slot from whatever the session storage held.
    pub fn from_stored(note: Option<Note>) -> Self {
        note.map_or(Self::Empty, Self::Holding)
    }

    /// The held draft, if any.
    pub fn note(&self) -> Option<&Note> {
        match self {
            Self::Empty => None,
            Self::Holding(note) => Some(note),
        }
    }

    /// Whether the slot currently holds nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Transition: a create or edit submission failed validation.
    ///
    /// Overwrites any previously held draft in place; drafts are never
    /// merged.
    pub fn failed_submission(self, note: Note) -> Self {
        Self::Holding(note)
    }

    /// Transition: the list view was entered. A fresh list always starts
    /// clean.
    pub fn list_entered(self) -> Self {
        Self::Empty
    }
}
