//! Driving port for note content formatting.
//!
//! Turns stored notes into display-ready representations: rendered body
//! markup plus a truncated plain preview for list entries.

use serde::{Deserialize, Serialize};

use crate::domain::{AccessLevel, Note, NoteId};

/// Display-ready representation of a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderableNote {
    /// Identifier used for edit/share/delete links; `None` never occurs for
    /// persisted notes.
    pub id: Option<NoteId>,
    /// Title, unmodified.
    pub title: String,
    /// Body rendered to HTML.
    pub body_html: String,
    /// Truncated plain-text preview for list entries.
    pub preview: String,
    /// Visibility, carried through so views can show share affordances.
    pub access: AccessLevel,
}

/// Pure transform from notes to display-ready representations.
#[cfg_attr(test, mockall::automock)]
pub trait ContentFormatter: Send + Sync {
    /// Format a single note for the share page.
    fn format_one(&self, note: &Note) -> RenderableNote;

    /// Format a batch of notes for the list view.
    fn format_many(&self, notes: &[Note]) -> Vec<RenderableNote>;
}
