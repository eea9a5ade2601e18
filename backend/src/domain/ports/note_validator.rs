//! Driving port for business validation of notes.

use crate::domain::Note;

/// Pure validation of a submitted note.
///
/// Returns an ordered list of human-readable messages; an empty list is the
/// sole success signal. Boundary decoding (malformed access levels and the
/// like) happens before this port is consulted.
#[cfg_attr(test, mockall::automock)]
pub trait NoteValidator: Send + Sync {
    /// Validate a note, returning ordered error messages.
    fn validate(&self, note: &Note) -> Vec<String>;
}
