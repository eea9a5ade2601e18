//! Default note validation rules.

use crate::domain::ports::NoteValidator;
use crate::domain::Note;

/// Maximum accepted title length in characters.
pub const MAX_TITLE_CHARS: usize = 100;
/// Maximum accepted content length in characters.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// [`NoteValidator`] enforcing basic length rules.
///
/// Messages are ordered title-first so the error view reads top to bottom in
/// form order.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicNoteValidator;

impl NoteValidator for BasicNoteValidator {
    fn validate(&self, note: &Note) -> Vec<String> {
        let mut errors = Vec::new();
        if note.title.trim().is_empty() {
            errors.push("title must not be empty".to_owned());
        } else if note.title.chars().count() > MAX_TITLE_CHARS {
            errors.push(format!("title must be at most {MAX_TITLE_CHARS} characters"));
        }
        if note.content.chars().count() > MAX_CONTENT_CHARS {
            errors.push(format!(
                "content must be at most {MAX_CONTENT_CHARS} characters"
            ));
        }
        errors
    }
}
