//! Driving port for view rendering, and the page models handlers build.
//!
//! Templating is an external concern; handlers only construct a typed
//! [`Page`] and hand it to whatever renderer is wired in. Keeping the models
//! value-comparable lets tests assert on exactly what a handler selected,
//! independent of markup.

use serde::{Deserialize, Serialize};

use crate::domain::ports::RenderableNote;
use crate::domain::Note;

/// View model selected by a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// The authenticated user's notes, formatted for display.
    List { notes: Vec<RenderableNote> },
    /// Edit form, prefilled from the store or a recovered draft.
    Edit { note: Note },
    /// Create form; `is_empty` is false only when a failed create left a
    /// draft behind.
    Create { is_empty: bool, note: Option<Note> },
    /// Share page. A private note and an absent id produce value-identical
    /// pages so the response never leaks whether a private note exists.
    Share {
        is_public: bool,
        note: Option<RenderableNote>,
        message: Option<String>,
    },
    /// Validation failure report with a link back to the originating form.
    ErrorReport {
        back_link: String,
        messages: Vec<String>,
    },
    /// Login form, with an optional failure message.
    Login { message: Option<String> },
}

/// Renders a page model to an HTML document.
#[cfg_attr(test, mockall::automock)]
pub trait ViewRenderer: Send + Sync {
    /// Produce the response body for a page.
    fn render(&self, page: &Page) -> String;
}
