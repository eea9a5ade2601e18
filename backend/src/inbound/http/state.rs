//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain ports and remain testable without I/O. All collaborators are
//! constructor parameters; tests substitute mocks or in-memory fakes.

use std::sync::Arc;

use crate::domain::ports::{ContentFormatter, NoteStore, NoteValidator, UserDirectory, ViewRenderer};
use crate::outbound::{
    BasicNoteValidator, HtmlRenderer, MarkdownFormatter, MemoryNoteStore, StaticUserDirectory,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub notes: Arc<dyn NoteStore>,
    pub users: Arc<dyn UserDirectory>,
    pub validator: Arc<dyn NoteValidator>,
    pub formatter: Arc<dyn ContentFormatter>,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl HttpState {
    /// State wired with the default adapters: in-memory store, static
    /// directory, basic validation, markdown formatting, plain HTML pages.
    pub fn with_defaults() -> Self {
        Self {
            notes: Arc::new(MemoryNoteStore::new()),
            users: Arc::new(StaticUserDirectory::default()),
            validator: Arc::new(BasicNoteValidator),
            formatter: Arc::new(MarkdownFormatter::default()),
            renderer: Arc::new(HtmlRenderer),
        }
    }
}
