//! Domain ports for the hexagonal boundary.
//!
//! Each port file owns its request/response types. Default adapters live in
//! `crate::outbound`; mocks are exported for tests only.

mod content_formatter;
mod note_store;
mod note_validator;
mod user_directory;
mod view_renderer;

#[cfg(test)]
pub use content_formatter::MockContentFormatter;
pub use content_formatter::{ContentFormatter, RenderableNote};
#[cfg(test)]
pub use note_store::MockNoteStore;
pub use note_store::NoteStore;
#[cfg(test)]
pub use note_validator::MockNoteValidator;
pub use note_validator::NoteValidator;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::UserDirectory;
#[cfg(test)]
pub use view_renderer::MockViewRenderer;
pub use view_renderer::{Page, ViewRenderer};
