//! Default adapters behind the domain ports.

pub mod directory;
pub mod format;
pub mod persistence;
pub mod render;
pub mod validation;

pub use directory::StaticUserDirectory;
pub use format::MarkdownFormatter;
pub use persistence::MemoryNoteStore;
pub use render::HtmlRenderer;
pub use validation::BasicNoteValidator;
