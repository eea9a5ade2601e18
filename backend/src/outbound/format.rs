//! Markdown content formatting.
//!
//! Default adapter behind [`ContentFormatter`]: note bodies are markdown,
//! rendered to HTML for the share page; list entries get a truncated
//! plain-text preview.

use pulldown_cmark::{html, Event, Parser, TagEnd};

use crate::domain::ports::{ContentFormatter, RenderableNote};
use crate::domain::Note;

const DEFAULT_PREVIEW_CHARS: usize = 160;

/// [`ContentFormatter`] rendering markdown bodies with pulldown-cmark.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownFormatter {
    preview_chars: usize,
}

impl MarkdownFormatter {
    /// Formatter with a custom preview length in characters.
    pub fn with_preview_chars(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    fn render_html(content: &str) -> String {
        let mut out = String::new();
        html::push_html(&mut out, Parser::new(content));
        out
    }

    /// Plain text of the markdown body, truncated on a character boundary
    /// with a trailing ellipsis when anything was cut.
    fn preview(&self, content: &str) -> String {
        let mut text = String::new();
        for event in Parser::new(content) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak | Event::HardBreak => text.push(' '),
                // Block boundaries become single spaces; inline markup ends
                // contribute nothing.
                Event::End(
                    TagEnd::Paragraph
                    | TagEnd::Heading(_)
                    | TagEnd::Item
                    | TagEnd::BlockQuote(_)
                    | TagEnd::CodeBlock,
                ) if !text.is_empty() && !text.ends_with(' ') => text.push(' '),
                _ => {}
            }
        }
        let text = text.trim_end();
        let mut preview: String = text.chars().take(self.preview_chars).collect();
        if preview.chars().count() < text.chars().count() {
            preview.push('…');
        }
        preview
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::with_preview_chars(DEFAULT_PREVIEW_CHARS)
    }
}

impl ContentFormatter for MarkdownFormatter {
    fn format_one(&self, note: &Note) -> RenderableNote {
        RenderableNote {
            id: note.id.clone(),
            title: note.title.clone(),
            body_html: Self::render_html(&note.content),
            preview: self.preview(&note.content),
            access: note.access,
        }
    }

    fn format_many(&self, notes: &[Note]) -> Vec<RenderableNote> {
        notes.iter().map(|note| self.format_one(note)).collect()
    }
}
