//! Minimal HTML rendering.
//!
//! Default adapter behind [`ViewRenderer`]. A real deployment would swap in a
//! template engine; these pages exist so the app is usable standalone and so
//! the escaping contract has one owner.

use crate::domain::ports::{Page, RenderableNote, ViewRenderer};
use crate::domain::{AccessLevel, Note};

/// Escape text for interpolation into HTML element content or attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn access_option(value: AccessLevel, selected: AccessLevel) -> String {
    let marker = if value == selected { " selected" } else { "" };
    format!("<option value=\"{value}\"{marker}>{value}</option>")
}

fn note_form(action: &str, note: Option<&Note>, submit_label: &str) -> String {
    let id_field = note
        .and_then(|n| n.id.as_ref())
        .map(|id| format!("<input type=\"hidden\" name=\"id\" value=\"{}\">", escape(id.as_ref())))
        .unwrap_or_default();
    let title = note.map(|n| escape(&n.title)).unwrap_or_default();
    let content = note.map(|n| escape(&n.content)).unwrap_or_default();
    let access = note.map_or(AccessLevel::Private, |n| n.access);
    format!(
        "<form method=\"post\" action=\"{action}\">\n{id_field}\
         <label>Title <input name=\"title\" value=\"{title}\"></label>\n\
         <label>Content <textarea name=\"content\">{content}</textarea></label>\n\
         <label>Access <select name=\"access\">{private}{public}</select></label>\n\
         <button type=\"submit\">{submit_label}</button>\n</form>",
        private = access_option(AccessLevel::Private, access),
        public = access_option(AccessLevel::Public, access),
    )
}

fn list_entry(note: &RenderableNote) -> String {
    let id = note.id.as_ref().map(AsRef::as_ref).unwrap_or_default();
    let id = escape(id);
    let share = if note.access.is_shareable() {
        format!(" <a href=\"/note/share/{id}\">share</a>")
    } else {
        String::new()
    };
    format!(
        "<li><a href=\"/note/edit?id={id}\">{title}</a> — {preview}{share}\
         <form method=\"post\" action=\"/note/delete\" class=\"inline\">\
         <input type=\"hidden\" name=\"id\" value=\"{id}\">\
         <button type=\"submit\">delete</button></form></li>",
        title = escape(&note.title),
        preview = escape(&note.preview),
    )
}

/// [`ViewRenderer`] producing self-contained HTML5 documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn render(&self, page: &Page) -> String {
        match page {
            Page::List { notes } => {
                let entries: String = notes.iter().map(list_entry).collect();
                layout(
                    "Notes",
                    &format!(
                        "<h1>Notes</h1>\n<ul>{entries}</ul>\n\
                         <a href=\"/note/create\">New note</a>\n\
                         <form method=\"post\" action=\"/logout\"><button type=\"submit\">Log out</button></form>"
                    ),
                )
            }
            Page::Edit { note } => layout(
                "Edit note",
                &format!(
                    "<h1>Edit note</h1>\n{}",
                    note_form("/note/edit", Some(note), "Save")
                ),
            ),
            Page::Create { is_empty: _, note } => layout(
                "New note",
                &format!(
                    "<h1>New note</h1>\n{}",
                    note_form("/note/create", note.as_ref(), "Create")
                ),
            ),
            Page::Share {
                is_public: _,
                note,
                message,
            } => match note {
                // body_html is already rendered markup; titles still escape.
                Some(note) => layout(
                    &note.title,
                    &format!("<h1>{}</h1>\n{}", escape(&note.title), note.body_html),
                ),
                None => layout(
                    "Note",
                    &format!("<p>{}</p>", escape(message.as_deref().unwrap_or_default())),
                ),
            },
            Page::ErrorReport {
                back_link,
                messages,
            } => {
                let items: String = messages
                    .iter()
                    .map(|message| format!("<li>{}</li>", escape(message)))
                    .collect();
                layout(
                    "Invalid note",
                    &format!(
                        "<h1>Invalid note</h1>\n<ul>{items}</ul>\n<a href=\"{}\">Back</a>",
                        escape(back_link)
                    ),
                )
            }
            Page::Login { message } => {
                let notice = message
                    .as_deref()
                    .map(|m| format!("<p>{}</p>\n", escape(m)))
                    .unwrap_or_default();
                layout(
                    "Log in",
                    &format!(
                        "<h1>Log in</h1>\n{notice}\
                         <form method=\"post\" action=\"/login\">\
                         <label>Username <input name=\"username\"></label>\
                         <button type=\"submit\">Log in</button></form>"
                    ),
                )
            }
        }
    }
}
