//! Note workflow handlers.
//!
//! ```text
//! GET  /note/list        list the principal's notes (clears the draft slot)
//! GET  /                 redirect to the list
//! POST /note/delete      delete by id, redirect
//! GET  /note/edit?id=…   edit form, recovering a held draft if present
//! POST /note/edit        update, or stash a draft and show the error view
//! GET  /note/create      create form, recovering a held draft if present
//! POST /note/create      add, or stash a draft and show the error view
//! GET  /note/share/{id}  public share page, no authentication
//! ```
//!
//! The draft slot makes a failed validation round-trip lossless: the error
//! view links back to the form, and the form redisplays exactly what was
//! submitted. Entering the list always clears the slot. A submission too
//! large for the session cookie is the one exception: it is not stashed, and
//! the error view says so.

use actix_web::{get, post, web, HttpResponse, Scope};
use serde::Deserialize;
use tracing::debug;

use crate::domain::{AccessLevel, Error, Note, NoteId, UserId};
use crate::inbound::http::session::{DraftRetention, SessionContext};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{html_page, see_other, Page};
use crate::inbound::http::ApiResult;

/// Redirect target shared by every non-view outcome.
pub const NOTE_LIST: &str = "/note/list";

/// Fixed denial shown for both private and absent notes, so the share page
/// never reveals whether a private note exists.
pub const PRIVATE_OR_MISSING: &str = "This Note is private or doesn't exist";

/// Appended to the error view when a failed submission was too large to keep
/// in the session draft slot.
pub const DRAFT_NOT_RETAINED: &str =
    "The submitted note is too large to redisplay; it was not kept";

/// All note routes mounted under `/note`.
pub fn note_scope() -> Scope {
    web::scope("/note")
        .service(list_notes)
        .service(delete_note)
        .service(show_edit)
        .service(submit_edit)
        .service(show_create)
        .service(submit_create)
        .service(share_note)
}

/// Raw note form fields as the browser submits them.
///
/// Decoding into a [`Note`] is the typed boundary: malformed input (an
/// unrecognised access level) is rejected with `400` before the business
/// validator ever sees the note.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub access: String,
}

fn decode_note_form(form: NoteForm) -> Result<Note, Error> {
    let id = match form.id.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(
            NoteId::new(raw).map_err(|err| Error::invalid_request(err.to_string()))?,
        ),
        _ => None,
    };
    let access = if form.access.trim().is_empty() {
        // A bare form defaults to the safe visibility.
        AccessLevel::Private
    } else {
        form.access
            .parse()
            .map_err(|err: crate::domain::AccessLevelParseError| {
                Error::invalid_request(err.to_string())
            })?
    };
    Ok(Note {
        id,
        title: form.title,
        content: form.content,
        access,
    })
}

async fn resolve_principal(
    state: &HttpState,
    session: &SessionContext,
) -> Result<UserId, Error> {
    let username = session.require_principal()?;
    state
        .users
        .resolve(&username)
        .await?
        .ok_or_else(|| Error::unauthorized("unknown principal"))
}

/// List the authenticated user's notes.
///
/// A fresh list view always starts clean, so the draft slot is cleared before
/// anything else happens.
#[get("/list")]
async fn list_notes(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    session.enter_list()?;
    let user = resolve_principal(&state, &session).await?;
    let notes = state.notes.list_all(&user).await?;
    let page = Page::List {
        notes: state.formatter.format_many(&notes),
    };
    Ok(html_page(&state, &page))
}

/// Root requests land on the list.
#[get("/")]
pub async fn root_redirect() -> HttpResponse {
    see_other(NOTE_LIST)
}

#[derive(Debug, Deserialize)]
struct DeleteForm {
    #[serde(default)]
    id: String,
}

/// Delete a note by id and return to the list.
///
/// Deletes unconditionally by id: neither existence nor ownership is checked
/// here, and an unknown id is a silent no-op.
#[post("/delete")]
async fn delete_note(
    state: web::Data<HttpState>,
    form: web::Form<DeleteForm>,
) -> ApiResult<HttpResponse> {
    if let Ok(id) = NoteId::new(&form.id) {
        debug!(note_id = %id, "deleting note");
        state.notes.delete_by_id(&id).await?;
    }
    Ok(see_other(NOTE_LIST))
}

#[derive(Debug, Deserialize)]
struct EditQuery {
    id: String,
}

/// Show the edit form.
///
/// A held draft takes precedence over the requested id: after a failed edit
/// the back-link returns here, and the user must get their submitted input
/// back rather than the stored note. With no draft, an unknown id redirects
/// to the list.
#[get("/edit")]
async fn show_edit(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<EditQuery>,
) -> ApiResult<HttpResponse> {
    if let Some(draft) = session.draft()?.note() {
        let page = Page::Edit {
            note: draft.clone(),
        };
        return Ok(html_page(&state, &page));
    }
    let Ok(id) = NoteId::new(&query.id) else {
        return Ok(see_other(NOTE_LIST));
    };
    match state.notes.get_by_id(&id).await? {
        Some(note) => Ok(html_page(&state, &Page::Edit { note })),
        None => Ok(see_other(NOTE_LIST)),
    }
}

/// Apply an edit submission.
///
/// A submission whose id is no longer in the store is treated as stale: the
/// content is discarded without validation. On validation failure the
/// submitted note is stashed in the draft slot and the error view links back
/// to the edit form.
#[post("/edit")]
async fn submit_edit(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<NoteForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    let id = match form.id.as_deref().map(NoteId::new) {
        Some(Ok(id)) => id,
        Some(Err(_)) | None => return Ok(see_other(NOTE_LIST)),
    };
    if !state.notes.exists(&id).await? {
        debug!(note_id = %id, "stale edit submission, note no longer exists");
        return Ok(see_other(NOTE_LIST));
    }

    let note = decode_note_form(form)?;
    let errors = state.validator.validate(&note);
    if errors.is_empty() {
        state.notes.update(note).await?;
        return Ok(see_other(NOTE_LIST));
    }

    let mut messages = errors;
    if session.record_failed_submission(&note)? == DraftRetention::TooLarge {
        messages.push(DRAFT_NOT_RETAINED.to_owned());
    }
    let page = Page::ErrorReport {
        back_link: format!("/note/edit?id={id}"),
        messages,
    };
    Ok(html_page(&state, &page))
}

/// Show the create form, recovering a draft from a prior failed create.
#[get("/create")]
async fn show_create(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<HttpResponse> {
    let slot = session.draft()?;
    let page = Page::Create {
        is_empty: slot.is_empty(),
        note: slot.note().cloned(),
    };
    Ok(html_page(&state, &page))
}

/// Apply a create submission.
///
/// The note never carries a pre-existing id here; the store assigns one on
/// success. On validation failure the submitted note is stashed and the error
/// view links back to the create form.
#[post("/create")]
async fn submit_create(
    state: web::Data<HttpState>,
    session: SessionContext,
    form: web::Form<NoteForm>,
) -> ApiResult<HttpResponse> {
    let user = resolve_principal(&state, &session).await?;
    let mut note = decode_note_form(form.into_inner())?;
    note.id = None;

    let errors = state.validator.validate(&note);
    if errors.is_empty() {
        let id = state.notes.add(note, &user).await?;
        debug!(note_id = %id, user_id = %user, "note created");
        return Ok(see_other(NOTE_LIST));
    }

    let mut messages = errors;
    if session.record_failed_submission(&note)? == DraftRetention::TooLarge {
        messages.push(DRAFT_NOT_RETAINED.to_owned());
    }
    let page = Page::ErrorReport {
        back_link: "/note/create".to_owned(),
        messages,
    };
    Ok(html_page(&state, &page))
}

/// Public share page, no authentication required.
///
/// Only a note whose access level is public is shown. A private note and an
/// absent id produce the same fixed denial, so the page never leaks whether a
/// private note exists.
#[get("/share/{id}")]
async fn share_note(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw = path.into_inner();
    let note = match NoteId::new(&raw) {
        Ok(id) => state.notes.get_by_id(&id).await?,
        Err(_) => None,
    };
    let page = match note {
        Some(note) if note.access.is_shareable() => Page::Share {
            is_public: true,
            note: Some(state.formatter.format_one(&note)),
            message: None,
        },
        _ => Page::Share {
            is_public: false,
            note: None,
            message: Some(PRIVATE_OR_MISSING.to_owned()),
        },
    };
    Ok(html_page(&state, &page))
}
