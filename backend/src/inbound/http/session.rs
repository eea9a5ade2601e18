//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! domain operations: who the authenticated principal is, and the draft slot
//! transitions defined by [`DraftSlot`].

use actix_session::Session;
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::{DraftSlot, Error, Note};

pub(crate) const PRINCIPAL_KEY: &str = "principal";
pub(crate) const DRAFT_KEY: &str = "draft_note";

/// Upper bound on a stashable draft's serialized size in bytes.
///
/// The cookie store rejects session state above 4064 bytes after encryption
/// and base64 encoding, and the principal shares the same cookie. A draft
/// above this bound is not stashed at all; writing it would fail the whole
/// response instead of rendering the error view.
pub(crate) const MAX_DRAFT_JSON_BYTES: usize = 2048;

/// Whether a failed submission's note could be kept for redisplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRetention {
    Retained,
    TooLarge,
}

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Record the authenticated principal's username in the session cookie.
    pub fn sign_in(&self, username: &str) -> Result<(), Error> {
        self.0
            .insert(PRINCIPAL_KEY, username)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }

    /// Drop all session state, principal and draft alike.
    pub fn sign_out(&self) {
        self.0.purge();
    }

    /// Fetch the authenticated principal's username, if present.
    pub fn principal(&self) -> Result<Option<String>, Error> {
        self.0
            .get::<String>(PRINCIPAL_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))
    }

    /// Require an authenticated principal or fail with `401 Unauthorized`.
    pub fn require_principal(&self) -> Result<String, Error> {
        self.principal()?
            .ok_or_else(|| Error::unauthorized("login required"))
    }

    /// Current draft slot state.
    pub fn draft(&self) -> Result<DraftSlot, Error> {
        let stored = self
            .0
            .get::<Note>(DRAFT_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(DraftSlot::from_stored(stored))
    }

    /// Apply the list-entered transition: the slot is always empty afterwards.
    pub fn enter_list(&self) -> Result<(), Error> {
        self.store_draft(&self.draft()?.list_entered())
    }

    /// Apply the validation-failure transition, overwriting any held draft.
    ///
    /// A note whose serialized form exceeds [`MAX_DRAFT_JSON_BYTES`] is not
    /// stashed; any previously held draft is dropped as well so the form
    /// redisplays clean rather than stale.
    pub fn record_failed_submission(&self, note: &Note) -> Result<DraftRetention, Error> {
        let encoded = serde_json::to_string(note)
            .map_err(|error| Error::internal(format!("failed to encode draft: {error}")))?;
        if encoded.len() > MAX_DRAFT_JSON_BYTES {
            self.store_draft(&DraftSlot::Empty)?;
            return Ok(DraftRetention::TooLarge);
        }
        self.store_draft(&self.draft()?.failed_submission(note.clone()))?;
        Ok(DraftRetention::Retained)
    }

    fn store_draft(&self, slot: &DraftSlot) -> Result<(), Error> {
        match slot.note() {
            Some(note) => self
                .0
                .insert(DRAFT_KEY, note)
                .map_err(|error| Error::internal(format!("failed to persist session: {error}"))),
            None => {
                self.0.remove(DRAFT_KEY);
                Ok(())
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(Self::new) })
    }
}
