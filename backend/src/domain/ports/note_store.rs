//! Driving port for note persistence.
//!
//! Handlers call this port for all note CRUD; the storage engine behind it is
//! an external concern. Production can back it with any repository; tests use
//! the mock or the in-memory adapter.

use async_trait::async_trait;

use crate::domain::{Error, Note, NoteId, UserId};

/// Port for note persistence keyed by note id and owning user id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes owned by the given user, most recently modified first.
    async fn list_all(&self, user: &UserId) -> Result<Vec<Note>, Error>;

    /// Fetch a single note by id.
    async fn get_by_id(&self, id: &NoteId) -> Result<Option<Note>, Error>;

    /// Persist a new note for the given owner and return the assigned id.
    ///
    /// Any id carried by `note` is ignored; the store assigns its own.
    async fn add(&self, note: Note, owner: &UserId) -> Result<NoteId, Error>;

    /// Replace an existing note's content. The note's id must be set and
    /// present in the store.
    async fn update(&self, note: Note) -> Result<(), Error>;

    /// Delete a note by id. Deleting an unknown id is a silent no-op.
    async fn delete_by_id(&self, id: &NoteId) -> Result<(), Error>;

    /// Whether a note with the given id exists.
    async fn exists(&self, id: &NoteId) -> Result<bool, Error>;
}
