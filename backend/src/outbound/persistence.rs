//! In-memory note store.
//!
//! Default adapter behind [`NoteStore`]. Serialisation of concurrent writes
//! is this adapter's responsibility; a plain `RwLock` is enough for the
//! request-per-invocation model.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ports::NoteStore;
use crate::domain::{Error, Note, NoteId, UserId};

#[derive(Debug, Clone)]
struct NoteRecord {
    note: Note,
    owner: UserId,
    updated_at: DateTime<Utc>,
}

/// [`NoteStore`] keeping records in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    records: RwLock<HashMap<NoteId, NoteRecord>>,
}

impl MemoryNoteStore {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<NoteId, NoteRecord>>, Error> {
        self.records
            .read()
            .map_err(|_| Error::internal("note store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<NoteId, NoteRecord>>, Error> {
        self.records
            .write()
            .map_err(|_| Error::internal("note store lock poisoned"))
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn list_all(&self, user: &UserId) -> Result<Vec<Note>, Error> {
        let records = self.read()?;
        let mut owned: Vec<&NoteRecord> = records
            .values()
            .filter(|record| record.owner == *user)
            .collect();
        // Most recently modified first; id as a stable tie-break.
        owned.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.note.id.cmp(&b.note.id))
        });
        Ok(owned.into_iter().map(|record| record.note.clone()).collect())
    }

    async fn get_by_id(&self, id: &NoteId) -> Result<Option<Note>, Error> {
        Ok(self.read()?.get(id).map(|record| record.note.clone()))
    }

    async fn add(&self, mut note: Note, owner: &UserId) -> Result<NoteId, Error> {
        let id = NoteId::new(Uuid::new_v4().to_string())
            .map_err(|err| Error::internal(format!("generated note id invalid: {err}")))?;
        note.id = Some(id.clone());
        self.write()?.insert(
            id.clone(),
            NoteRecord {
                note,
                owner: *owner,
                updated_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn update(&self, note: Note) -> Result<(), Error> {
        let Some(id) = note.id.clone() else {
            return Err(Error::invalid_request("cannot update a note without an id"));
        };
        let mut records = self.write()?;
        match records.get_mut(&id) {
            Some(record) => {
                record.note = note;
                record.updated_at = Utc::now();
                Ok(())
            }
            None => Err(Error::not_found(format!("no note with id {id}"))),
        }
    }

    async fn delete_by_id(&self, id: &NoteId) -> Result<(), Error> {
        // Unknown ids are a silent no-op.
        self.write()?.remove(id);
        Ok(())
    }

    async fn exists(&self, id: &NoteId) -> Result<bool, Error> {
        Ok(self.read()?.contains_key(id))
    }
}
