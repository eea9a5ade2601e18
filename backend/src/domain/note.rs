//! Note data model.
//!
//! A [`Note`] is a user-owned piece of text content with an access level
//! controlling shareability. Ids are server-assigned; a note without an id is
//! an unsaved draft travelling through the create flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`NoteId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteIdValidationError {
    #[error("note id must not be empty")]
    Empty,
    #[error("note id must not contain surrounding whitespace")]
    Untrimmed,
}

/// Server-assigned note identifier stored as an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NoteId(String);

impl NoteId {
    /// Validate and construct a [`NoteId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, NoteIdValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    fn from_owned(id: String) -> Result<Self, NoteIdValidationError> {
        if id.is_empty() {
            return Err(NoteIdValidationError::Empty);
        }
        if id.trim() != id {
            return Err(NoteIdValidationError::Untrimmed);
        }
        Ok(Self(id))
    }
}

impl TryFrom<String> for NoteId {
    type Error = NoteIdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

impl From<NoteId> for String {
    fn from(value: NoteId) -> Self {
        value.0
    }
}

impl AsRef<str> for NoteId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Internal user identifier resolved by the user directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw directory key.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw directory key.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an [`AccessLevel`] from form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown access level: {value}")]
pub struct AccessLevelParseError {
    pub value: String,
}

/// Enumerated note visibility.
///
/// Form input parses case-insensitively, so `PUBLIC`, `Public`, and `public`
/// all decode to [`AccessLevel::Public`]. Only public notes are shareable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Private,
    Public,
}

impl AccessLevel {
    /// Whether a note at this level may be shown on the share page.
    pub fn is_shareable(self) -> bool {
        matches!(self, Self::Public)
    }
}

impl FromStr for AccessLevel {
    type Err = AccessLevelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("private") {
            Ok(Self::Private)
        } else if s.eq_ignore_ascii_case("public") {
            Ok(Self::Public)
        } else {
            Err(AccessLevelParseError {
                value: s.to_owned(),
            })
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
            Self::Public => f.write_str("public"),
        }
    }
}

/// A user-owned note.
///
/// Owner and last-modified metadata are managed by the store record, not the
/// note itself, so a draft compares field-for-field with what the user
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Server-assigned identifier; `None` for an unsaved draft.
    pub id: Option<NoteId>,
    /// Short title shown in the list view.
    pub title: String,
    /// Markdown body.
    pub content: String,
    /// Visibility controlling the share page.
    pub access: AccessLevel,
}
