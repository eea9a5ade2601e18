//! Domain primitives and ports.
//!
//! Transport-agnostic types used by the HTTP adapter and the default
//! outbound adapters. Types are value-comparable and document their
//! invariants in Rustdoc.

pub mod draft;
pub mod error;
pub mod note;
pub mod ports;

pub use self::draft::DraftSlot;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::note::{
    AccessLevel, AccessLevelParseError, Note, NoteId, NoteIdValidationError, UserId,
};
