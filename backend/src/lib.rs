//! webnotes: a server-rendered note-taking web application.
//!
//! Authenticated users create, edit, list, delete, and selectively share
//! text notes. The load-bearing contract is the draft-recovery workflow: a
//! failed validation round-trip stashes the submitted note in a per-session
//! draft slot so the form can redisplay it without losing input.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
