//! HTTP inbound adapter exposing the server-rendered note workflows.

pub mod auth;
pub mod error;
pub mod notes;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod views;

pub use error::ApiResult;
