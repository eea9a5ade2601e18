//! Driving port for principal resolution.

use async_trait::async_trait;

use crate::domain::{Error, UserId};

/// Resolves an authenticated principal's username to an internal user id.
///
/// Authentication itself happens upstream; this port only answers "which
/// internal id does this username map to".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up the internal id for a username, `None` when unknown.
    async fn resolve(&self, username: &str) -> Result<Option<UserId>, Error>;
}
