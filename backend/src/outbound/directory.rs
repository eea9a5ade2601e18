//! Static user directory.
//!
//! Default adapter behind [`UserDirectory`]: a fixed username → id table,
//! enough for standalone runs and deterministic tests. Production deployments
//! substitute a directory backed by whatever identity system fronts the app.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::ports::UserDirectory;
use crate::domain::{Error, UserId};

/// [`UserDirectory`] resolving usernames from an in-memory table.
#[derive(Debug, Clone)]
pub struct StaticUserDirectory {
    users: HashMap<String, UserId>,
}

impl StaticUserDirectory {
    /// Build a directory from username/id pairs.
    pub fn with_users<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = (S, UserId)>,
        S: Into<String>,
    {
        Self {
            users: users
                .into_iter()
                .map(|(name, id)| (name.into(), id))
                .collect(),
        }
    }
}

impl Default for StaticUserDirectory {
    fn default() -> Self {
        Self::with_users([("ada", UserId::new(1))])
    }
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn resolve(&self, username: &str) -> Result<Option<UserId>, Error> {
        Ok(self.users.get(username).copied())
    }
}
