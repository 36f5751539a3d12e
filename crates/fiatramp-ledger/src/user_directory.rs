//! User directory — the users table.
//!
//! Users are created by seeding or admin tooling; the settlement flow only
//! reads them. Risk-score updates happen in an out-of-scope pipeline.

use std::collections::HashMap;

use fiatramp_types::{GatewayError, Result, User, UserId};

/// Keyed store of gateway users.
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

impl UserDirectory {
    /// Create an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
        }
    }

    /// Insert (or replace) a user, returning its id.
    pub fn insert(&mut self, user: User) -> UserId {
        let id = user.id;
        self.users.insert(id, user);
        id
    }

    /// Look up a user.
    #[must_use]
    pub fn get(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    /// Look up a user, failing with `UserNotFound` if absent.
    pub fn require(&self, user_id: UserId) -> Result<&User> {
        self.users
            .get(&user_id)
            .ok_or(GatewayError::UserNotFound(user_id))
    }

    /// Number of users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
