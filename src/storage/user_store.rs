//! User store: the authoritative list of registered users.
//!
//! Users are kept in insertion order. Lookups are linear scans returning the
//! first match, which is all the simulated directory sizes ever need.

use crate::error::{DirectoryError, DirectoryResult};
use crate::resource::User;
use crate::storage::IdSequence;
use log::{debug, info};

/// Owns every user in the directory.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<User>,
    ids: IdSequence,
}

impl UserStore {
    /// Create an empty user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user with the given email.
    ///
    /// Fails with [`DirectoryError::DuplicateEmail`] when a user with exactly
    /// this email already exists.
    pub fn create_user(&mut self, email: &str) -> DirectoryResult<User> {
        if self.users.iter().any(|user| user.email() == email) {
            debug!("Rejecting user '{}': email already registered", email);
            return Err(DirectoryError::DuplicateEmail {
                email: email.to_string(),
            });
        }

        let user = User::new(self.ids.next_id(), email.to_string());
        info!("Created user '{}' with id '{}'", email, user.id);
        self.users.push(user.clone());
        Ok(user)
    }

    /// All users in insertion order.
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn get_user_by_email(&self, email: &str) -> DirectoryResult<&User> {
        self.users
            .iter()
            .find(|user| user.email() == email)
            .ok_or_else(|| DirectoryError::not_found("User", email))
    }

    pub fn get_user_by_id(&self, user_id: &str) -> DirectoryResult<&User> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| DirectoryError::not_found("User", user_id))
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
