//! In-memory stores backing the simulated directory.
//!
//! The layer is split the way the directory itself is:
//!
//! - [`UserStore`] owns users and has no dependencies.
//! - [`GroupStore`] owns groups, memberships and role assignments, and borrows
//!   a [`UserStore`] to resolve user ids and emails during membership calls.
//!
//! Both stores are plain single-writer values: mutation requires `&mut self`
//! and no operation locks internally. The [`MockClient`](crate::client::MockClient)
//! facade adds the shared, lock-guarded handle.
//!
//! # Example Usage
//!
//! ```rust
//! use idp_directory_mock::resource::{AssignRoleRequest, Group};
//! use idp_directory_mock::storage::{GroupStore, UserStore};
//!
//! let mut users = UserStore::new();
//! let mut groups = GroupStore::new();
//!
//! let group = groups.create_group(Group::from_name("Engineers")).unwrap();
//! let user = users.create_user("a@x.com").unwrap();
//! groups.add_user_to_group(&users, &group.id, &user.id).unwrap();
//!
//! let members = groups.list_group_users(&users, &group.id).unwrap();
//! assert_eq!(members, vec![user]);
//!
//! groups
//!     .assign_role_to_group(&group.id, &AssignRoleRequest::new("APP_ADMIN"))
//!     .unwrap();
//! assert!(groups.group_contains_role(&group, "APP_ADMIN"));
//! ```

pub mod group_store;
pub mod user_store;

pub use group_store::GroupStore;
pub use user_store::UserStore;

/// Monotonic id source rendering ids as decimal strings.
///
/// Ids start at `"1"` and are never handed out twice, even after the record
/// holding an id has been deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the sequence and return the new id.
    pub fn next_id(&mut self) -> String {
        self.last += 1;
        self.last.to_string()
    }

    /// Number of ids handed out so far.
    pub fn issued(&self) -> u64 {
        self.last
    }
}

/// Statistics about the current state of the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryStats {
    /// Number of registered users
    pub user_count: usize,
    /// Number of live groups
    pub group_count: usize,
    /// Membership entries across all groups, duplicates included
    pub membership_count: usize,
    /// Role assignments across all groups
    pub role_assignment_count: usize,
}

impl DirectoryStats {
    /// Collect statistics from a pair of stores.
    pub fn collect(users: &UserStore, groups: &GroupStore) -> Self {
        Self {
            user_count: users.len(),
            group_count: groups.len(),
            membership_count: groups.membership_count(),
            role_assignment_count: groups.role_assignment_count(),
        }
    }

    /// Check if the directory holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.user_count == 0 && self.group_count == 0
    }
}
