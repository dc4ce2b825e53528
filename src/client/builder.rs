//! Builder pattern for configuring client instances.
//!
//! The builder collects a [`DirectoryConfig`] and seed data, then creates the
//! directory in one step. Seed records go through the regular store
//! operations, so seeding a duplicate email or an invalid group name fails the
//! build with the same error the operation would return.

use crate::client::core::{Directory, MockClient};
use crate::config::DirectoryConfig;
use crate::error::DirectoryResult;
use crate::resource::Group;
use log::debug;

/// Builder for [`MockClient`] instances.
///
/// # Examples
///
/// ```rust
/// use idp_directory_mock::MockClient;
///
/// let client = MockClient::builder()
///     .with_user("a@x.com")
///     .with_group("Engineers")
///     .with_member("Engineers", "a@x.com")
///     .build()
///     .unwrap();
/// # let _ = client;
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClientBuilder {
    config: DirectoryConfig,
    users: Vec<String>,
    groups: Vec<Group>,
    // (group name, user email)
    members: Vec<(String, String)>,
}

impl MockClientBuilder {
    /// Create a builder with default settings and no seed data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given directory settings.
    pub fn with_config(mut self, config: DirectoryConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed a user with the given email.
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Seed a group with the given name.
    pub fn with_group(self, name: impl Into<String>) -> Self {
        self.with_group_value(Group::from_name(name))
    }

    /// Seed a fully specified group value.
    pub fn with_group_value(mut self, group: Group) -> Self {
        self.groups.push(group);
        self
    }

    /// Seed a membership between a seeded group and a seeded user.
    pub fn with_member(mut self, group_name: impl Into<String>, email: impl Into<String>) -> Self {
        self.members.push((group_name.into(), email.into()));
        self
    }

    /// Create the client, applying seed data in order: users, groups, members.
    pub fn build(self) -> DirectoryResult<MockClient> {
        let mut directory = Directory::new(self.config);

        for email in &self.users {
            directory.users.create_user(email)?;
        }
        for group in self.groups {
            directory.groups.create_group(group)?;
        }
        for (group_name, email) in &self.members {
            let group_id = directory.groups.get_group_by_name(group_name)?.id.clone();
            let user_id = directory.users.get_user_by_email(email)?.id.clone();
            directory
                .groups
                .add_user_to_group(&directory.users, &group_id, &user_id)?;
        }

        debug!(
            "Built client with {} users and {} groups",
            directory.users.len(),
            directory.groups.len()
        );
        Ok(MockClient::from_directory(directory))
    }
}
