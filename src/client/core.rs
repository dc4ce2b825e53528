//! Core client structure and initialization.
//!
//! This module contains the [`MockClient`] handle and the directory state it
//! guards, without the forwarded operations themselves.

use crate::client::builder::MockClientBuilder;
use crate::config::DirectoryConfig;
use crate::storage::{DirectoryStats, GroupStore, UserStore};
use log::info;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Both stores plus the configuration they were built from.
#[derive(Debug)]
pub(crate) struct Directory {
    pub(crate) users: UserStore,
    pub(crate) groups: GroupStore,
    pub(crate) config: DirectoryConfig,
}

impl Directory {
    pub(crate) fn new(config: DirectoryConfig) -> Self {
        Self {
            users: UserStore::new(),
            groups: GroupStore::with_config(&config),
            config,
        }
    }
}

/// In-memory stand-in for an identity-provider administration client.
///
/// Cloning is cheap: every clone shares the same directory. All operations
/// take the directory lock for their full duration, so each call is atomic
/// with respect to calls made through other clones.
///
/// # Examples
///
/// ```rust
/// use idp_directory_mock::MockClient;
/// use idp_directory_mock::resource::{Group, RequestContext};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = MockClient::new();
/// let ctx = RequestContext::with_generated_id();
///
/// let group = client.create_group(&ctx, Group::from_name("Engineers")).await?;
/// let groups = client.list_groups(&ctx, None).await?;
/// assert_eq!(groups, vec![group]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockClient {
    pub(super) state: Arc<RwLock<Directory>>,
}

impl MockClient {
    /// Create a client over an empty directory with default settings.
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    /// Create a client over an empty directory with the given settings.
    pub fn with_config(config: DirectoryConfig) -> Self {
        Self::from_directory(Directory::new(config))
    }

    /// Start building a client with configuration and seed data.
    pub fn builder() -> MockClientBuilder {
        MockClientBuilder::new()
    }

    pub(crate) fn from_directory(directory: Directory) -> Self {
        Self {
            state: Arc::new(RwLock::new(directory)),
        }
    }

    /// The settings this client's directory was created with.
    pub async fn config(&self) -> DirectoryConfig {
        self.state.read().await.config.clone()
    }

    /// Get directory statistics for debugging and assertions.
    pub async fn stats(&self) -> DirectoryStats {
        let directory = self.state.read().await;
        DirectoryStats::collect(&directory.users, &directory.groups)
    }

    /// Drop every record and restart id sequences, keeping the configuration.
    pub async fn clear(&self) {
        let mut directory = self.state.write().await;
        let config = directory.config.clone();
        *directory = Directory::new(config);
        info!("Cleared directory");
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}
