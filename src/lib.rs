//! In-memory identity-provider directory for tests.
//!
//! Simulates the administrative directory of an identity provider (groups,
//! users, group membership and group role assignments) so that code written
//! against a real provider client can be exercised without network access,
//! credentials or a live tenant. Success and failure conditions follow the
//! real service for every emulated operation.
//!
//! # Core Components
//!
//! - [`MockClient`] - Shared async handle exposing the real client's methods
//! - [`storage::UserStore`] / [`storage::GroupStore`] - The synchronous stores
//!   holding the directory state and enforcing its rules
//! - [`DirectoryError`] - Failure kinds reported by every operation
//!
//! # Quick Start
//!
//! ```rust
//! use idp_directory_mock::{ErrorKind, MockClient};
//! use idp_directory_mock::resource::{AssignRoleRequest, Group, RequestContext};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = MockClient::new();
//! let ctx = RequestContext::with_generated_id();
//!
//! let group = client.create_group(&ctx, Group::from_name("Engineers")).await?;
//! let user = client.create_user(&ctx, "a@x.com").await?;
//! client.add_user_to_group(&ctx, &group.id, &user.id).await?;
//!
//! let role = AssignRoleRequest::new("APP_ADMIN");
//! client.assign_role_to_group(&ctx, &group.id, role.clone(), None).await?;
//! let err = client
//!     .assign_role_to_group(&ctx, &group.id, role, None)
//!     .await
//!     .unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DuplicateRole);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod resource;
pub mod storage;

pub use client::{MockClient, MockClientBuilder};
pub use config::DirectoryConfig;
pub use error::{ConfigError, DirectoryError, DirectoryResult, ErrorKind};
pub use resource::{AssignRoleRequest, Group, QueryParams, RequestContext, Role, RoleType, User};
pub use storage::{DirectoryStats, GroupStore, UserStore};
