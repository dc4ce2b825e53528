//! Directory records and the value objects used to request changes.
//!
//! - [`User`] and [`Group`] are the entities the stores own.
//! - [`Role`] is a group role assignment; [`RoleType`] is the closed
//!   administrative vocabulary and [`AssignRoleRequest`] the unvalidated request.
//! - [`RequestContext`] and [`QueryParams`] mirror the real client's call shape.

pub mod context;
pub mod group;
pub mod role;
pub mod user;

pub use context::{QueryParams, RequestContext};
pub use group::{Group, GroupProfile, GroupType};
pub use role::{AssignRoleRequest, Role, RoleType};
pub use user::{User, UserProfile};
