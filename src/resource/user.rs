//! User records as the directory returns them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status given to every user the directory creates.
pub const USER_STATUS_ACTIVE: &str = "ACTIVE";

/// A registered directory user.
///
/// Users are created by the user store and never change afterwards. The email
/// is the only profile attribute modelled and is unique across the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub status: String,
    pub created: DateTime<Utc>,
    pub profile: UserProfile,
}

/// Profile attributes of a [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
}

impl User {
    pub(crate) fn new(id: String, email: String) -> Self {
        Self {
            id,
            status: USER_STATUS_ACTIVE.to_string(),
            created: Utc::now(),
            profile: UserProfile { email },
        }
    }

    /// The user's email address.
    pub fn email(&self) -> &str {
        &self.profile.email
    }
}
