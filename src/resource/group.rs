//! Group records and the bare group value used to request creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of group. Groups created through the directory are always native
/// groups; the other kinds appear in bodies read from the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GroupType {
    #[default]
    OktaGroup,
    AppGroup,
    BuiltIn,
}

/// A directory group.
///
/// A value built with [`Group::from_name`] is a creation request: its id is
/// empty and its timestamps are unset until the group store accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub id: String,
    pub profile: GroupProfile,
    #[serde(rename = "type", default)]
    pub group_type: GroupType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_membership_updated: Option<DateTime<Utc>>,
}

/// Profile attributes of a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupProfile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Group {
    /// Build a bare group with the given name. No validation happens here.
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            profile: GroupProfile {
                name: name.into(),
                description: None,
            },
            group_type: GroupType::default(),
            created: None,
            last_membership_updated: None,
        }
    }

    /// Attach a description to a bare group.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.profile.description = Some(description.into());
        self
    }

    /// The group's name.
    pub fn name(&self) -> &str {
        &self.profile.name
    }
}
