//! Administrative roles and group role assignments.
//!
//! Role types form a closed vocabulary. A role assignment request carries the
//! type as a plain string so that callers can express (and tests can exercise)
//! requests outside the vocabulary; the group store rejects those with
//! [`DirectoryError::InvalidRole`].

use crate::error::DirectoryError;
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of an active role assignment.
pub const ROLE_STATUS_ACTIVE: &str = "ACTIVE";

/// Assignment type recorded for roles granted to a group.
pub const ASSIGNMENT_TYPE_GROUP: &str = "GROUP";

/// The fixed vocabulary of administrative roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleType {
    SuperAdmin,
    OrgAdmin,
    GroupAdmin,
    GroupMembershipAdmin,
    UserAdmin,
    AppAdmin,
    ReadOnlyAdmin,
    MobileAdmin,
    HelpDeskAdmin,
    ReportAdmin,
    ApiAccessManagementAdmin,
    Custom,
}

impl RoleType {
    /// Every role type, in the order the service documents them.
    pub const ALL: [RoleType; 12] = [
        RoleType::SuperAdmin,
        RoleType::OrgAdmin,
        RoleType::GroupAdmin,
        RoleType::GroupMembershipAdmin,
        RoleType::UserAdmin,
        RoleType::AppAdmin,
        RoleType::ReadOnlyAdmin,
        RoleType::MobileAdmin,
        RoleType::HelpDeskAdmin,
        RoleType::ReportAdmin,
        RoleType::ApiAccessManagementAdmin,
        RoleType::Custom,
    ];

    /// Pick a role type uniformly at random.
    pub fn random() -> Self {
        let index = rand::rng().random_range(0..Self::ALL.len());
        Self::ALL[index]
    }

    /// Wire name of the role type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::SuperAdmin => "SUPER_ADMIN",
            RoleType::OrgAdmin => "ORG_ADMIN",
            RoleType::GroupAdmin => "GROUP_ADMIN",
            RoleType::GroupMembershipAdmin => "GROUP_MEMBERSHIP_ADMIN",
            RoleType::UserAdmin => "USER_ADMIN",
            RoleType::AppAdmin => "APP_ADMIN",
            RoleType::ReadOnlyAdmin => "READ_ONLY_ADMIN",
            RoleType::MobileAdmin => "MOBILE_ADMIN",
            RoleType::HelpDeskAdmin => "HELP_DESK_ADMIN",
            RoleType::ReportAdmin => "REPORT_ADMIN",
            RoleType::ApiAccessManagementAdmin => "API_ACCESS_MANAGEMENT_ADMIN",
            RoleType::Custom => "CUSTOM",
        }
    }

    /// Display label the service reports for the role.
    pub fn label(&self) -> &'static str {
        match self {
            RoleType::SuperAdmin => "Super Administrator",
            RoleType::OrgAdmin => "Organizational Administrator",
            RoleType::GroupAdmin => "Group Administrator",
            RoleType::GroupMembershipAdmin => "Group Membership Administrator",
            RoleType::UserAdmin => "User Administrator",
            RoleType::AppAdmin => "Application Administrator",
            RoleType::ReadOnlyAdmin => "Read-only Administrator",
            RoleType::MobileAdmin => "Mobile Administrator",
            RoleType::HelpDeskAdmin => "Help Desk Administrator",
            RoleType::ReportAdmin => "Report Administrator",
            RoleType::ApiAccessManagementAdmin => "API Access Management Administrator",
            RoleType::Custom => "Custom",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = DirectoryError;

    /// Exact, case-sensitive match against the vocabulary.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoleType::ALL
            .into_iter()
            .find(|role_type| role_type.as_str() == s)
            .ok_or_else(|| DirectoryError::invalid_role(s))
    }
}

/// A role assigned to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    #[serde(rename = "type")]
    pub role_type: RoleType,
    pub label: String,
    pub status: String,
    pub assignment_type: String,
    pub created: DateTime<Utc>,
}

impl Role {
    pub(crate) fn assigned_to_group(id: String, role_type: RoleType) -> Self {
        Self {
            id,
            role_type,
            label: role_type.label().to_string(),
            status: ROLE_STATUS_ACTIVE.to_string(),
            assignment_type: ASSIGNMENT_TYPE_GROUP.to_string(),
            created: Utc::now(),
        }
    }
}

/// Request body for assigning a role to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRoleRequest {
    #[serde(rename = "type")]
    pub role_type: String,
}

impl AssignRoleRequest {
    /// Build a request for the given role type. No validation happens here.
    pub fn new(role_type: impl Into<String>) -> Self {
        Self {
            role_type: role_type.into(),
        }
    }

    /// A request for a randomly chosen administrative role.
    pub fn random_admin() -> Self {
        RoleType::random().into()
    }
}

impl From<RoleType> for AssignRoleRequest {
    fn from(role_type: RoleType) -> Self {
        Self::new(role_type.as_str())
    }
}
