//! Error types for directory operations.
//!
//! Every store and client operation reports failure through [`DirectoryError`].
//! The variants map one-to-one onto the failure conditions the real identity
//! provider reports for the emulated endpoints, so callers can assert on the
//! exact kind of failure without inspecting message text.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Errors returned by directory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Invalid group name: length {length} is outside 1..={max}")]
    InvalidName {
        /// The rejected group name
        name: String,
        /// Length of the rejected name in characters
        length: usize,
        /// Maximum accepted length
        max: usize,
    },

    #[error("Duplicate group name '{name}'")]
    DuplicateName {
        /// The name that is already taken
        name: String,
    },

    #[error("Duplicate user email '{email}'")]
    DuplicateEmail {
        /// The email that is already registered
        email: String,
    },

    #[error("Invalid role type '{role_type}'")]
    InvalidRole {
        /// The role type outside the administrative vocabulary
        role_type: String,
    },

    #[error("Role '{role_type}' is already assigned to group '{group_id}'")]
    DuplicateRole {
        /// The group that already holds the role
        group_id: String,
        /// The role type assigned twice
        role_type: String,
    },

    #[error("Resource not found: {resource_type} '{key}'")]
    NotFound {
        /// The kind of record looked up ("Group", "User", "Role")
        resource_type: String,
        /// The id, name or email the lookup used
        key: String,
    },
}

/// Discriminant of a [`DirectoryError`], convenient for assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidName,
    DuplicateName,
    DuplicateEmail,
    InvalidRole,
    DuplicateRole,
    NotFound,
}

impl DirectoryError {
    /// Create a not-found error for the given resource type and lookup key.
    pub fn not_found(resource_type: impl Into<String>, key: impl Into<String>) -> Self {
        DirectoryError::NotFound {
            resource_type: resource_type.into(),
            key: key.into(),
        }
    }

    /// Create an invalid-role error.
    pub fn invalid_role(role_type: impl Into<String>) -> Self {
        DirectoryError::InvalidRole {
            role_type: role_type.into(),
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::InvalidName { .. } => ErrorKind::InvalidName,
            DirectoryError::DuplicateName { .. } => ErrorKind::DuplicateName,
            DirectoryError::DuplicateEmail { .. } => ErrorKind::DuplicateEmail,
            DirectoryError::InvalidRole { .. } => ErrorKind::InvalidRole,
            DirectoryError::DuplicateRole { .. } => ErrorKind::DuplicateRole,
            DirectoryError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Whether this error reports a failed lookup.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

/// Errors raised while loading a [`DirectoryConfig`](crate::config::DirectoryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of the rejected setting
        message: String,
    },
}
