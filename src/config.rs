//! Configuration for the simulated directory.
//!
//! The defaults reproduce the behaviour of the real service. Tests that want a
//! stricter double (for example, idempotent membership adds) can override
//! individual settings in code or load them from JSON.
//!
//! ```rust
//! use idp_directory_mock::config::DirectoryConfig;
//!
//! let config = DirectoryConfig::from_json_str(r#"{"idempotent_membership": true}"#).unwrap();
//! assert_eq!(config.max_group_name_length, 255);
//! assert!(config.idempotent_membership);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Longest group name the real service accepts.
pub const DEFAULT_MAX_GROUP_NAME_LENGTH: usize = 255;

/// Settings shared by the directory stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Upper bound (inclusive, in characters) on group name length.
    pub max_group_name_length: usize,

    /// When set, adding a user that is already a member leaves the membership
    /// unchanged instead of recording a second entry.
    pub idempotent_membership: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            max_group_name_length: DEFAULT_MAX_GROUP_NAME_LENGTH,
            idempotent_membership: false,
        }
    }
}

impl DirectoryConfig {
    /// Parse and validate a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings describe a usable directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_group_name_length == 0 {
            return Err(ConfigError::Invalid {
                message: "max_group_name_length must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
