//! Arena configuration.
//!
//! Consolidates environment variable reads for the core library and provides
//! validated configuration.

use crate::identity::models::Identity;
use std::collections::HashSet;

/// Core configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct ArenaConfig {
    /// Identities granted the admin role at store construction
    ///
    /// Role assignment is otherwise admin-only, so a fresh deployment with an
    /// empty list has no admin and no way to mint one until restarted with
    /// this set.
    pub bootstrap_admins: Vec<Identity>,
}

impl ArenaConfig {
    /// Load configuration from environment variables
    ///
    /// `ARENA_BOOTSTRAP_ADMINS` is a comma-separated list of identity
    /// strings; surrounding whitespace and empty segments are ignored.
    pub fn from_env() -> Self {
        let bootstrap_admins = std::env::var("ARENA_BOOTSTRAP_ADMINS")
            .ok()
            .map(|raw| parse_admin_list(&raw))
            .unwrap_or_default();

        Self { bootstrap_admins }
    }

    /// Validate configuration after loading
    ///
    /// An empty admin list is valid (read-and-join-only deployment); a
    /// duplicated identity is a configuration mistake and rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for admin in &self.bootstrap_admins {
            if !seen.insert(admin) {
                return Err(ConfigError::Invalid {
                    var: "ARENA_BOOTSTRAP_ADMINS".to_string(),
                    reason: format!("duplicate identity {admin}"),
                });
            }
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn parse_admin_list(raw: &str) -> Vec<Identity> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Identity::from)
        .collect()
}
