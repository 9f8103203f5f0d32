//! Identity, role, and profile data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque caller identity
///
/// Issued and authenticated by the upstream identity layer; the core never
/// inspects its contents beyond equality and hashing. Two calls carry the
/// same caller exactly when their identities compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wrap an upstream-resolved identity string
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw identity string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Role assigned to an identity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May create tournaments, credit wallets, and assign roles
    Admin,
    /// Default role for any identity never assigned one
    #[default]
    User,
    /// Read-only visitor
    Guest,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::Guest => "guest",
        };
        f.write_str(name)
    }
}

/// Stored user profile
///
/// Exists only after its owning identity has saved one; absence is a distinct
/// state from a profile with empty fields.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    /// Externally-issued game account id
    pub free_fire_uid: Option<String>,
    /// Display name chosen by the user
    pub display_name: Option<String>,
    /// First save timestamp
    pub created_at: DateTime<Utc>,
    /// Last save timestamp, never before `created_at`
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Whether the profile carries a usable (present and non-empty) game uid
    pub fn has_free_fire_uid(&self) -> bool {
        self.free_fire_uid.as_deref().is_some_and(|uid| !uid.is_empty())
    }

    /// Public wire view of this profile
    pub fn to_public(&self) -> PublicUserProfileView {
        PublicUserProfileView {
            free_fire_uid: self.free_fire_uid.clone(),
            display_name: self.display_name.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Public profile view
///
/// Timestamps travel as integer nanoseconds since epoch; optional fields are
/// omitted when absent rather than sent as null or empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserProfileView {
    /// Externally-issued game account id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_fire_uid: Option<String>,
    /// Display name chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// First save timestamp
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: DateTime<Utc>,
    /// Last save timestamp
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub updated_at: DateTime<Utc>,
}

/// Profile save payload
///
/// A save replaces both optional fields wholesale: a field absent from the
/// payload becomes absent on the stored profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Externally-issued game account id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_fire_uid: Option<String>,
    /// Display name chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_serializes_transparently() {
        let id = Identity::new("aaaaa-bbbbb-ccccc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"aaaaa-bbbbb-ccccc\"");

        let back: Identity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_role_wire_format_is_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Guest).unwrap(), "\"guest\"");

        let role: Role = serde_json::from_str("\"guest\"").unwrap();
        assert_eq!(role, Role::Guest);
    }

    #[test]
    fn test_default_role_is_user() {
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_profile_view_uses_nanosecond_timestamps() {
        let created = chrono::DateTime::from_timestamp_nanos(1_700_000_000_000_000_123);
        let view = PublicUserProfileView {
            free_fire_uid: Some("FF123".to_string()),
            display_name: None,
            created_at: created,
            updated_at: created,
        };

        let json: serde_json::Value = serde_json::to_value(&view).unwrap();
        assert_eq!(json["createdAt"], 1_700_000_000_000_000_123_i64);
        assert_eq!(json["freeFireUid"], "FF123");
        // Absent optional fields are omitted entirely, not nulled.
        assert!(json.get("displayName").is_none());
    }

    #[test]
    fn test_profile_update_missing_fields_deserialize_as_absent() {
        let update: ProfileUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update.free_fire_uid, None);
        assert_eq!(update.display_name, None);

        let update: ProfileUpdate =
            serde_json::from_str(r#"{"freeFireUid":"FF1","displayName":"Ada"}"#).unwrap();
        assert_eq!(update.free_fire_uid.as_deref(), Some("FF1"));
        assert_eq!(update.display_name.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_uid_presence_requires_non_empty() {
        let now = Utc::now();
        let mut profile = UserProfile {
            free_fire_uid: None,
            display_name: None,
            created_at: now,
            updated_at: now,
        };
        assert!(!profile.has_free_fire_uid());

        profile.free_fire_uid = Some(String::new());
        assert!(!profile.has_free_fire_uid());

        profile.free_fire_uid = Some("FF9".to_string());
        assert!(profile.has_free_fire_uid());
    }
}
