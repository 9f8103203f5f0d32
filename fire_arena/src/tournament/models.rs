//! Tournament data models and public wire views.

use crate::identity::models::Identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tournament ID type
///
/// Ids are assigned sequentially from 0 in creation order and equal the
/// tournament's position in the listing; clients address tournaments by that
/// position, which is why tournaments are never deleted or reordered.
pub type TournamentId = i64;

/// Stored tournament record
///
/// Immutable after creation except for participant-set growth through the
/// join transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredTournament {
    /// Display name
    pub name: String,
    /// Entry fee deducted on join, non-negative
    pub entry_fee: i64,
    /// Scheduled start time
    pub start_time: DateTime<Utc>,
    /// Participant cap; `None` means uncapped (distinct from a cap of zero)
    pub max_participants: Option<usize>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Joined identities, never exposed in public views
    participants: HashSet<Identity>,
}

impl StoredTournament {
    /// Create a tournament with an empty participant set
    pub fn new(
        name: String,
        entry_fee: i64,
        start_time: DateTime<Utc>,
        max_participants: Option<usize>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name,
            entry_fee,
            start_time,
            max_participants,
            created_at,
            participants: HashSet::new(),
        }
    }

    /// Number of committed participants
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Whether the identity has already joined
    pub fn is_member(&self, identity: &Identity) -> bool {
        self.participants.contains(identity)
    }

    /// Whether the participant cap is reached (uncapped is never full)
    pub fn is_full(&self) -> bool {
        self.max_participants
            .is_some_and(|cap| self.participants.len() >= cap)
    }

    /// Add an identity to the participant set
    ///
    /// Returns `false` if the identity was already a member. Only the join
    /// transaction calls this, after its precondition checks.
    pub fn add_member(&mut self, identity: Identity) -> bool {
        self.participants.insert(identity)
    }

    /// Public wire view of this tournament
    ///
    /// Carries exactly the contract fields: no id (clients derive it from
    /// list position) and no participant data.
    pub fn to_public(&self) -> PublicTournamentDetails {
        PublicTournamentDetails {
            name: self.name.clone(),
            entry_fee: self.entry_fee,
            start_time: self.start_time,
            created_at: self.created_at,
            max_participants: self.max_participants,
        }
    }
}

/// Public tournament view
///
/// Timestamps travel as integer nanoseconds since epoch; an absent
/// participant cap is omitted rather than sent as null or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicTournamentDetails {
    /// Display name
    pub name: String,
    /// Entry fee deducted on join
    pub entry_fee: i64,
    /// Scheduled start time
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub start_time: DateTime<Utc>,
    /// Creation timestamp
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub created_at: DateTime<Utc>,
    /// Participant cap, omitted when uncapped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tournament(max_participants: Option<usize>) -> StoredTournament {
        let now = Utc::now();
        StoredTournament::new("Cup".to_string(), 100, now, max_participants, now)
    }

    #[test]
    fn test_membership_is_a_set() {
        let mut t = sample_tournament(None);
        let ada = Identity::new("ada");

        assert!(!t.is_member(&ada));
        assert!(t.add_member(ada.clone()));
        assert!(t.is_member(&ada));
        assert_eq!(t.participant_count(), 1);

        // Inserting the same identity again does not grow the set.
        assert!(!t.add_member(ada));
        assert_eq!(t.participant_count(), 1);
    }

    #[test]
    fn test_capacity_semantics() {
        let mut t = sample_tournament(Some(2));
        assert!(!t.is_full());

        t.add_member(Identity::new("a"));
        assert!(!t.is_full());
        t.add_member(Identity::new("b"));
        assert!(t.is_full());

        // A cap of zero is a valid, always-full tournament.
        let zero_cap = sample_tournament(Some(0));
        assert!(zero_cap.is_full());

        // No cap is never full.
        let mut uncapped = sample_tournament(None);
        for i in 0..100 {
            uncapped.add_member(Identity::new(format!("user-{i}")));
        }
        assert!(!uncapped.is_full());
    }

    #[test]
    fn test_public_view_has_no_id_and_no_participants() {
        let mut t = sample_tournament(Some(8));
        t.add_member(Identity::new("ada"));

        let json: serde_json::Value = serde_json::to_value(t.to_public()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(
            obj.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["createdAt", "entryFee", "maxParticipants", "name", "startTime"]
        );
        assert!(obj.get("id").is_none());
        assert!(obj.get("participants").is_none());
    }

    #[test]
    fn test_public_view_wire_shape() {
        let start = chrono::DateTime::from_timestamp_nanos(1_800_000_000_000_000_000);
        let created = chrono::DateTime::from_timestamp_nanos(1_750_000_000_000_000_042);
        let t = StoredTournament::new("Cup".to_string(), 100, start, None, created);

        let json: serde_json::Value = serde_json::to_value(t.to_public()).unwrap();
        assert_eq!(json["name"], "Cup");
        assert_eq!(json["entryFee"], 100);
        assert_eq!(json["startTime"], 1_800_000_000_000_000_000_i64);
        assert_eq!(json["createdAt"], 1_750_000_000_000_000_042_i64);
        // Uncapped tournaments omit the field entirely.
        assert!(json.get("maxParticipants").is_none());
    }
}
