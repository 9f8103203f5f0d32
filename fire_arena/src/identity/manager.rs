//! Identity manager for role assignment and profile upserts.

use super::models::{Identity, ProfileUpdate, PublicUserProfileView, Role, UserProfile};
use crate::errors::ArenaResult;
use crate::store::Store;
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::sync::Arc;

/// Identity manager
#[derive(Clone)]
pub struct IdentityManager {
    store: Arc<Store>,
}

impl IdentityManager {
    /// Create a new identity manager over the shared store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Role of an identity, `user` when never assigned
    pub async fn role_of(&self, identity: &Identity) -> Role {
        self.store.read().await.role_of(identity)
    }

    /// Whether the identity currently holds the admin role
    pub async fn is_admin(&self, identity: &Identity) -> bool {
        self.store.read().await.is_admin(identity)
    }

    /// Assign a role to a target identity
    ///
    /// Admin-only. The caller's role is checked under the same write guard as
    /// the assignment, so a concurrent demotion of the caller cannot land
    /// between check and commit. The target may be any identity, including
    /// the caller.
    ///
    /// # Errors
    ///
    /// * `ArenaError::Unauthorized` - Caller does not hold the admin role
    pub async fn assign_role(
        &self,
        caller: &Identity,
        target: &Identity,
        role: Role,
    ) -> ArenaResult<()> {
        let mut state = self.store.write().await;
        state.ensure_admin(caller)?;
        state.roles.insert(target.clone(), role);

        log::info!("Role {role} assigned to {target} by {caller}");
        Ok(())
    }

    /// Saved profile of an identity, if any
    ///
    /// `None` means the identity has never saved a profile, which is a
    /// distinct state from a profile with empty fields.
    pub async fn profile_of(&self, identity: &Identity) -> Option<PublicUserProfileView> {
        self.store
            .read()
            .await
            .profiles
            .get(identity)
            .map(UserProfile::to_public)
    }

    /// Create or update the caller's profile
    ///
    /// The first save stamps `created_at`; every save stamps `updated_at` and
    /// replaces both optional fields wholesale from the payload. Profiles are
    /// never deleted.
    pub async fn save_profile(
        &self,
        caller: &Identity,
        update: ProfileUpdate,
    ) -> ArenaResult<PublicUserProfileView> {
        let mut state = self.store.write().await;
        let now = Utc::now();

        let profile = match state.profiles.entry(caller.clone()) {
            Entry::Occupied(entry) => {
                let profile = entry.into_mut();
                profile.free_fire_uid = update.free_fire_uid;
                profile.display_name = update.display_name;
                // updated_at never moves before created_at, even if the clock does.
                profile.updated_at = now.max(profile.created_at);
                profile
            }
            Entry::Vacant(entry) => entry.insert(UserProfile {
                free_fire_uid: update.free_fire_uid,
                display_name: update.display_name,
                created_at: now,
                updated_at: now,
            }),
        };

        log::debug!("Profile saved for {caller}");
        Ok(profile.to_public())
    }
}
