//! Shared in-memory state store.
//!
//! All mutable core state lives in one [`CoreState`] value guarded by a
//! single `tokio::sync::RwLock`, the global serialization point for every
//! ledger and tournament mutation. Managers hold an `Arc<Store>` and acquire
//! the write guard once per command, performing all validation and mutation
//! synchronously under it, so a command's checks can never race its commit.
//! Readers take the read guard and only ever observe committed state.

use crate::config::ArenaConfig;
use crate::errors::{ArenaError, ArenaResult};
use crate::identity::models::{Identity, Role, UserProfile};
use crate::tournament::models::{StoredTournament, TournamentId};
use std::collections::HashMap;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The complete mutable state of the arena
///
/// Fields are crate-private; outside the crate all access goes through the
/// managers and the facade, which return public views only.
#[derive(Debug, Default)]
pub struct CoreState {
    /// Assigned roles; identities absent here have the default role
    pub(crate) roles: HashMap<Identity, Role>,
    /// Saved profiles; absence means the identity never saved one
    pub(crate) profiles: HashMap<Identity, UserProfile>,
    /// Wallet balances; identities absent here have a balance of zero
    pub(crate) balances: HashMap<Identity, i64>,
    /// Tournaments in creation order; a tournament's id is its index
    pub(crate) tournaments: Vec<StoredTournament>,
}

impl CoreState {
    /// Role of an identity, `user` when never assigned
    pub fn role_of(&self, identity: &Identity) -> Role {
        self.roles.get(identity).copied().unwrap_or_default()
    }

    /// Whether the identity currently holds the admin role
    pub fn is_admin(&self, identity: &Identity) -> bool {
        self.role_of(identity) == Role::Admin
    }

    /// Fail with `Unauthorized` unless the caller is currently an admin
    ///
    /// Every admin-gated command calls this under the same guard as its
    /// mutation, so a concurrent demotion cannot slip between check and
    /// commit.
    pub fn ensure_admin(&self, caller: &Identity) -> ArenaResult<()> {
        if self.is_admin(caller) {
            Ok(())
        } else {
            log::warn!("Denied admin action for {caller}");
            Err(ArenaError::Unauthorized)
        }
    }

    /// Balance of an identity, zero when never credited
    pub fn balance_of(&self, identity: &Identity) -> i64 {
        self.balances.get(identity).copied().unwrap_or(0)
    }

    /// Tournament by id; negative and past-end ids are both unknown
    pub fn tournament(&self, id: TournamentId) -> ArenaResult<&StoredTournament> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.tournaments.get(index))
            .ok_or(ArenaError::NotFound(id))
    }

    /// Mutable tournament by id
    pub(crate) fn tournament_mut(&mut self, id: TournamentId) -> ArenaResult<&mut StoredTournament> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.tournaments.get_mut(index))
            .ok_or(ArenaError::NotFound(id))
    }
}

/// Handle to the shared state
///
/// Cheap to clone behind an `Arc`; every manager and the join coordinator
/// hold the same store.
#[derive(Debug)]
pub struct Store {
    state: RwLock<CoreState>,
}

impl Store {
    /// Create a store seeded with the configured bootstrap admins
    pub fn new(config: &ArenaConfig) -> Self {
        let mut state = CoreState::default();
        for admin in &config.bootstrap_admins {
            state.roles.insert(admin.clone(), Role::Admin);
        }
        if !config.bootstrap_admins.is_empty() {
            log::info!(
                "Seeded {} bootstrap admin(s)",
                config.bootstrap_admins.len()
            );
        }

        Self {
            state: RwLock::new(state),
        }
    }

    /// Shared read access to committed state
    pub async fn read(&self) -> RwLockReadGuard<'_, CoreState> {
        self.state.read().await
    }

    /// Exclusive write access; the guard is the transaction boundary
    ///
    /// Holders must not `.await` while the guard is live.
    pub async fn write(&self) -> RwLockWriteGuard<'_, CoreState> {
        self.state.write().await
    }
}
