//! Tournament manager for admin-gated creation and public views.

use super::models::{PublicTournamentDetails, StoredTournament, TournamentId};
use crate::errors::{ArenaError, ArenaResult};
use crate::identity::models::Identity;
use crate::store::Store;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    store: Arc<Store>,
}

impl TournamentManager {
    /// Create a new tournament manager over the shared store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Create a tournament
    ///
    /// Admin-only. Ids are assigned sequentially from 0 in creation order and
    /// equal the tournament's position in [`list`](Self::list). Tournaments
    /// are immutable after creation except for participant growth through
    /// joins, and are never deleted.
    ///
    /// # Errors
    ///
    /// * `ArenaError::Unauthorized` - Caller does not hold the admin role
    /// * `ArenaError::InvalidAmount` - Entry fee is negative
    pub async fn create(
        &self,
        caller: &Identity,
        name: String,
        entry_fee: i64,
        start_time: DateTime<Utc>,
        max_participants: Option<usize>,
    ) -> ArenaResult<TournamentId> {
        let mut state = self.store.write().await;
        state.ensure_admin(caller)?;

        if entry_fee < 0 {
            return Err(ArenaError::InvalidAmount(entry_fee));
        }

        let id = state.tournaments.len() as TournamentId;
        log::info!("Creating tournament {id} ({name}), entry fee {entry_fee}");
        state.tournaments.push(StoredTournament::new(
            name,
            entry_fee,
            start_time,
            max_participants,
            Utc::now(),
        ));

        Ok(id)
    }

    /// Public view of a tournament
    ///
    /// # Errors
    ///
    /// * `ArenaError::NotFound` - Unknown tournament id
    pub async fn get(&self, id: TournamentId) -> ArenaResult<PublicTournamentDetails> {
        self.store
            .read()
            .await
            .tournament(id)
            .map(StoredTournament::to_public)
    }

    /// Creation-ordered snapshot of all tournaments
    ///
    /// Full snapshot, no pagination; a tournament's position in the returned
    /// sequence is its id.
    pub async fn list(&self) -> Vec<PublicTournamentDetails> {
        self.store
            .read()
            .await
            .tournaments
            .iter()
            .map(StoredTournament::to_public)
            .collect()
    }
}
