//! Join transaction coordinator.
//!
//! The join transaction is the only multi-entity write in the system: it
//! binds a wallet debit to a membership addition. Both effects commit under
//! one write guard with no interior await, so no reader or concurrent join
//! can ever observe a debited balance without the matching membership, or
//! vice versa.

use super::models::TournamentId;
use crate::errors::{ArenaError, ArenaResult};
use crate::identity::models::Identity;
use crate::store::Store;
use std::sync::Arc;

/// Join transaction coordinator
#[derive(Clone)]
pub struct JoinCoordinator {
    store: Arc<Store>,
}

impl JoinCoordinator {
    /// Create a new join coordinator over the shared store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Join a tournament, debiting its entry fee from the caller's wallet
    ///
    /// Validates and commits as one indivisible unit of work. Checks run in
    /// contract order, so the first violated precondition determines the
    /// reported error; a failed join leaves every balance and participant set
    /// untouched. Retrying after a success fails `AlreadyJoined` against
    /// committed state, so a caller can never be double-charged.
    ///
    /// Joining is one-way: the contract has no leave or refund path, and
    /// `startTime` does not gate joining.
    ///
    /// # Returns
    ///
    /// * `ArenaResult<i64>` - Caller's balance after the debit
    ///
    /// # Errors
    ///
    /// In check order:
    ///
    /// * `ArenaError::NotFound` - Unknown tournament id
    /// * `ArenaError::ProfileRequired` - Caller has never saved a profile
    /// * `ArenaError::UidRequired` - Caller's profile has no usable Free Fire UID
    /// * `ArenaError::AlreadyJoined` - Caller is already a participant
    /// * `ArenaError::TournamentFull` - Participant cap reached
    /// * `ArenaError::InsufficientBalance` - Balance below the entry fee
    pub async fn join(&self, caller: &Identity, tournament_id: TournamentId) -> ArenaResult<i64> {
        // Acquire the write guard upfront for atomic check-then-commit.
        // Validation always runs against current committed state: two joins
        // racing for the last slot or the same balance serialize here.
        let mut state = self.store.write().await;

        let tournament = state.tournament(tournament_id)?;
        let entry_fee = tournament.entry_fee;

        let profile = state
            .profiles
            .get(caller)
            .ok_or(ArenaError::ProfileRequired)?;
        if !profile.has_free_fire_uid() {
            return Err(ArenaError::UidRequired);
        }

        if tournament.is_member(caller) {
            return Err(ArenaError::AlreadyJoined);
        }

        if tournament.is_full() {
            return Err(ArenaError::TournamentFull);
        }

        let available = state.balance_of(caller);
        if available < entry_fee {
            return Err(ArenaError::InsufficientBalance {
                available,
                required: entry_fee,
            });
        }

        // Commit. Both writes land under the guard that validated them.
        let new_balance = available - entry_fee;
        state.balances.insert(caller.clone(), new_balance);
        state.tournament_mut(tournament_id)?.add_member(caller.clone());

        log::info!(
            "{caller} joined tournament {tournament_id}, paid {entry_fee}, balance now {new_balance}"
        );
        Ok(new_balance)
    }
}
