//! Wallet manager for balance reads and admin credits.

use crate::errors::{ArenaError, ArenaResult};
use crate::identity::models::Identity;
use crate::store::Store;
use std::sync::Arc;

/// Wallet manager
///
/// Balances are non-negative integers. Credits are the only external
/// mutation; the only debit in the system happens inside the join
/// transaction, which is why this manager exposes no debit method.
#[derive(Clone)]
pub struct WalletManager {
    store: Arc<Store>,
}

impl WalletManager {
    /// Create a new wallet manager over the shared store
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Balance of an identity
    ///
    /// Zero for an identity never credited; reading a balance is never an
    /// error.
    pub async fn balance_of(&self, identity: &Identity) -> i64 {
        self.store.read().await.balance_of(identity)
    }

    /// Credit a target wallet
    ///
    /// Admin-only and strictly additive. A zero amount is a legal no-op that
    /// still requires the admin role. Role check and balance update happen
    /// under the same write guard.
    ///
    /// # Arguments
    ///
    /// * `caller` - Identity invoking the credit, must hold the admin role
    /// * `target` - Wallet to credit; created implicitly on first credit
    /// * `amount` - Non-negative amount to add
    ///
    /// # Returns
    ///
    /// * `ArenaResult<i64>` - New balance of the target wallet
    ///
    /// # Errors
    ///
    /// * `ArenaError::Unauthorized` - Caller does not hold the admin role
    /// * `ArenaError::InvalidAmount` - Amount is negative, or the target
    ///   balance cannot represent the sum
    pub async fn credit(
        &self,
        caller: &Identity,
        target: &Identity,
        amount: i64,
    ) -> ArenaResult<i64> {
        let mut state = self.store.write().await;
        state.ensure_admin(caller)?;

        if amount < 0 {
            return Err(ArenaError::InvalidAmount(amount));
        }

        let current = state.balance_of(target);
        let new_balance = current
            .checked_add(amount)
            .ok_or(ArenaError::InvalidAmount(amount))?;
        state.balances.insert(target.clone(), new_balance);

        log::info!("Credited {amount} to {target}, balance now {new_balance}");
        Ok(new_balance)
    }
}
