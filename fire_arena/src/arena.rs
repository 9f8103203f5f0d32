//! The [`Arena`] facade: one entry point over every declared operation.
//!
//! Servers and tests construct a single `Arena` and call its methods; the
//! facade wires the domain managers over one shared [`Store`](crate::store::Store)
//! and maps internal records to public views. It adds no logic of its own
//! beyond delegation, so the invariants live where they are enforced: in the
//! managers and the join coordinator.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::ArenaConfig;
use crate::errors::ArenaResult;
use crate::identity::{Identity, IdentityManager, ProfileUpdate, PublicUserProfileView, Role};
use crate::store::Store;
use crate::tournament::{JoinCoordinator, PublicTournamentDetails, TournamentId, TournamentManager};
use crate::wallet::WalletManager;

/// Facade over the tournament, wallet, and identity domains.
///
/// All managers share the same underlying store, so a command issued through
/// one manager is immediately visible to reads through any other.
///
/// ## Example
///
/// ```
/// use fire_arena::{Arena, ArenaConfig};
/// use fire_arena::identity::Identity;
///
/// #[tokio::main]
/// async fn main() {
///     let admin = Identity::new("root-admin");
///     let arena = Arena::new(ArenaConfig {
///         bootstrap_admins: vec![admin.clone()],
///     });
///
///     let id = arena
///         .admin_create_tournament(&admin, "Friday Cup".to_string(), 100, chrono::Utc::now(), Some(48))
///         .await
///         .unwrap();
///     assert_eq!(arena.list_tournaments().await.len(), 1);
///     assert!(arena.tournament_details(id).await.is_ok());
/// }
/// ```
#[derive(Clone)]
pub struct Arena {
    identities: IdentityManager,
    wallets: WalletManager,
    tournaments: TournamentManager,
    joins: JoinCoordinator,
}

impl Arena {
    /// Builds the shared store (seeding bootstrap admins from `config`) and
    /// wires every manager over it.
    pub fn new(config: ArenaConfig) -> Self {
        let store = Arc::new(Store::new(&config));
        Self {
            identities: IdentityManager::new(Arc::clone(&store)),
            wallets: WalletManager::new(Arc::clone(&store)),
            tournaments: TournamentManager::new(Arc::clone(&store)),
            joins: JoinCoordinator::new(store),
        }
    }

    // Admin commands.

    /// Creates a tournament. Admin-only; returns the new sequential id.
    pub async fn admin_create_tournament(
        &self,
        caller: &Identity,
        name: String,
        entry_fee: i64,
        start_time: DateTime<Utc>,
        max_participants: Option<usize>,
    ) -> ArenaResult<TournamentId> {
        self.tournaments
            .create(caller, name, entry_fee, start_time, max_participants)
            .await
    }

    /// Credits a wallet. Admin-only; returns the target's new balance.
    pub async fn admin_credit_wallet(
        &self,
        caller: &Identity,
        target: &Identity,
        amount: i64,
    ) -> ArenaResult<i64> {
        self.wallets.credit(caller, target, amount).await
    }

    /// Assigns a role to `target`. Admin-only.
    pub async fn assign_user_role(
        &self,
        caller: &Identity,
        target: &Identity,
        role: Role,
    ) -> ArenaResult<()> {
        self.identities.assign_role(caller, target, role).await
    }

    // Identity and profile reads/writes.

    /// Returns the public profile view, or `None` if the identity has never
    /// saved one.
    pub async fn user_profile(&self, identity: &Identity) -> Option<PublicUserProfileView> {
        self.identities.profile_of(identity).await
    }

    /// Creates or updates the caller's own profile.
    pub async fn save_user_profile(
        &self,
        caller: &Identity,
        update: ProfileUpdate,
    ) -> ArenaResult<PublicUserProfileView> {
        self.identities.save_profile(caller, update).await
    }

    /// Returns the identity's role, `Role::User` if never assigned.
    pub async fn user_role(&self, identity: &Identity) -> Role {
        self.identities.role_of(identity).await
    }

    /// Whether the identity currently holds the admin role.
    pub async fn is_admin(&self, identity: &Identity) -> bool {
        self.identities.is_admin(identity).await
    }

    // Wallet reads.

    /// Returns the identity's balance, 0 if never credited.
    pub async fn wallet_balance(&self, identity: &Identity) -> i64 {
        self.wallets.balance_of(identity).await
    }

    // Tournament reads.

    /// Returns the public view of one tournament.
    pub async fn tournament_details(
        &self,
        id: TournamentId,
    ) -> ArenaResult<PublicTournamentDetails> {
        self.tournaments.get(id).await
    }

    /// Snapshot of all tournaments in creation order. List position equals
    /// tournament id.
    pub async fn list_tournaments(&self) -> Vec<PublicTournamentDetails> {
        self.tournaments.list().await
    }

    // The join transaction.

    /// Joins the caller into a tournament, debiting the entry fee atomically.
    /// Returns the post-debit balance.
    pub async fn join_tournament(
        &self,
        caller: &Identity,
        tournament_id: TournamentId,
    ) -> ArenaResult<i64> {
        self.joins.join(caller, tournament_id).await
    }
}
