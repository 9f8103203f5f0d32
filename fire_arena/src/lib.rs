//! # Fire Arena
//!
//! A tournament and wallet ledger core for a Free Fire tournament platform.
//!
//! This library provides the transactional backend behind tournament joins:
//! role-gated administration, per-identity wallets with a non-negative balance
//! invariant, tournament capacity tracking, and an atomic join transaction
//! that debits the entry fee and records membership as one indivisible unit.
//!
//! ## Architecture
//!
//! All mutable state lives in one [`store::CoreState`] behind a single
//! `tokio::sync::RwLock`. Mutating operations take the write guard once and
//! run validation and commit synchronously under it, so concurrent joins
//! racing for the last capacity slot or the same wallet balance serialize at
//! one point and no reader ever observes a half-committed join.
//!
//! Callers arrive as opaque [`identity::Identity`] values resolved by an
//! upstream authentication layer; the core never authenticates, it only
//! authorizes against the role map. Public views strip participant sets and
//! every other internal field before anything leaves the library.
//!
//! ## Core Modules
//!
//! - [`arena`]: The facade exposing every declared operation
//! - [`identity`]: Roles, profiles, and the identity-keyed stores
//! - [`wallet`]: The credit-only wallet ledger
//! - [`tournament`]: Tournament records, public views, and the join transaction
//! - [`store`]: Shared state and the write-guard transaction boundary
//! - [`config`]: Bootstrap admin configuration
//!
//! ## Example
//!
//! ```
//! use fire_arena::{Arena, ArenaConfig};
//! use fire_arena::identity::Identity;
//!
//! #[tokio::main]
//! async fn main() {
//!     let admin = Identity::new("root-admin");
//!     let arena = Arena::new(ArenaConfig {
//!         bootstrap_admins: vec![admin.clone()],
//!     });
//!     assert!(arena.is_admin(&admin).await);
//! }
//! ```

/// The facade exposing every declared operation over one shared store.
pub mod arena;
pub use arena::Arena;

/// Environment-driven configuration.
pub mod config;
pub use config::{ArenaConfig, ConfigError};

/// The workspace-wide error taxonomy.
pub mod errors;
pub use errors::{ArenaError, ArenaResult};

/// Identities, roles, and user profiles.
pub mod identity;
pub use identity::{Identity, ProfileUpdate, PublicUserProfileView, Role};

/// Shared core state and its transaction boundary.
pub mod store;
pub use store::Store;

/// Tournament records, public views, and the join transaction.
pub mod tournament;
pub use tournament::{PublicTournamentDetails, TournamentId};

/// The credit-only wallet ledger.
pub mod wallet;
