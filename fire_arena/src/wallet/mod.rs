//! Wallet module providing the per-identity balance ledger.
//!
//! This module implements:
//! - Non-negative integer balances, zero-defaulting for unknown identities
//! - Admin-only credits with overflow protection
//! - No external debit: the join transaction performs the only debit,
//!   atomically with membership addition
//!
//! ## Example
//!
//! ```
//! use fire_arena::config::ArenaConfig;
//! use fire_arena::identity::Identity;
//! use fire_arena::store::Store;
//! use fire_arena::wallet::WalletManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let admin = Identity::new("root-admin");
//!     let config = ArenaConfig {
//!         bootstrap_admins: vec![admin.clone()],
//!     };
//!     let wallets = WalletManager::new(Arc::new(Store::new(&config)));
//!
//!     let player = Identity::new("player-1");
//!     assert_eq!(wallets.balance_of(&player).await, 0);
//!
//!     let balance = wallets.credit(&admin, &player, 500).await.unwrap();
//!     assert_eq!(balance, 500);
//! }
//! ```

pub mod manager;

pub use manager::WalletManager;
