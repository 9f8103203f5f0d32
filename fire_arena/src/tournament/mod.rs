//! Tournament module for creation, public views, and the join transaction.
//!
//! This module implements:
//! - Admin-gated tournament creation with sequential ids
//! - Creation-ordered public listings that never leak participant data
//! - The join transaction: validate profile, membership, capacity, and
//!   balance, then atomically debit the entry fee and add the member
//!
//! ## Example
//!
//! ```
//! use fire_arena::config::ArenaConfig;
//! use fire_arena::identity::Identity;
//! use fire_arena::store::Store;
//! use fire_arena::tournament::TournamentManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let admin = Identity::new("root-admin");
//!     let config = ArenaConfig {
//!         bootstrap_admins: vec![admin.clone()],
//!     };
//!     let tournaments = TournamentManager::new(Arc::new(Store::new(&config)));
//!
//!     let id = tournaments
//!         .create(&admin, "Friday Cup".to_string(), 100, chrono::Utc::now(), Some(48))
//!         .await
//!         .unwrap();
//!     assert_eq!(id, 0);
//! }
//! ```

pub mod join;
pub mod manager;
pub mod models;

pub use join::JoinCoordinator;
pub use manager::TournamentManager;
pub use models::{PublicTournamentDetails, StoredTournament, TournamentId};
