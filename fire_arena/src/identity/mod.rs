//! Identity module mapping opaque caller identities to roles and profiles.
//!
//! This module implements:
//! - The opaque [`Identity`] type handed in by the upstream authentication layer
//! - Role assignment with admin gating (`admin`, `user`, `guest`)
//! - Profile upserts with monotone timestamps
//! - Public profile views for the wire
//!
//! ## Example
//!
//! ```
//! use fire_arena::config::ArenaConfig;
//! use fire_arena::identity::{Identity, IdentityManager, Role};
//! use fire_arena::store::Store;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(Store::new(&ArenaConfig::default()));
//!     let identities = IdentityManager::new(store);
//!
//!     // Identities never assigned a role default to `user`.
//!     let role = identities.role_of(&Identity::new("aaaaa-bbbbb")).await;
//!     assert_eq!(role, Role::User);
//! }
//! ```

pub mod manager;
pub mod models;

pub use manager::IdentityManager;
pub use models::{Identity, ProfileUpdate, PublicUserProfileView, Role, UserProfile};
