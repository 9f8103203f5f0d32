//! REST API for the Fire Arena tournament platform.
//!
//! # Architecture
//!
//! The API is a thin shell over [`fire_arena::Arena`]. Handlers hold no
//! state of their own and perform no validation the arena already performs;
//! they translate HTTP into facade calls and arena errors into status codes.
//! Routes split into three tiers:
//!
//! - Public reads: tournament listings and per-user lookups
//! - Identity routes: anything acting on behalf of a caller, gated by the
//!   `x-caller-identity` header
//! - Admin commands: identity routes whose arena operation additionally
//!   requires the admin role
//!
//! Admin routes deliberately share the identity middleware rather than a
//! separate admin check: the arena verifies the role inside the same lock
//! that applies the mutation, and the HTTP layer repeating that check would
//! only introduce a race.
//!
//! # Modules
//!
//! - `middleware`: Caller identity extraction
//! - `request_id`: Request ID tracking
//! - `tournaments`: Tournament listing, details, and joining
//! - `users`: Profile, role, and wallet routes
//! - `admin`: Tournament creation, wallet credits, role assignment
//!
//! # Endpoints Overview
//!
//! Public:
//! - `GET /health` - Service health and arena stats
//! - `GET /api/v1/tournaments` - List tournaments in creation order
//! - `GET /api/v1/tournaments/{tournament_id}` - Tournament details
//! - `GET /api/v1/users/{identity}/profile` - Any user's profile
//! - `GET /api/v1/users/{identity}/wallet` - Any user's wallet balance
//!
//! Identity required:
//! - `POST /api/v1/tournaments/{tournament_id}/join` - Join a tournament
//! - `GET /api/v1/me/profile` - Caller's profile
//! - `PUT /api/v1/me/profile` - Save the caller's profile
//! - `GET /api/v1/me/role` - Caller's role
//! - `GET /api/v1/me/wallet` - Caller's wallet balance
//! - `GET /api/v1/me/admin` - Whether the caller is an admin
//!
//! Admin role required:
//! - `POST /api/v1/admin/tournaments` - Create a tournament
//! - `POST /api/v1/admin/wallets/{identity}/credit` - Credit a wallet
//! - `PUT /api/v1/admin/users/{identity}/role` - Assign a role
//!
//! # Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use fa_server::api::{self, AppState};
//! use fire_arena::{Arena, ArenaConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let arena = Arc::new(Arena::new(ArenaConfig::from_env()));
//!     let app = api::create_router(AppState { arena });
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod admin;
pub mod middleware;
pub mod request_id;
pub mod tournaments;
pub mod users;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use fire_arena::{Arena, ArenaError};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

/// Shared application state passed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The tournament and wallet core.
    pub arena: Arc<Arena>,
}

/// JSON error body returned by every failing route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub error: String,
    /// Stable machine-readable tag for the failure kind.
    pub code: String,
}

/// Maps an arena error onto its HTTP status and JSON body.
///
/// Authorization failures map to `403` (the caller is identified but lacks
/// the role), missing tournaments to `404`, rejected amounts to `400`, and
/// the join preconditions to `409` since they describe a conflict with
/// current arena state rather than a malformed request.
pub(crate) fn arena_error_response(err: ArenaError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &err {
        ArenaError::Unauthorized => StatusCode::FORBIDDEN,
        ArenaError::NotFound(_) => StatusCode::NOT_FOUND,
        ArenaError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
        ArenaError::ProfileRequired
        | ArenaError::UidRequired
        | ArenaError::AlreadyJoined
        | ArenaError::TournamentFull
        | ArenaError::InsufficientBalance { .. } => StatusCode::CONFLICT,
    };
    let body = ErrorResponse {
        error: err.to_string(),
        code: err.code().to_string(),
    };
    (status, Json(body))
}

/// Builds the complete application router.
pub fn create_router(state: AppState) -> Router {
    let v1_routes = create_v1_router();
    let root_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(root_routes)
        .nest("/api/v1", v1_routes)
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Builds the `/api/v1` routes: public reads merged with identity-gated
/// routes.
fn create_v1_router() -> Router<AppState> {
    let public_routes = Router::new()
        .route("/tournaments", get(tournaments::list_tournaments))
        .route(
            "/tournaments/{tournament_id}",
            get(tournaments::get_tournament),
        )
        .route("/users/{identity}/profile", get(users::get_user_profile))
        .route("/users/{identity}/wallet", get(users::get_user_wallet));

    let identity_routes = Router::new()
        .route(
            "/tournaments/{tournament_id}/join",
            post(tournaments::join_tournament),
        )
        .route(
            "/me/profile",
            get(users::get_caller_profile).put(users::save_caller_profile),
        )
        .route("/me/role", get(users::get_caller_role))
        .route("/me/wallet", get(users::get_caller_wallet))
        .route("/me/admin", get(users::get_caller_is_admin))
        .route("/admin/tournaments", post(admin::create_tournament))
        .route("/admin/wallets/{identity}/credit", post(admin::credit_wallet))
        .route("/admin/users/{identity}/role", put(admin::assign_role))
        .layer(axum::middleware::from_fn(middleware::identity_middleware));

    Router::new().merge(public_routes).merge(identity_routes)
}

/// Health check reporting liveness and basic arena stats.
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let tournaments = state.arena.list_tournaments().await.len();
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "tournaments": tournaments,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
}
