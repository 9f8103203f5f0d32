//! User profile, role, and wallet routes.
//!
//! The `/me/*` routes act on the caller identified by the
//! `x-caller-identity` header. The `/users/{identity}/*` reads are public:
//! profiles and balances are not secrets in this product, only mutations are
//! gated.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use fire_arena::{Identity, ProfileUpdate, PublicUserProfileView, Role};
use serde::Serialize;

use super::{AppState, ErrorResponse, arena_error_response};

/// Response carrying a wallet balance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletBalanceResponse {
    pub balance: i64,
}

/// Response carrying a caller's role.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub role: Role,
}

/// Response for the admin check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IsAdminResponse {
    pub admin: bool,
}

/// Returns the caller's profile, or JSON `null` if none was saved yet.
///
/// Having no profile is a normal state for a fresh identity, not an error.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header.
pub async fn get_caller_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Json<Option<PublicUserProfileView>> {
    Json(state.arena.user_profile(&caller).await)
}

/// Saves the caller's profile, replacing any previous version wholesale.
///
/// Fields omitted from the request body are cleared, not preserved. The
/// first save stamps `createdAt`; later saves keep it and advance
/// `updatedAt`.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header.
///
/// # Request Body
///
/// ```json
/// {
///   "freeFireUid": "123456789",
///   "displayName": "HeadshotKing"
/// }
/// ```
///
/// # Response
///
/// Returns the stored profile view, timestamps included.
pub async fn save_caller_profile(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<PublicUserProfileView>, (StatusCode, Json<ErrorResponse>)> {
    state
        .arena
        .save_user_profile(&caller, update)
        .await
        .map(Json)
        .map_err(arena_error_response)
}

/// Returns the caller's role.
///
/// Identities never seen before report the default `user` role.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header.
pub async fn get_caller_role(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Json<RoleResponse> {
    let role = state.arena.user_role(&caller).await;
    Json(RoleResponse { role })
}

/// Returns the caller's wallet balance.
///
/// Identities without a wallet entry report a balance of zero.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header.
pub async fn get_caller_wallet(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Json<WalletBalanceResponse> {
    let balance = state.arena.wallet_balance(&caller).await;
    Json(WalletBalanceResponse { balance })
}

/// Reports whether the caller holds the admin role.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header.
pub async fn get_caller_is_admin(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
) -> Json<IsAdminResponse> {
    let admin = state.arena.is_admin(&caller).await;
    Json(IsAdminResponse { admin })
}

/// Returns any user's profile, or JSON `null` if none exists.
///
/// # Path Parameters
///
/// - `identity`: Opaque identity string of the user
pub async fn get_user_profile(
    State(state): State<AppState>,
    Path(identity): Path<Identity>,
) -> Json<Option<PublicUserProfileView>> {
    Json(state.arena.user_profile(&identity).await)
}

/// Returns any user's wallet balance.
///
/// # Path Parameters
///
/// - `identity`: Opaque identity string of the user
pub async fn get_user_wallet(
    State(state): State<AppState>,
    Path(identity): Path<Identity>,
) -> Json<WalletBalanceResponse> {
    let balance = state.arena.wallet_balance(&identity).await;
    Json(WalletBalanceResponse { balance })
}
