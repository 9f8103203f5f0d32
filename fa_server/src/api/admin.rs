//! Admin command routes.
//!
//! Every handler here delegates to an arena command that checks the caller's
//! role inside the same lock that applies the mutation, so a concurrent
//! demotion can never race an admin command past the check.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use fire_arena::{Identity, Role, TournamentId};
use serde::{Deserialize, Serialize};

use super::{AppState, ErrorResponse, arena_error_response};

/// Request to create a tournament.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    /// Display name shown in listings.
    pub name: String,
    /// Entry fee in wallet units. Zero makes the tournament free.
    pub entry_fee: i64,
    /// Scheduled start, in nanoseconds since the Unix epoch.
    #[serde(with = "chrono::serde::ts_nanoseconds")]
    pub start_time: DateTime<Utc>,
    /// Participant cap. Omit for an uncapped tournament.
    #[serde(default)]
    pub max_participants: Option<usize>,
}

/// Response carrying the id of a created tournament.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentResponse {
    pub id: TournamentId,
}

/// Request to credit a wallet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditWalletRequest {
    /// Amount to add. Must be non-negative.
    pub amount: i64,
}

/// Response carrying a wallet balance after a credit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditWalletResponse {
    pub balance: i64,
}

/// Request to assign a role.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleRequest {
    pub role: Role,
}

/// Creates a tournament and returns its id.
///
/// Ids are assigned sequentially from zero, so the returned id is also the
/// tournament's position in the public listing.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header and the admin role.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Friday Cup",
///   "entryFee": 100,
///   "startTime": 1764586800000000000,
///   "maxParticipants": 48
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "id": 3
/// }
/// ```
///
/// # Errors
///
/// - `403 Forbidden`: Caller does not hold the admin role
/// - `400 Bad Request`: Entry fee is negative
pub async fn create_tournament(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Json(request): Json<CreateTournamentRequest>,
) -> Result<Json<CreateTournamentResponse>, (StatusCode, Json<ErrorResponse>)> {
    let id = state
        .arena
        .admin_create_tournament(
            &caller,
            request.name,
            request.entry_fee,
            request.start_time,
            request.max_participants,
        )
        .await
        .map_err(arena_error_response)?;
    crate::metrics::tournaments_created_total();
    Ok(Json(CreateTournamentResponse { id }))
}

/// Credits a user's wallet and returns the new balance.
///
/// Crediting an identity that was never seen before creates its wallet
/// entry. A zero amount is a legal no-op.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header and the admin role.
///
/// # Path Parameters
///
/// - `identity`: Opaque identity string of the wallet owner
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 500
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "balance": 650
/// }
/// ```
///
/// # Errors
///
/// - `403 Forbidden`: Caller does not hold the admin role
/// - `400 Bad Request`: Amount is negative or would overflow the balance
pub async fn credit_wallet(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(identity): Path<Identity>,
    Json(request): Json<CreditWalletRequest>,
) -> Result<Json<CreditWalletResponse>, (StatusCode, Json<ErrorResponse>)> {
    let balance = state
        .arena
        .admin_credit_wallet(&caller, &identity, request.amount)
        .await
        .map_err(arena_error_response)?;
    crate::metrics::wallet_credits_total();
    Ok(Json(CreditWalletResponse { balance }))
}

/// Assigns a role to a user, replacing the previous one.
///
/// Admins can demote themselves; nothing special-cases the caller.
///
/// # Authentication
///
/// Requires the `x-caller-identity` header and the admin role.
///
/// # Path Parameters
///
/// - `identity`: Opaque identity string of the user
///
/// # Request Body
///
/// ```json
/// {
///   "role": "admin"
/// }
/// ```
///
/// # Errors
///
/// - `403 Forbidden`: Caller does not hold the admin role
pub async fn assign_role(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(identity): Path<Identity>,
    Json(request): Json<AssignRoleRequest>,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    state
        .arena
        .assign_user_role(&caller, &identity, request.role)
        .await
        .map_err(arena_error_response)?;
    Ok(StatusCode::OK)
}
