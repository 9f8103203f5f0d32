//! Tournament routes.
//!
//! Listing and detail reads are public. Joining requires a caller identity
//! and runs the arena's atomic join transaction.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use fire_arena::{Identity, PublicTournamentDetails, TournamentId};
use serde::Serialize;

use super::{AppState, ErrorResponse, arena_error_response};

/// Response for a committed join.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinTournamentResponse {
    /// Caller's wallet balance after the entry fee was debited.
    pub balance: i64,
}

/// Lists every tournament in creation order.
///
/// # Response
///
/// Returns an array of public tournament views. A tournament's id is its
/// position in this array, so clients can address any entry without the
/// server ever exposing participant data.
pub async fn list_tournaments(
    State(state): State<AppState>,
) -> Json<Vec<PublicTournamentDetails>> {
    Json(state.arena.list_tournaments().await)
}

/// Returns the public view of a single tournament.
///
/// # Path Parameters
///
/// - `tournament_id`: Position of the tournament in creation order
///
/// # Response
///
/// ```json
/// {
///   "name": "Friday Cup",
///   "entryFee": 100,
///   "startTime": 1764586800000000000,
///   "createdAt": 1764500000000000000,
///   "maxParticipants": 48
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No tournament with that id exists
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<TournamentId>,
) -> Result<Json<PublicTournamentDetails>, (StatusCode, Json<ErrorResponse>)> {
    state
        .arena
        .tournament_details(tournament_id)
        .await
        .map(Json)
        .map_err(arena_error_response)
}

/// Joins the caller into a tournament.
///
/// The entry fee debit and the membership record commit together or not at
/// all; a rejected join leaves the wallet untouched.
///
/// # Path Parameters
///
/// - `tournament_id`: Tournament to join
///
/// # Authentication
///
/// Requires the `x-caller-identity` header.
///
/// # Response
///
/// ```json
/// {
///   "balance": 400
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No tournament with that id exists
/// - `409 Conflict`: Caller has no profile or no Free Fire UID, already
///   joined, the tournament is full, or the balance cannot cover the fee
pub async fn join_tournament(
    State(state): State<AppState>,
    Extension(caller): Extension<Identity>,
    Path(tournament_id): Path<TournamentId>,
) -> Result<Json<JoinTournamentResponse>, (StatusCode, Json<ErrorResponse>)> {
    match state.arena.join_tournament(&caller, tournament_id).await {
        Ok(balance) => {
            crate::metrics::join_attempts_total("committed");
            Ok(Json(JoinTournamentResponse { balance }))
        }
        Err(err) => {
            crate::metrics::join_attempts_total(err.code());
            Err(arena_error_response(err))
        }
    }
}
