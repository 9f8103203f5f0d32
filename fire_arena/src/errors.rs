//! Arena error types.

use crate::tournament::models::TournamentId;
use thiserror::Error;

/// Arena errors
///
/// One taxonomy for the whole core: every command and the join transaction
/// report failures from this set, and no operation has partial effects on
/// failure. The join-path variants carry the exact user-facing messages the
/// client contract pins; callers that want their own wording should branch on
/// the variant (or on [`ArenaError::code`]), never on the message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Caller lacks the admin role required by the operation
    #[error("Admin role required")]
    Unauthorized,

    /// Unknown tournament id
    #[error("Tournament {0} not found")]
    NotFound(TournamentId),

    /// Caller has never saved a profile
    #[error("You must create a profile before joining a tournament")]
    ProfileRequired,

    /// Caller's profile has no usable Free Fire UID
    #[error("You must set your Free Fire UID before joining a tournament")]
    UidRequired,

    /// Caller is already a participant of the tournament
    #[error("You have already joined this tournament")]
    AlreadyJoined,

    /// Tournament has reached its participant cap
    #[error("Tournament is full")]
    TournamentFull,

    /// Caller's balance does not cover the entry fee
    #[error("Insufficient balance to join tournament")]
    InsufficientBalance { available: i64, required: i64 },

    /// Amount is negative or not representable for the target wallet
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),
}

impl ArenaError {
    /// Stable machine-readable kind tag
    ///
    /// Used for response bodies and metrics labels. Unlike the display
    /// message, these tags never change.
    pub fn code(&self) -> &'static str {
        match self {
            ArenaError::Unauthorized => "unauthorized",
            ArenaError::NotFound(_) => "not_found",
            ArenaError::ProfileRequired => "profile_required",
            ArenaError::UidRequired => "uid_required",
            ArenaError::AlreadyJoined => "already_joined",
            ArenaError::TournamentFull => "tournament_full",
            ArenaError::InsufficientBalance { .. } => "insufficient_balance",
            ArenaError::InvalidAmount(_) => "invalid_amount",
        }
    }
}

/// Result type for arena operations
pub type ArenaResult<T> = Result<T, ArenaError>;
