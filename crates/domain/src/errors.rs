//! Domain error types for the reservation engine.

use thiserror::Error;

/// Request-level rejections from the reservation engine.
///
/// All variants are recoverable by the caller; none is process-fatal. A
/// rejection is raised before any mutation, so no partial state is ever
/// persisted for a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReservationError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Forbidden: {0}")]
    Forbidden(&'static str),

    #[error("The common area is not available")]
    AmenityUnavailable,

    #[error("The requested time falls outside the common area's schedule")]
    OutsideSchedule,

    #[error("No reservation quota is configured for this unit and common area")]
    NoQuota,

    #[error("Not enough capacity: requested {requested}, remaining {remaining}")]
    CapacityExceeded { requested: i32, remaining: i32 },

    #[error(
        "Daily quota exceeded: requested {requested}, already reserved {already_reserved}, quota {quota}"
    )]
    DailyQuotaExceeded {
        requested: i32,
        already_reserved: i32,
        quota: i32,
    },

    #[error("Invalid party size: {0}")]
    InvalidPartySize(i32),

    #[error("Reservations must be made at least 1 hour in advance")]
    WindowTooSoon,

    #[error("Reservations cannot be made more than 24 hours in advance")]
    WindowTooFar,

    #[error("Reservations can only be cancelled before their start time")]
    TooLateToCancel,
}
