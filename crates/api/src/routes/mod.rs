//! HTTP route handlers.

pub mod common_areas;
pub mod condos;
pub mod health;
pub mod notifications;
pub mod reservations;
pub mod unit_requests;
pub mod users;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::ApiError;

/// Decode an optional keyset cursor query parameter.
fn decode_cursor_param(
    cursor: Option<&str>,
) -> Result<Option<(DateTime<Utc>, Uuid)>, ApiError> {
    cursor
        .map(|c| {
            shared::pagination::decode_cursor(c)
                .map_err(|e| ApiError::Validation(format!("cursor: {e}")))
        })
        .transpose()
}

/// Clamp a caller-provided page size to a sane range.
fn clamp_limit(limit: i64) -> i64 {
    limit.clamp(1, 200)
}
