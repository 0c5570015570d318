//! User route handlers.
//!
//! Users are provisioned by the upstream auth system; this surface only
//! exposes the profile fields this backend maintains.

use axum::{extract::State, Json};

use domain::models::User;
use domain::ReservationError;
use persistence::repositories::UserRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Requester;

/// The requesting user's profile, including the unread-notification
/// counter.
///
/// GET /api/v1/users/me
pub async fn me(
    State(state): State<AppState>,
    requester: Requester,
) -> Result<Json<User>, ApiError> {
    let repo = UserRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(requester.user_id)
        .await?
        .ok_or(ReservationError::NotFound("User"))?;

    Ok(Json(entity.into()))
}
