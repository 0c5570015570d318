//! Notification route handlers.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use domain::models::{
    ListNotificationsQuery, ListNotificationsResponse, Notification, UnreadCountResponse,
};
use domain::ReservationError;
use persistence::repositories::NotificationRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Requester;

use super::{clamp_limit, decode_cursor_param};

/// List the requesting user's notifications.
///
/// GET /api/v1/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    requester: Requester,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<ListNotificationsResponse>, ApiError> {
    let repo = NotificationRepository::new(state.pool.clone());
    let cursor = decode_cursor_param(query.cursor.as_deref())?;
    let limit = clamp_limit(query.limit);

    let entities = repo.list_for_user(requester.user_id, cursor, limit).await?;

    let next_cursor = (entities.len() as i64 == limit)
        .then(|| entities.last())
        .flatten()
        .map(|last| shared::pagination::encode_cursor(last.created_at, last.id));

    Ok(Json(ListNotificationsResponse {
        data: entities.into_iter().map(Notification::from).collect(),
        next_cursor,
    }))
}

/// The requesting user's unread notification count.
///
/// GET /api/v1/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    requester: Requester,
) -> Result<Json<UnreadCountResponse>, ApiError> {
    let repo = NotificationRepository::new(state.pool.clone());
    let unread = repo
        .unread_count(requester.user_id)
        .await?
        .ok_or(ReservationError::NotFound("User"))?;

    Ok(Json(UnreadCountResponse { unread }))
}

/// Reset the requesting user's unread counter. Notification rows are not
/// deleted or marked read by this operation.
///
/// POST /api/v1/notifications/reset-unread
pub async fn reset_unread(
    State(state): State<AppState>,
    requester: Requester,
) -> Result<StatusCode, ApiError> {
    let repo = NotificationRepository::new(state.pool.clone());
    let updated = repo.reset_unread(requester.user_id).await?;
    if updated == 0 {
        return Err(ReservationError::NotFound("User").into());
    }
    Ok(StatusCode::NO_CONTENT)
}
