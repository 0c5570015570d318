//! Reservation route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use domain::models::{
    CreateReservationRequest, CreateReservationResponse, ListReservationsQuery,
    ListReservationsResponse, ReservationItem,
};
use persistence::repositories::{CondoRepository, ReservationRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Requester;
use crate::services::ReservationService;

use super::{clamp_limit, decode_cursor_param};

/// Create a reservation.
///
/// POST /api/v1/reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    requester: Requester,
    Json(request): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let service = ReservationService::new(state.pool.clone(), state.config.reservations.model);
    let entity = service.create(requester.user_id, &request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReservationResponse {
            id: entity.id,
            status: entity.status.into(),
            start_time: entity.start_time,
            end_time: entity.end_time,
            number_of_people: entity.number_of_people,
        }),
    ))
}

/// Confirm a pending reservation.
///
/// POST /api/v1/reservations/{reservation_id}/confirm
pub async fn confirm_reservation(
    State(state): State<AppState>,
    requester: Requester,
    Path(reservation_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let service = ReservationService::new(state.pool.clone(), state.config.reservations.model);
    service.confirm(requester.user_id, reservation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Cancel (delete) a reservation before its start time.
///
/// DELETE /api/v1/reservations/{reservation_id}
pub async fn delete_reservation(
    State(state): State<AppState>,
    requester: Requester,
    Path(reservation_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let service = ReservationService::new(state.pool.clone(), state.config.reservations.model);
    service.cancel(requester.user_id, reservation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the requesting user's reservations.
///
/// GET /api/v1/reservations
pub async fn list_my_reservations(
    State(state): State<AppState>,
    requester: Requester,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<ListReservationsResponse>, ApiError> {
    let repo = ReservationRepository::new(state.pool.clone());
    let cursor = decode_cursor_param(query.cursor.as_deref())?;
    let limit = clamp_limit(query.limit);

    let entities = repo.list_for_user(requester.user_id, cursor, limit).await?;
    Ok(Json(to_listing(entities, limit)))
}

/// List all reservations in a condo (admins only).
///
/// GET /api/v1/condos/{condo_id}/reservations
pub async fn list_condo_reservations(
    State(state): State<AppState>,
    requester: Requester,
    Path(condo_id): Path<Uuid>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<ListReservationsResponse>, ApiError> {
    let condo_repo = CondoRepository::new(state.pool.clone());
    if !condo_repo.is_admin(condo_id, requester.user_id).await? {
        return Err(ApiError::Forbidden(
            "Condo admin access required".to_string(),
        ));
    }

    let repo = ReservationRepository::new(state.pool.clone());
    let cursor = decode_cursor_param(query.cursor.as_deref())?;
    let limit = clamp_limit(query.limit);

    let entities = repo.list_for_condo(condo_id, cursor, limit).await?;
    Ok(Json(to_listing(entities, limit)))
}

fn to_listing(
    entities: Vec<persistence::entities::ReservationWithAreaEntity>,
    limit: i64,
) -> ListReservationsResponse {
    let next_cursor = (entities.len() as i64 == limit)
        .then(|| entities.last())
        .flatten()
        .map(|last| shared::pagination::encode_cursor(last.created_at, last.id));

    ListReservationsResponse {
        data: entities.into_iter().map(ReservationItem::from).collect(),
        next_cursor,
    }
}
