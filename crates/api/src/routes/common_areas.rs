//! Common area route handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    CommonArea, CommonAreaWithAvailability, CreateCommonAreaRequest, SetQuotaRequest,
    UnitReservationQuota, UpdateCommonAreaRequest,
};
use domain::services::AvailabilityModel;
use domain::ReservationError;
use persistence::repositories::{CommonAreaRepository, CondoRepository, QuotaRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Requester;
use crate::services::AvailabilityService;

/// List a condo's common areas with computed availability.
///
/// GET /api/v1/condos/{condo_id}/common-areas
pub async fn list_condo_common_areas(
    State(state): State<AppState>,
    Path(condo_id): Path<Uuid>,
) -> Result<Json<Vec<CommonAreaWithAvailability>>, ApiError> {
    let condo_repo = CondoRepository::new(state.pool.clone());
    condo_repo
        .find_by_id(condo_id)
        .await?
        .ok_or(ReservationError::NotFound("Condo"))?;

    let area_repo = CommonAreaRepository::new(state.pool.clone());
    let availability =
        AvailabilityService::new(state.pool.clone(), state.config.reservations.model);

    let entities = area_repo.list_for_condo(condo_id).await?;
    let mut result = Vec::with_capacity(entities.len());
    for entity in entities {
        let available_capacity = availability.listing_remaining(&entity).await?;
        result.push(CommonAreaWithAvailability {
            area: CommonArea::from(entity),
            available_capacity,
        });
    }

    Ok(Json(result))
}

/// Query parameters for an availability window.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end: Option<DateTime<Utc>>,
}

/// Remaining capacity for a window.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AvailabilityResponse {
    pub common_area_id: Uuid,
    pub remaining_capacity: i32,
}

/// Remaining capacity of an area for a given window.
///
/// GET /api/v1/common-areas/{area_id}/availability
pub async fn get_area_availability(
    State(state): State<AppState>,
    Path(area_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let model = state.config.reservations.model;
    let (start, end) = match (query.start, query.end) {
        (Some(start), Some(end)) if start < end => (start, end),
        (None, None) if model == AvailabilityModel::Simple => {
            // the counter model ignores the window
            let now = Utc::now();
            (now, now)
        }
        _ => {
            return Err(ApiError::Validation(
                "start and end query parameters must form a valid window".to_string(),
            ))
        }
    };

    let availability = AvailabilityService::new(state.pool.clone(), model);
    let remaining = availability.compute_remaining(area_id, start, end).await?;

    Ok(Json(AvailabilityResponse {
        common_area_id: area_id,
        remaining_capacity: remaining,
    }))
}

/// Create a common area (condo admins only).
///
/// POST /api/v1/condos/{condo_id}/common-areas
pub async fn create_common_area(
    State(state): State<AppState>,
    requester: Requester,
    Path(condo_id): Path<Uuid>,
    Json(request): Json<CreateCommonAreaRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let condo_repo = CondoRepository::new(state.pool.clone());
    condo_repo
        .find_by_id(condo_id)
        .await?
        .ok_or(ReservationError::NotFound("Condo"))?;
    if !condo_repo.is_admin(condo_id, requester.user_id).await? {
        return Err(ApiError::Forbidden(
            "Condo admin access required".to_string(),
        ));
    }

    let area_repo = CommonAreaRepository::new(state.pool.clone());
    let entity = area_repo
        .create(
            condo_id,
            &request.name,
            &request.description,
            request.area_type.into(),
            request.max_capacity,
            request.schedule.as_ref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(CommonArea::from(entity))))
}

/// Update a common area (condo admins only).
///
/// PUT /api/v1/common-areas/{area_id}
pub async fn update_common_area(
    State(state): State<AppState>,
    requester: Requester,
    Path(area_id): Path<Uuid>,
    Json(request): Json<UpdateCommonAreaRequest>,
) -> Result<Json<CommonArea>, ApiError> {
    request.validate()?;
    require_area_admin(&state, area_id, requester.user_id).await?;

    let area_repo = CommonAreaRepository::new(state.pool.clone());
    let entity = area_repo
        .update(
            area_id,
            request.name.as_deref(),
            request.description.as_deref(),
            request.schedule.as_ref(),
        )
        .await?
        .ok_or(ReservationError::NotFound("Common area"))?;

    Ok(Json(CommonArea::from(entity)))
}

/// Delete a common area (condo admins only). Deletion is blocked while
/// active reservations reference the area.
///
/// DELETE /api/v1/common-areas/{area_id}
pub async fn delete_common_area(
    State(state): State<AppState>,
    requester: Requester,
    Path(area_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    require_area_admin(&state, area_id, requester.user_id).await?;

    let area_repo = CommonAreaRepository::new(state.pool.clone());
    let active = area_repo.count_active_reservations(area_id).await?;
    if active > 0 {
        return Err(ApiError::Conflict(format!(
            "Common area has {active} active reservations"
        )));
    }

    let deleted = area_repo.delete(area_id).await?;
    if deleted == 0 {
        return Err(ReservationError::NotFound("Common area").into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Set a unit's reservation quota on an area (condo admins only; strict
/// model).
///
/// PUT /api/v1/common-areas/{area_id}/quotas/{unit_id}
pub async fn set_unit_quota(
    State(state): State<AppState>,
    requester: Requester,
    Path((area_id, unit_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<SetQuotaRequest>,
) -> Result<Json<UnitReservationQuota>, ApiError> {
    request.validate()?;
    require_area_admin(&state, area_id, requester.user_id).await?;

    let quota_repo = QuotaRepository::new(state.pool.clone());
    let entity = quota_repo
        .upsert(unit_id, area_id, request.max_quota_per_reservation)
        .await?;

    Ok(Json(entity.into()))
}

/// Resolve area -> condo -> admins and require the requester among them.
async fn require_area_admin(
    state: &AppState,
    area_id: Uuid,
    user_id: Uuid,
) -> Result<(), ApiError> {
    let area_repo = CommonAreaRepository::new(state.pool.clone());
    area_repo
        .find_by_id(area_id)
        .await?
        .ok_or(ReservationError::NotFound("Common area"))?;

    let condo_repo = CondoRepository::new(state.pool.clone());
    let admins = condo_repo.admins_for_area(area_id).await?;
    if !domain::services::authorization::is_condo_admin(user_id, &admins) {
        return Err(ApiError::Forbidden(
            "Condo admin access required".to_string(),
        ));
    }
    Ok(())
}
