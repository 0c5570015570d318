//! Unit association request route handlers.
//!
//! Residents file a claim to live in a unit; a condo admin approves it,
//! which creates the unit (if the number is free) and assigns the resident.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    ApproveUnitRequestResponse, CreateUnitRequestRequest, ResidentRole, UnitRequest,
};
use domain::ReservationError;
use persistence::entities::ResidentRoleDb;
use persistence::repositories::{
    CondoRepository, CondoUnitRepository, UnitRequestRepository, UserRepository,
};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Requester;

/// File a unit association request.
///
/// POST /api/v1/condos/{condo_id}/unit-requests
pub async fn create_unit_request(
    State(state): State<AppState>,
    requester: Requester,
    Path(condo_id): Path<Uuid>,
    Json(request): Json<CreateUnitRequestRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let user_repo = UserRepository::new(state.pool.clone());
    if !user_repo.exists(requester.user_id).await? {
        return Err(ApiError::Unauthorized("Unknown user".to_string()));
    }

    let condo_repo = CondoRepository::new(state.pool.clone());
    condo_repo
        .find_by_id(condo_id)
        .await?
        .ok_or(ReservationError::NotFound("Condo"))?;

    let request_repo = UnitRequestRepository::new(state.pool.clone());
    let entity = request_repo
        .create(
            requester.user_id,
            condo_id,
            request.building_number.as_deref(),
            request.floor_number.as_deref(),
            &request.unit_number,
            request.phone.as_deref(),
            request.is_owner,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(UnitRequest::from(entity))))
}

/// List a condo's pending unit requests (admins only).
///
/// GET /api/v1/condos/{condo_id}/unit-requests
pub async fn list_unit_requests(
    State(state): State<AppState>,
    requester: Requester,
    Path(condo_id): Path<Uuid>,
) -> Result<Json<Vec<UnitRequest>>, ApiError> {
    let condo_repo = CondoRepository::new(state.pool.clone());
    if !condo_repo.is_admin(condo_id, requester.user_id).await? {
        return Err(ApiError::Forbidden(
            "Condo admin access required".to_string(),
        ));
    }

    let request_repo = UnitRequestRepository::new(state.pool.clone());
    let entities = request_repo.list_pending_for_condo(condo_id).await?;

    Ok(Json(entities.into_iter().map(UnitRequest::from).collect()))
}

/// Approve a unit request: create the unit, assign the resident, mark the
/// request approved. One transaction end to end (admins only).
///
/// POST /api/v1/unit-requests/{request_id}/approve
pub async fn approve_unit_request(
    State(state): State<AppState>,
    requester: Requester,
    Path(request_id): Path<Uuid>,
) -> Result<Json<ApproveUnitRequestResponse>, ApiError> {
    let request_repo = UnitRequestRepository::new(state.pool.clone());
    let unit_repo = CondoUnitRepository::new(state.pool.clone());
    let condo_repo = CondoRepository::new(state.pool.clone());

    let unit_request = request_repo
        .find_by_id(request_id)
        .await?
        .ok_or(ReservationError::NotFound("Unit request"))?;

    if !condo_repo
        .is_admin(unit_request.condo_id, requester.user_id)
        .await?
    {
        return Err(ApiError::Forbidden(
            "Condo admin access required".to_string(),
        ));
    }

    if unit_repo
        .find_by_number(unit_request.condo_id, &unit_request.unit_number)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "A unit with this number already exists in the condo".to_string(),
        ));
    }

    let role = if unit_request.is_owner {
        ResidentRoleDb::Owner
    } else {
        ResidentRoleDb::Tenant
    };

    let mut tx = state.pool.begin().await?;

    let approved = request_repo.mark_approved(&mut tx, request_id).await?;
    if approved == 0 {
        tx.rollback().await?;
        return Err(ApiError::Conflict(
            "Unit request has already been decided".to_string(),
        ));
    }

    let unit = unit_repo
        .create(
            &mut tx,
            unit_request.condo_id,
            unit_request.building_number.as_deref(),
            unit_request.floor_number.as_deref(),
            &unit_request.unit_number,
            !unit_request.is_owner,
            unit_request.phone.as_deref(),
        )
        .await?;

    unit_repo
        .add_resident(&mut tx, unit.id, unit_request.user_id, role)
        .await?;

    tx.commit().await?;

    tracing::info!(
        unit_id = %unit.id,
        request_id = %request_id,
        "Unit request approved"
    );

    Ok(Json(ApproveUnitRequestResponse {
        unit_id: unit.id,
        request_id,
        resident_role: ResidentRole::from(role),
    }))
}
