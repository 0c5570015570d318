//! Condo route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use domain::models::{Condo, CreateCondoRequest, CreateCondoResponse};
use domain::ReservationError;
use persistence::repositories::{CondoRepository, NewCondoRow, UserRepository};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::Requester;

/// Create a condo. The creator becomes its first admin.
///
/// POST /api/v1/condos
pub async fn create_condo(
    State(state): State<AppState>,
    requester: Requester,
    Json(request): Json<CreateCondoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    request.validate()?;

    let user_repo = UserRepository::new(state.pool.clone());
    if !user_repo.exists(requester.user_id).await? {
        return Err(ApiError::Unauthorized("Unknown user".to_string()));
    }

    let condo_repo = CondoRepository::new(state.pool.clone());
    if condo_repo
        .find_by_unique_code(&request.unique_code)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "A condo with this unique code already exists".to_string(),
        ));
    }

    let entity = condo_repo
        .create(
            &NewCondoRow {
                name: request.name,
                address: request.address,
                city: request.city,
                state: request.state,
                zip_code: request.zip_code,
                country: request.country,
                unique_code: request.unique_code,
            },
            requester.user_id,
        )
        .await?;

    tracing::info!(condo_id = %entity.id, "Condo created");

    Ok((
        StatusCode::CREATED,
        Json(CreateCondoResponse {
            id: entity.id,
            unique_code: entity.unique_code,
        }),
    ))
}

/// Fetch a condo with its admin set.
///
/// GET /api/v1/condos/{condo_id}
pub async fn get_condo(
    State(state): State<AppState>,
    Path(condo_id): Path<Uuid>,
) -> Result<Json<Condo>, ApiError> {
    let condo_repo = CondoRepository::new(state.pool.clone());
    let entity = condo_repo
        .find_by_id(condo_id)
        .await?
        .ok_or(ReservationError::NotFound("Condo"))?;
    let admins = condo_repo.admins(condo_id).await?;

    Ok(Json(entity.into_domain(admins)))
}
