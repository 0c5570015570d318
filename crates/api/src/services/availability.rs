//! Availability reads over the configured capacity model.

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use domain::models::Reservation;
use domain::services::availability::{remaining_in_window, AvailabilityModel};
use domain::ReservationError;
use persistence::entities::CommonAreaEntity;
use persistence::repositories::{CommonAreaRepository, ReservationRepository};

use crate::error::ApiError;

/// Read-only availability computation for common areas.
#[derive(Clone)]
pub struct AvailabilityService {
    pool: PgPool,
    model: AvailabilityModel,
}

impl AvailabilityService {
    pub fn new(pool: PgPool, model: AvailabilityModel) -> Self {
        Self { pool, model }
    }

    /// How many additional people the area can admit in `[start, end)`.
    ///
    /// Simple model: the stored counter (the window is ignored). Strict
    /// model: live recomputation from overlapping reservations.
    pub async fn compute_remaining(
        &self,
        common_area_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i32, ApiError> {
        let area_repo = CommonAreaRepository::new(self.pool.clone());
        let area = area_repo
            .find_by_id(common_area_id)
            .await?
            .ok_or(ReservationError::NotFound("Common area"))?;

        match self.model {
            AvailabilityModel::Simple => Ok(area.remaining_capacity),
            AvailabilityModel::Strict => {
                self.remaining_strict(&area, start, end).await
            }
        }
    }

    /// Remaining capacity used for area listings: the stored counter in the
    /// simple model, the next hour's window in the strict model.
    pub async fn listing_remaining(&self, area: &CommonAreaEntity) -> Result<i32, ApiError> {
        match self.model {
            AvailabilityModel::Simple => Ok(area.remaining_capacity),
            AvailabilityModel::Strict => {
                let now = Utc::now();
                self.remaining_strict(area, now, now + Duration::hours(1)).await
            }
        }
    }

    async fn remaining_strict(
        &self,
        area: &CommonAreaEntity,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<i32, ApiError> {
        let reservation_repo = ReservationRepository::new(self.pool.clone());
        let mut conn = self.pool.acquire().await?;
        let overlapping: Vec<Reservation> = reservation_repo
            .overlapping_for_area(&mut conn, area.id, start, end)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(remaining_in_window(area.max_capacity, &overlapping, start, end))
    }
}
