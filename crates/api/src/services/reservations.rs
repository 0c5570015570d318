//! Reservation engine orchestration: transactional admission, confirmation
//! and cancellation.
//!
//! The pure rules live in `domain::services`; this service wires them to
//! the store with the concurrency discipline the engine requires:
//!
//! - Simple model: the capacity decrement is a conditional single-statement
//!   update executed in the same transaction as the reservation insert, so
//!   a reservation can never exist without its capacity having been taken,
//!   and two racing admissions cannot oversell the counter.
//! - Strict model: the area row is locked (`SELECT ... FOR UPDATE`) for the
//!   whole read-check-insert sequence, serializing admissions per area.

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use domain::models::{CreateReservationRequest, Reservation};
use domain::services::{admission, authorization, availability::AvailabilityModel, lifecycle};
use domain::services::notification as notification_messages;
use domain::ReservationError;
use persistence::entities::ReservationEntity;
use persistence::repositories::{
    CommonAreaRepository, CondoRepository, NewReservationRow, QuotaRepository,
    ReservationRepository,
};

use crate::error::ApiError;
use crate::middleware::metrics::{
    record_reservation_cancelled, record_reservation_created, record_reservation_rejected,
};
use crate::services::notifications::NotificationEmitter;

/// Reservation lifecycle orchestration over a connection pool.
#[derive(Clone)]
pub struct ReservationService {
    pool: PgPool,
    model: AvailabilityModel,
}

impl ReservationService {
    pub fn new(pool: PgPool, model: AvailabilityModel) -> Self {
        Self { pool, model }
    }

    /// Admit and commit a reservation, or reject it with a precise reason.
    pub async fn create(
        &self,
        requester: Uuid,
        request: &CreateReservationRequest,
    ) -> Result<ReservationEntity, ApiError> {
        let result = match self.model {
            AvailabilityModel::Simple => {
                self.create_simple(requester, request, Utc::now()).await
            }
            AvailabilityModel::Strict => self.create_strict(requester, request).await,
        };

        if let Err(ApiError::Domain(rejection)) = &result {
            let (_, code) = crate::error::domain_error_parts(rejection);
            record_reservation_rejected(code);
        }
        result
    }

    async fn create_simple(
        &self,
        requester: Uuid,
        request: &CreateReservationRequest,
        now: DateTime<Utc>,
    ) -> Result<ReservationEntity, ApiError> {
        let area_repo = CommonAreaRepository::new(self.pool.clone());
        let reservation_repo = ReservationRepository::new(self.pool.clone());

        let area = area_repo
            .find_by_id(request.common_area_id)
            .await?
            .ok_or(ReservationError::NotFound("Common area"))?;

        // Full rule pipeline first: rejected requests never open a
        // transaction.
        admission::admit_simple(
            &area.clone().into(),
            request.number_of_people,
            request.start_time,
            now,
        )?;

        let mut tx = self.pool.begin().await?;

        // Conditional decrement; losing the race to a concurrent admission
        // surfaces as zero rows updated.
        let updated = area_repo
            .reserve_capacity(&mut tx, area.id, request.number_of_people)
            .await?;
        if updated == 0 {
            tx.rollback().await?;
            let fresh = area_repo
                .find_by_id(request.common_area_id)
                .await?
                .ok_or(ReservationError::NotFound("Common area"))?;
            return Err(ReservationError::CapacityExceeded {
                requested: request.number_of_people,
                remaining: fresh.remaining_capacity,
            }
            .into());
        }

        let entity = reservation_repo
            .create(
                &mut tx,
                &NewReservationRow {
                    common_area_id: request.common_area_id,
                    condo_unit_id: request.condo_unit_id,
                    user_id: requester,
                    start_time: request.start_time,
                    end_time: request.end_time,
                    number_of_people: request.number_of_people,
                },
            )
            .await?;

        tx.commit().await?;

        record_reservation_created("simple");
        tracing::info!(
            reservation_id = %entity.id,
            common_area_id = %request.common_area_id,
            number_of_people = request.number_of_people,
            "Reservation admitted"
        );
        Ok(entity)
    }

    async fn create_strict(
        &self,
        requester: Uuid,
        request: &CreateReservationRequest,
    ) -> Result<ReservationEntity, ApiError> {
        let area_repo = CommonAreaRepository::new(self.pool.clone());
        let reservation_repo = ReservationRepository::new(self.pool.clone());
        let quota_repo = QuotaRepository::new(self.pool.clone());

        let end_time = request.end_time.ok_or_else(|| {
            ApiError::Validation("end_time is required for interval reservations".to_string())
        })?;

        let mut tx = self.pool.begin().await?;

        // Row lock: admissions against the same area serialize here, so the
        // overlap and quota sums below cannot go stale before the insert.
        let area = area_repo
            .find_by_id_for_update(&mut tx, request.common_area_id)
            .await?
            .ok_or(ReservationError::NotFound("Common area"))?;

        let quota: Option<domain::models::UnitReservationQuota> = quota_repo
            .find_for_unit_and_area(&mut tx, request.condo_unit_id, request.common_area_id)
            .await?
            .map(Into::into);

        let overlapping: Vec<Reservation> = reservation_repo
            .overlapping_for_area(&mut tx, request.common_area_id, request.start_time, end_time)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let day_start = request
            .start_time
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();
        let day_end = day_start + Duration::days(1);
        let same_day_people = reservation_repo
            .same_day_people(
                &mut tx,
                request.condo_unit_id,
                request.common_area_id,
                day_start,
                day_end,
            )
            .await? as i32;

        admission::admit_strict(
            &area.into(),
            quota.as_ref(),
            &overlapping,
            same_day_people,
            request.number_of_people,
            request.start_time,
            end_time,
        )?;

        let entity = reservation_repo
            .create(
                &mut tx,
                &NewReservationRow {
                    common_area_id: request.common_area_id,
                    condo_unit_id: request.condo_unit_id,
                    user_id: requester,
                    start_time: request.start_time,
                    end_time: Some(end_time),
                    number_of_people: request.number_of_people,
                },
            )
            .await?;

        tx.commit().await?;

        record_reservation_created("strict");
        tracing::info!(
            reservation_id = %entity.id,
            common_area_id = %request.common_area_id,
            number_of_people = request.number_of_people,
            "Reservation admitted"
        );
        Ok(entity)
    }

    /// Confirm a pending reservation (owner only, before start) and notify.
    pub async fn confirm(&self, requester: Uuid, reservation_id: Uuid) -> Result<(), ApiError> {
        let reservation_repo = ReservationRepository::new(self.pool.clone());
        let area_repo = CommonAreaRepository::new(self.pool.clone());
        let emitter = NotificationEmitter::new(self.pool.clone());

        let reservation: Reservation = reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or(ReservationError::NotFound("Reservation"))?
            .into();

        if reservation.user_id != requester {
            return Err(ReservationError::Forbidden(
                "Only the reservation owner can confirm it",
            )
            .into());
        }
        lifecycle::ensure_confirmable(&reservation, Utc::now())?;

        let updated = reservation_repo.mark_confirmed(reservation_id).await?;
        if updated == 0 {
            // the expiration sweep got there first
            return Err(ApiError::Conflict(
                "Reservation is no longer pending".to_string(),
            ));
        }

        if let Some(area) = area_repo.find_by_id(reservation.common_area_id).await? {
            emitter
                .emit(&notification_messages::reservation_confirmation(
                    reservation.user_id,
                    reservation_id,
                    &area.name,
                ))
                .await;
        }

        tracing::info!(reservation_id = %reservation_id, "Reservation confirmed");
        Ok(())
    }

    /// Delete a reservation before its start time, restoring capacity.
    pub async fn cancel(&self, requester: Uuid, reservation_id: Uuid) -> Result<(), ApiError> {
        let reservation_repo = ReservationRepository::new(self.pool.clone());
        let area_repo = CommonAreaRepository::new(self.pool.clone());
        let condo_repo = CondoRepository::new(self.pool.clone());

        let reservation: Reservation = reservation_repo
            .find_by_id(reservation_id)
            .await?
            .ok_or(ReservationError::NotFound("Reservation"))?
            .into();

        let admins = condo_repo
            .admins_for_area(reservation.common_area_id)
            .await?;
        if !authorization::can_manage_reservation(requester, reservation.user_id, &admins) {
            return Err(ReservationError::Forbidden(
                "Only the reservation owner or a condo admin can cancel it",
            )
            .into());
        }

        lifecycle::ensure_cancellable(reservation.start_time, Utc::now())?;

        let mut tx = self.pool.begin().await?;

        let deleted = reservation_repo.delete(&mut tx, reservation_id).await?;
        if deleted == 0 {
            tx.rollback().await?;
            return Err(ReservationError::NotFound("Reservation").into());
        }

        // The strict model derives availability from the reservation set,
        // so only the counter model needs the restore.
        if self.model == AvailabilityModel::Simple {
            area_repo
                .release_capacity(
                    &mut tx,
                    reservation.common_area_id,
                    reservation.number_of_people,
                )
                .await?;
        }

        tx.commit().await?;

        record_reservation_cancelled();
        tracing::info!(
            reservation_id = %reservation_id,
            number_of_people = reservation.number_of_people,
            "Reservation cancelled"
        );
        Ok(())
    }
}
