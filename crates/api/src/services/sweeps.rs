//! The two periodic reservation sweeps.
//!
//! Stateless, idempotent batch passes taking `now` as their only input.
//! Each reservation is processed independently: one failure is logged and
//! never aborts the rest of the batch. The conditional writes in the
//! repository (`WHERE notification_sent = false`, `WHERE status =
//! 'pending'`) close the race against concurrent admissions and repeated
//! sweep executions; a notification is only emitted when the guarded write
//! actually changed a row.

use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;

use domain::models::Reservation;
use domain::services::notification as notification_messages;
use domain::services::sweep::{self, EXPIRATION_WINDOW_MINUTES, REMINDER_WINDOW_MINUTES};
use persistence::entities::ReservationWithAreaEntity;
use persistence::repositories::ReservationRepository;

use crate::middleware::metrics::{record_reminders_sent, record_reservations_expired};
use crate::services::notifications::NotificationEmitter;

/// Periodic sweep passes over pending reservations.
#[derive(Clone)]
pub struct SweepService {
    pool: PgPool,
}

impl SweepService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Remind users of pending reservations starting within the next hour.
    /// Returns the number of reminders sent.
    pub async fn run_reminder_sweep(&self, now: DateTime<Utc>) -> Result<usize, sqlx::Error> {
        let repo = ReservationRepository::new(self.pool.clone());
        let emitter = NotificationEmitter::new(self.pool.clone());
        let horizon = now + Duration::minutes(REMINDER_WINDOW_MINUTES);

        let candidates = repo.due_for_reminder(now, horizon).await?;
        let mut sent = 0usize;

        for candidate in candidates {
            // re-check the selection rule on the fetched row
            if !sweep::needs_reminder(&sweep_view(&candidate), now) {
                continue;
            }

            match repo.mark_reminder_sent(candidate.id).await {
                Ok(0) => {
                    // another sweep or an expiration got there first
                    continue;
                }
                Ok(_) => {
                    emitter
                        .emit(&notification_messages::reservation_reminder(
                            candidate.user_id,
                            candidate.id,
                            &candidate.common_area_name,
                        ))
                        .await;
                    sent += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        reservation_id = %candidate.id,
                        error = %e,
                        "Reminder sweep failed for reservation; continuing"
                    );
                }
            }
        }

        record_reminders_sent(sent);
        Ok(sent)
    }

    /// Expire pending reservations starting within the next 30 minutes to
    /// no-show. Returns the number of reservations expired.
    pub async fn run_expiration_sweep(&self, now: DateTime<Utc>) -> Result<usize, sqlx::Error> {
        let repo = ReservationRepository::new(self.pool.clone());
        let emitter = NotificationEmitter::new(self.pool.clone());
        let horizon = now + Duration::minutes(EXPIRATION_WINDOW_MINUTES);

        let candidates = repo.pending_expiring(now, horizon).await?;
        let mut expired = 0usize;

        for candidate in candidates {
            if !sweep::is_expiring(&sweep_view(&candidate), now) {
                continue;
            }

            match repo.mark_no_show(candidate.id).await {
                Ok(0) => {
                    // confirmed or already transitioned between read and write
                    continue;
                }
                Ok(_) => {
                    emitter
                        .emit(&notification_messages::reservation_invalidation(
                            candidate.user_id,
                            candidate.id,
                            &candidate.common_area_name,
                        ))
                        .await;
                    expired += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        reservation_id = %candidate.id,
                        error = %e,
                        "Expiration sweep failed for reservation; continuing"
                    );
                }
            }
        }

        record_reservations_expired(expired);
        Ok(expired)
    }
}

/// Project a sweep candidate row onto the domain model the selection rules
/// take. Pricing fields are irrelevant to sweep decisions.
fn sweep_view(candidate: &ReservationWithAreaEntity) -> Reservation {
    Reservation {
        id: candidate.id,
        common_area_id: candidate.common_area_id,
        condo_unit_id: candidate.condo_unit_id,
        user_id: candidate.user_id,
        start_time: candidate.start_time,
        end_time: candidate.end_time,
        number_of_people: candidate.number_of_people,
        status: candidate.status.into(),
        notification_sent: candidate.notification_sent,
        payment_status: None,
        total_price: None,
        created_at: candidate.created_at,
    }
}
