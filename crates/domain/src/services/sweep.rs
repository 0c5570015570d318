//! Selection rules for the background reservation sweeps.
//!
//! Both sweeps are stateless batch jobs taking `now` as their only external
//! input. The repository applies the same filters in SQL; these predicates
//! are the single statement of the semantics and re-checked on fetched rows.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Reservation, ReservationStatus};

/// How far ahead the reminder sweep looks.
pub const REMINDER_WINDOW_MINUTES: i64 = 60;

/// Pending reservations inside this pre-start window expire to no-show.
pub const EXPIRATION_WINDOW_MINUTES: i64 = 30;

/// Whether a reservation is due a reminder: still pending, not yet
/// notified, and starting within the next hour. The `notification_sent`
/// guard makes repeated sweeps idempotent per reservation.
pub fn needs_reminder(reservation: &Reservation, now: DateTime<Utc>) -> bool {
    reservation.status == ReservationStatus::Pending
        && !reservation.notification_sent
        && now < reservation.start_time
        && reservation.start_time <= now + Duration::minutes(REMINDER_WINDOW_MINUTES)
}

/// Whether a still-pending reservation has entered the no-show window:
/// starting within the next 30 minutes without having been confirmed.
/// Already-transitioned reservations are excluded by the `pending` filter,
/// which is what makes the expiration sweep idempotent.
pub fn is_expiring(reservation: &Reservation, now: DateTime<Utc>) -> bool {
    reservation.status == ReservationStatus::Pending
        && now < reservation.start_time
        && reservation.start_time <= now + Duration::minutes(EXPIRATION_WINDOW_MINUTES)
}
