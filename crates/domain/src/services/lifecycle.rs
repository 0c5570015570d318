//! Reservation lifecycle rules: cancellation and confirmation guards.

use chrono::{DateTime, Utc};

use crate::errors::ReservationError;
use crate::models::{Reservation, ReservationStatus};

/// A reservation may only be cancelled strictly before its scheduled start.
pub fn ensure_cancellable(
    start_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), ReservationError> {
    if now < start_time {
        Ok(())
    } else {
        Err(ReservationError::TooLateToCancel)
    }
}

/// Only a pending reservation that has not yet started can be confirmed.
pub fn ensure_confirmable(
    reservation: &Reservation,
    now: DateTime<Utc>,
) -> Result<(), ReservationError> {
    if reservation.status != ReservationStatus::Pending {
        return Err(ReservationError::Forbidden(
            "Only pending reservations can be confirmed",
        ));
    }
    if now >= reservation.start_time {
        return Err(ReservationError::Forbidden(
            "Reservation has already started",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    fn pending_at(start: DateTime<Utc>) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            common_area_id: Uuid::new_v4(),
            condo_unit_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            start_time: start,
            end_time: None,
            number_of_people: 2,
            status: ReservationStatus::Pending,
            notification_sent: false,
            payment_status: None,
            total_price: None,
            created_at: now() - Duration::hours(1),
        }
    }

    #[test]
    fn test_cancellable_before_start() {
        assert_eq!(ensure_cancellable(now() + Duration::minutes(1), now()), Ok(()));
    }

    #[test]
    fn test_late_cancellation_rejected() {
        // a reservation whose time already passed cannot be cancelled
        assert_eq!(
            ensure_cancellable(now() - Duration::seconds(1), now()),
            Err(ReservationError::TooLateToCancel)
        );
        // exactly at start is already too late
        assert_eq!(
            ensure_cancellable(now(), now()),
            Err(ReservationError::TooLateToCancel)
        );
    }

    #[test]
    fn test_confirmable_pending_future() {
        let r = pending_at(now() + Duration::hours(1));
        assert_eq!(ensure_confirmable(&r, now()), Ok(()));
    }

    #[test]
    fn test_confirm_rejects_non_pending() {
        let mut r = pending_at(now() + Duration::hours(1));
        r.status = ReservationStatus::NoShow;
        assert!(ensure_confirmable(&r, now()).is_err());
    }

    #[test]
    fn test_confirm_rejects_started() {
        let r = pending_at(now() - Duration::minutes(1));
        assert!(ensure_confirmable(&r, now()).is_err());
    }
}
