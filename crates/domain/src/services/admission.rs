//! Reservation admission rules.
//!
//! The single authority for deciding whether a reservation request is legal.
//! Each model runs an ordered, short-circuiting pipeline: the first failing
//! check wins and nothing is mutated. The transactional commit (capacity
//! decrement + insert as one unit) lives in the api services layer; these
//! functions are pure.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::errors::ReservationError;
use crate::models::{CommonArea, Reservation, UnitReservationQuota};
use crate::services::availability::overlapping_people;

/// Earliest a simple-model reservation may start, relative to now.
pub const MIN_LEAD_HOURS: i64 = 1;

/// Latest a simple-model reservation may start, relative to now.
pub const MAX_LEAD_HOURS: i64 = 24;

/// Simple-model admission: availability flag, party size, counter capacity,
/// near-term booking window (both endpoints inclusive).
pub fn admit_simple(
    area: &CommonArea,
    number_of_people: i32,
    start_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), ReservationError> {
    if !area.is_available {
        return Err(ReservationError::AmenityUnavailable);
    }
    if number_of_people < 1 {
        return Err(ReservationError::InvalidPartySize(number_of_people));
    }
    if number_of_people > area.remaining_capacity {
        return Err(ReservationError::CapacityExceeded {
            requested: number_of_people,
            remaining: area.remaining_capacity,
        });
    }
    if start_time < now + Duration::hours(MIN_LEAD_HOURS) {
        return Err(ReservationError::WindowTooSoon);
    }
    if start_time > now + Duration::hours(MAX_LEAD_HOURS) {
        return Err(ReservationError::WindowTooFar);
    }
    Ok(())
}

/// Strict-model admission: availability flag, party size, weekday schedule,
/// quota existence, per-reservation quota, overlap capacity, daily quota.
///
/// `overlapping` must hold the area's reservations overlapping
/// `[start_time, end_time)`; `same_day_people` is the unit's committed
/// party-size total on this area for the same calendar day. Both are read
/// under the per-area lock held by the caller.
pub fn admit_strict(
    area: &CommonArea,
    quota: Option<&UnitReservationQuota>,
    overlapping: &[Reservation],
    same_day_people: i32,
    number_of_people: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<(), ReservationError> {
    if !area.is_available {
        return Err(ReservationError::AmenityUnavailable);
    }
    if number_of_people < 1 {
        return Err(ReservationError::InvalidPartySize(number_of_people));
    }
    check_schedule(area, start_time, end_time)?;

    let quota = quota.ok_or(ReservationError::NoQuota)?;
    if number_of_people > quota.max_quota_per_reservation {
        return Err(ReservationError::CapacityExceeded {
            requested: number_of_people,
            remaining: quota.max_quota_per_reservation,
        });
    }

    let occupied = overlapping_people(overlapping, start_time, end_time);
    if occupied + number_of_people > area.max_capacity {
        return Err(ReservationError::CapacityExceeded {
            requested: number_of_people,
            remaining: (area.max_capacity - occupied).max(0),
        });
    }

    if same_day_people + number_of_people > quota.max_quota_per_reservation {
        return Err(ReservationError::DailyQuotaExceeded {
            requested: number_of_people,
            already_reserved: same_day_people,
            quota: quota.max_quota_per_reservation,
        });
    }

    Ok(())
}

/// The requested interval must lie entirely within the area's opening hours
/// for the start day. Intervals crossing midnight, inverted intervals, and
/// areas with no schedule (or closed that day) are all outside schedule.
fn check_schedule(
    area: &CommonArea,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
) -> Result<(), ReservationError> {
    if end_time <= start_time {
        return Err(ReservationError::OutsideSchedule);
    }
    if start_time.date_naive() != end_time.date_naive() {
        return Err(ReservationError::OutsideSchedule);
    }

    let schedule = area.schedule.as_ref().ok_or(ReservationError::OutsideSchedule)?;
    let day = schedule
        .for_weekday(start_time.date_naive().weekday())
        .ok_or(ReservationError::OutsideSchedule)?;

    if day.contains(start_time.time(), end_time.time()) {
        Ok(())
    } else {
        Err(ReservationError::OutsideSchedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CommonAreaType, DaySchedule, ReservationStatus, WeeklySchedule};
    use chrono::{Datelike, NaiveTime, TimeZone};
    use uuid::Uuid;

    fn area(max_capacity: i32, remaining: i32) -> CommonArea {
        CommonArea {
            id: Uuid::new_v4(),
            condo_id: Uuid::new_v4(),
            name: "Gym".to_string(),
            description: String::new(),
            area_type: CommonAreaType::Gym,
            max_capacity,
            remaining_capacity: remaining,
            is_available: remaining > 0,
            schedule: None,
        }
    }

    fn all_week(open: &str, close: &str) -> WeeklySchedule {
        let day = DaySchedule {
            start_time: NaiveTime::parse_from_str(open, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(close, "%H:%M").unwrap(),
        };
        WeeklySchedule {
            monday: Some(day),
            tuesday: Some(day),
            wednesday: Some(day),
            thursday: Some(day),
            friday: Some(day),
            saturday: Some(day),
            sunday: Some(day),
        }
    }

    fn quota(people: i32) -> UnitReservationQuota {
        UnitReservationQuota {
            id: Uuid::new_v4(),
            condo_unit_id: Uuid::new_v4(),
            common_area_id: Uuid::new_v4(),
            max_quota_per_reservation: people,
        }
    }

    fn reservation(
        start: chrono::DateTime<Utc>,
        end: chrono::DateTime<Utc>,
        people: i32,
    ) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            common_area_id: Uuid::new_v4(),
            condo_unit_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            start_time: start,
            end_time: Some(end),
            number_of_people: people,
            status: ReservationStatus::Pending,
            notification_sent: false,
            payment_status: None,
            total_price: None,
            created_at: start,
        }
    }

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap()
    }

    // ---- simple model ----

    #[test]
    fn test_simple_accepts_valid_request() {
        let result = admit_simple(&area(10, 4), 4, now() + Duration::hours(2), now());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_simple_unavailable_area() {
        let result = admit_simple(&area(10, 0), 1, now() + Duration::hours(2), now());
        assert_eq!(result, Err(ReservationError::AmenityUnavailable));
    }

    #[test]
    fn test_simple_invalid_party_size_before_capacity() {
        let result = admit_simple(&area(10, 4), 0, now() + Duration::hours(2), now());
        assert_eq!(result, Err(ReservationError::InvalidPartySize(0)));

        let result = admit_simple(&area(10, 4), -2, now() + Duration::hours(2), now());
        assert_eq!(result, Err(ReservationError::InvalidPartySize(-2)));
    }

    #[test]
    fn test_simple_over_request_rejected() {
        let result = admit_simple(&area(10, 4), 5, now() + Duration::hours(2), now());
        assert_eq!(
            result,
            Err(ReservationError::CapacityExceeded {
                requested: 5,
                remaining: 4
            })
        );
    }

    #[test]
    fn test_simple_exact_exhaustion_accepted() {
        // party size exactly exhausting capacity is an acceptance
        let result = admit_simple(&area(10, 4), 4, now() + Duration::hours(2), now());
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_simple_window_boundaries() {
        let a = area(10, 10);

        // exactly now + 1h is accepted
        assert_eq!(admit_simple(&a, 2, now() + Duration::hours(1), now()), Ok(()));
        // one millisecond short is too soon
        assert_eq!(
            admit_simple(
                &a,
                2,
                now() + Duration::hours(1) - Duration::milliseconds(1),
                now()
            ),
            Err(ReservationError::WindowTooSoon)
        );
        // exactly now + 24h is accepted
        assert_eq!(admit_simple(&a, 2, now() + Duration::hours(24), now()), Ok(()));
        // one millisecond past is too far
        assert_eq!(
            admit_simple(
                &a,
                2,
                now() + Duration::hours(24) + Duration::milliseconds(1),
                now()
            ),
            Err(ReservationError::WindowTooFar)
        );
    }

    #[test]
    fn test_simple_capacity_check_precedes_window_check() {
        // both capacity and window are violated; capacity wins (pipeline order)
        let result = admit_simple(&area(10, 1), 5, now(), now());
        assert!(matches!(
            result,
            Err(ReservationError::CapacityExceeded { .. })
        ));
    }

    // ---- strict model ----

    fn strict_area() -> CommonArea {
        let mut a = area(10, 10);
        a.schedule = Some(all_week("06:00", "22:00"));
        a
    }

    fn window(h1: u32, h2: u32) -> (chrono::DateTime<Utc>, chrono::DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2025, 6, 2, h1, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 2, h2, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_strict_accepts_valid_request() {
        let (start, end) = window(10, 12);
        let result = admit_strict(&strict_area(), Some(&quota(4)), &[], 0, 3, start, end);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_strict_outside_schedule() {
        let (start, end) = window(5, 7);
        let result = admit_strict(&strict_area(), Some(&quota(4)), &[], 0, 2, start, end);
        assert_eq!(result, Err(ReservationError::OutsideSchedule));
    }

    #[test]
    fn test_strict_closed_day() {
        let mut a = strict_area();
        // close on Mondays; 2025-06-02 is a Monday
        a.schedule.as_mut().unwrap().monday = None;
        assert_eq!(now().date_naive().weekday(), chrono::Weekday::Mon);

        let (start, end) = window(10, 12);
        let result = admit_strict(&a, Some(&quota(4)), &[], 0, 2, start, end);
        assert_eq!(result, Err(ReservationError::OutsideSchedule));
    }

    #[test]
    fn test_strict_no_schedule_is_rejection() {
        let (start, end) = window(10, 12);
        let result = admit_strict(&area(10, 10), Some(&quota(4)), &[], 0, 2, start, end);
        assert_eq!(result, Err(ReservationError::OutsideSchedule));
    }

    #[test]
    fn test_strict_interval_crossing_midnight() {
        let start = Utc.with_ymd_and_hms(2025, 6, 2, 21, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 3, 1, 0, 0).unwrap();
        let result = admit_strict(&strict_area(), Some(&quota(4)), &[], 0, 2, start, end);
        assert_eq!(result, Err(ReservationError::OutsideSchedule));
    }

    #[test]
    fn test_strict_missing_quota_is_hard_rejection() {
        let (start, end) = window(10, 12);
        let result = admit_strict(&strict_area(), None, &[], 0, 2, start, end);
        assert_eq!(result, Err(ReservationError::NoQuota));
    }

    #[test]
    fn test_strict_party_size_over_quota() {
        let (start, end) = window(10, 12);
        let result = admit_strict(&strict_area(), Some(&quota(3)), &[], 0, 4, start, end);
        assert_eq!(
            result,
            Err(ReservationError::CapacityExceeded {
                requested: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn test_strict_overlap_capacity() {
        let (start, end) = window(10, 12);
        let existing = vec![
            reservation(window(9, 11).0, window(9, 11).1, 5),
            reservation(window(11, 13).0, window(11, 13).1, 4),
        ];
        // 5 + 4 occupied in [10,12); 2 more exceeds max 10
        let result = admit_strict(&strict_area(), Some(&quota(8)), &existing, 0, 2, start, end);
        assert_eq!(
            result,
            Err(ReservationError::CapacityExceeded {
                requested: 2,
                remaining: 1
            })
        );

        // 1 more fits exactly
        let result = admit_strict(&strict_area(), Some(&quota(8)), &existing, 0, 1, start, end);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_strict_daily_quota_scenario() {
        // unit already holds a reservation for 2 people today, quota is 3:
        // 2 more must be rejected (2 + 2 > 3)
        let (start, end) = window(14, 15);
        let result = admit_strict(&strict_area(), Some(&quota(3)), &[], 2, 2, start, end);
        assert_eq!(
            result,
            Err(ReservationError::DailyQuotaExceeded {
                requested: 2,
                already_reserved: 2,
                quota: 3
            })
        );

        // 1 more fits the quota exactly
        let result = admit_strict(&strict_area(), Some(&quota(3)), &[], 2, 1, start, end);
        assert_eq!(result, Ok(()));
    }
}
