//! Availability calculation for common areas.
//!
//! Two competing capacity models exist and are kept as distinct strategies
//! behind [`AvailabilityModel`]; their semantics are never merged:
//!
//! - **Simple**: the area carries a materialized `remaining_capacity`
//!   counter, decremented on admission and restored on cancellation. O(1)
//!   reads; the counter is only ever mutated through conditional writes.
//! - **Strict**: remaining capacity is recomputed from the set of active
//!   reservations overlapping the requested window. Correct under
//!   append-only semantics, O(n) in overlapping reservations.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::Reservation;

/// Which capacity model the engine runs under. Selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityModel {
    Simple,
    Strict,
}

impl std::fmt::Display for AvailabilityModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityModel::Simple => write!(f, "simple"),
            AvailabilityModel::Strict => write!(f, "strict"),
        }
    }
}

/// Half-open style overlap test over closed wall-clock intervals:
/// `a` and `b` overlap iff `a.start < b.end && a.end > b.start`.
///
/// Two intervals that merely touch (one ends exactly when the other starts)
/// do not overlap.
pub fn intervals_overlap(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Sum of `number_of_people` across active reservations whose interval
/// overlaps `[start, end)`. Cancelled, completed and no-show reservations
/// hold no capacity. A reservation without an end time occupies a single
/// instant and never overlaps.
pub fn overlapping_people(
    reservations: &[Reservation],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> i32 {
    reservations
        .iter()
        .filter(|r| r.status.is_active())
        .filter(|r| {
            let (r_start, r_end) = r.interval();
            intervals_overlap(r_start, r_end, start, end)
        })
        .map(|r| r.number_of_people)
        .sum()
}

/// Remaining admissible capacity in `[start, end)` under the strict model,
/// floored at zero.
pub fn remaining_in_window(
    max_capacity: i32,
    reservations: &[Reservation],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> i32 {
    (max_capacity - overlapping_people(reservations, start, end)).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReservationStatus;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, hour, min, 0).unwrap()
    }

    fn reservation(
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        people: i32,
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            common_area_id: Uuid::new_v4(),
            condo_unit_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            start_time: start,
            end_time: Some(end),
            number_of_people: people,
            status,
            notification_sent: false,
            payment_status: None,
            total_price: None,
            created_at: start,
        }
    }

    #[test]
    fn test_intervals_overlap() {
        assert!(intervals_overlap(at(10, 0), at(12, 0), at(11, 0), at(13, 0)));
        assert!(intervals_overlap(at(10, 0), at(12, 0), at(10, 30), at(11, 0)));
        // touching endpoints do not overlap
        assert!(!intervals_overlap(at(10, 0), at(12, 0), at(12, 0), at(13, 0)));
        assert!(!intervals_overlap(at(12, 0), at(13, 0), at(10, 0), at(12, 0)));
        // disjoint
        assert!(!intervals_overlap(at(8, 0), at(9, 0), at(10, 0), at(11, 0)));
    }

    #[test]
    fn test_overlapping_people_sums_active_only() {
        let reservations = vec![
            reservation(at(10, 0), at(12, 0), 3, ReservationStatus::Pending),
            reservation(at(11, 0), at(13, 0), 2, ReservationStatus::Confirmed),
            reservation(at(11, 0), at(13, 0), 4, ReservationStatus::Cancelled),
            reservation(at(11, 0), at(13, 0), 4, ReservationStatus::NoShow),
            reservation(at(14, 0), at(15, 0), 5, ReservationStatus::Pending),
        ];

        assert_eq!(overlapping_people(&reservations, at(11, 0), at(12, 0)), 5);
    }

    #[test]
    fn test_overlapping_people_ignores_instantaneous() {
        let mut instant = reservation(at(11, 0), at(11, 0), 3, ReservationStatus::Pending);
        instant.end_time = None;

        assert_eq!(overlapping_people(&[instant], at(10, 0), at(12, 0)), 0);
    }

    #[test]
    fn test_remaining_in_window() {
        let reservations = vec![
            reservation(at(10, 0), at(12, 0), 6, ReservationStatus::Pending),
            reservation(at(11, 0), at(12, 0), 2, ReservationStatus::InUse),
        ];

        assert_eq!(remaining_in_window(10, &reservations, at(11, 0), at(12, 0)), 2);
        // window past all reservations has full capacity
        assert_eq!(remaining_in_window(10, &reservations, at(12, 0), at(13, 0)), 10);
    }

    #[test]
    fn test_remaining_in_window_floors_at_zero() {
        let reservations = vec![reservation(at(10, 0), at(12, 0), 15, ReservationStatus::Pending)];
        assert_eq!(remaining_in_window(10, &reservations, at(10, 0), at(11, 0)), 0);
    }

    // Capacity conservation: for a sequence of creates and cancels, the
    // active overlapping sum never exceeds max capacity when each create is
    // admitted against the current remaining capacity.
    #[test]
    fn test_capacity_conservation_under_creates_and_cancels() {
        let max_capacity = 10;
        let mut committed: Vec<Reservation> = Vec::new();
        let window = (at(10, 0), at(12, 0));

        let requests = [4, 3, 5, 2, 6];
        for people in requests {
            let remaining = remaining_in_window(max_capacity, &committed, window.0, window.1);
            if people <= remaining {
                committed.push(reservation(
                    window.0,
                    window.1,
                    people,
                    ReservationStatus::Pending,
                ));
            }
        }
        // 4 + 3 admitted, 5 rejected, 2 admitted, 6 rejected
        assert_eq!(committed.len(), 3);
        assert!(overlapping_people(&committed, window.0, window.1) <= max_capacity);

        // cancelling one restores its capacity
        committed.remove(0);
        assert_eq!(
            remaining_in_window(max_capacity, &committed, window.0, window.1),
            5
        );
    }

    #[test]
    fn test_model_display_and_config_parse() {
        assert_eq!(AvailabilityModel::Simple.to_string(), "simple");
        assert_eq!(AvailabilityModel::Strict.to_string(), "strict");

        let parsed: AvailabilityModel = serde_json::from_str(r#""strict""#).unwrap();
        assert_eq!(parsed, AvailabilityModel::Strict);
    }
}
