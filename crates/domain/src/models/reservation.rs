//! Reservation domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    InUse,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Whether a reservation in this status still holds capacity.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ReservationStatus::Pending | ReservationStatus::Confirmed | ReservationStatus::InUse
        )
    }

    /// Legal status transitions. Deletion is modelled separately (a pending
    /// or confirmed reservation is removed outright on cancellation).
    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed) | (Pending, NoShow) | (Confirmed, InUse) | (InUse, Completed)
        )
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Pending => write!(f, "pending"),
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::InUse => write!(f, "in_use"),
            ReservationStatus::Completed => write!(f, "completed"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
            ReservationStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// Payment status for priced reservations (social rooms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Paid => write!(f, "paid"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// A booking of a common area by a unit's resident.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Reservation {
    pub id: Uuid,
    pub common_area_id: Uuid,
    pub condo_unit_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    /// End of the booked interval; absent in the simple model, where a
    /// reservation occupies a single instant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub number_of_people: i32,
    pub status: ReservationStatus,
    pub notification_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// The occupied interval. A reservation without an end time occupies a
    /// single instant at its start.
    pub fn interval(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start_time, self.end_time.unwrap_or(self.start_time))
    }
}

/// Request to create a reservation. Party size is not validated here: the
/// admission pipeline owns that check and rejects with its own reason.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateReservationRequest {
    pub common_area_id: Uuid,
    pub condo_unit_id: Uuid,
    pub number_of_people: i32,
    pub start_time: DateTime<Utc>,
    /// Required by the strict availability model, ignored by the simple one.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

/// Response after creating a reservation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateReservationResponse {
    pub id: Uuid,
    pub status: ReservationStatus,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub number_of_people: i32,
}

/// Reservation item for listings, with the area name denormalized for
/// display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReservationItem {
    pub id: Uuid,
    pub common_area_id: Uuid,
    pub common_area_name: String,
    pub condo_unit_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    pub number_of_people: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// Query parameters for reservation listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListReservationsQuery {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Response for reservation listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListReservationsResponse {
    pub data: Vec<ReservationItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
