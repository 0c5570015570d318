//! Reservation entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{PaymentStatus, Reservation, ReservationItem, ReservationStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for reservation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
pub enum ReservationStatusDb {
    Pending,
    Confirmed,
    InUse,
    Completed,
    Cancelled,
    NoShow,
}

impl From<ReservationStatusDb> for ReservationStatus {
    fn from(value: ReservationStatusDb) -> Self {
        match value {
            ReservationStatusDb::Pending => ReservationStatus::Pending,
            ReservationStatusDb::Confirmed => ReservationStatus::Confirmed,
            ReservationStatusDb::InUse => ReservationStatus::InUse,
            ReservationStatusDb::Completed => ReservationStatus::Completed,
            ReservationStatusDb::Cancelled => ReservationStatus::Cancelled,
            ReservationStatusDb::NoShow => ReservationStatus::NoShow,
        }
    }
}

impl From<ReservationStatus> for ReservationStatusDb {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Pending => ReservationStatusDb::Pending,
            ReservationStatus::Confirmed => ReservationStatusDb::Confirmed,
            ReservationStatus::InUse => ReservationStatusDb::InUse,
            ReservationStatus::Completed => ReservationStatusDb::Completed,
            ReservationStatus::Cancelled => ReservationStatusDb::Cancelled,
            ReservationStatus::NoShow => ReservationStatusDb::NoShow,
        }
    }
}

/// Database enum for payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatusDb {
    Pending,
    Paid,
    Failed,
}

impl From<PaymentStatusDb> for PaymentStatus {
    fn from(value: PaymentStatusDb) -> Self {
        match value {
            PaymentStatusDb::Pending => PaymentStatus::Pending,
            PaymentStatusDb::Paid => PaymentStatus::Paid,
            PaymentStatusDb::Failed => PaymentStatus::Failed,
        }
    }
}

/// Database row mapping for the reservations table.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationEntity {
    pub id: Uuid,
    pub common_area_id: Uuid,
    pub condo_unit_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub number_of_people: i32,
    pub status: ReservationStatusDb,
    pub notification_sent: bool,
    pub payment_status: Option<PaymentStatusDb>,
    pub total_price: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationEntity> for Reservation {
    fn from(entity: ReservationEntity) -> Self {
        Reservation {
            id: entity.id,
            common_area_id: entity.common_area_id,
            condo_unit_id: entity.condo_unit_id,
            user_id: entity.user_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            number_of_people: entity.number_of_people,
            status: entity.status.into(),
            notification_sent: entity.notification_sent,
            payment_status: entity.payment_status.map(Into::into),
            total_price: entity.total_price,
            created_at: entity.created_at,
        }
    }
}

/// Reservation joined with its common area's name, for listings and the
/// background sweeps.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationWithAreaEntity {
    pub id: Uuid,
    pub common_area_id: Uuid,
    pub common_area_name: String,
    pub condo_unit_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub number_of_people: i32,
    pub status: ReservationStatusDb,
    pub notification_sent: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationWithAreaEntity> for ReservationItem {
    fn from(entity: ReservationWithAreaEntity) -> Self {
        ReservationItem {
            id: entity.id,
            common_area_id: entity.common_area_id,
            common_area_name: entity.common_area_name,
            condo_unit_id: entity.condo_unit_id,
            user_id: entity.user_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            number_of_people: entity.number_of_people,
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_db_round_trip() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Confirmed,
            ReservationStatus::InUse,
            ReservationStatus::Completed,
            ReservationStatus::Cancelled,
            ReservationStatus::NoShow,
        ] {
            let db: ReservationStatusDb = status.into();
            let back: ReservationStatus = db.into();
            assert_eq!(back, status);
        }
    }
}
