//! Unit reservation quota entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::UnitReservationQuota;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the unit_reservation_quotas table.
#[derive(Debug, Clone, FromRow)]
pub struct UnitReservationQuotaEntity {
    pub id: Uuid,
    pub condo_unit_id: Uuid,
    pub common_area_id: Uuid,
    pub max_quota_per_reservation: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UnitReservationQuotaEntity> for UnitReservationQuota {
    fn from(entity: UnitReservationQuotaEntity) -> Self {
        UnitReservationQuota {
            id: entity.id,
            condo_unit_id: entity.condo_unit_id,
            common_area_id: entity.common_area_id,
            max_quota_per_reservation: entity.max_quota_per_reservation,
        }
    }
}
