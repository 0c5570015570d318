//! Unit reservation quota repository for database operations.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::UnitReservationQuotaEntity;
use crate::metrics::QueryTimer;

/// Repository for per-unit reservation quotas (strict availability model).
#[derive(Clone)]
pub struct QuotaRepository {
    pool: PgPool,
}

impl QuotaRepository {
    /// Creates a new QuotaRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Set (or replace) a unit's quota on a common area.
    pub async fn upsert(
        &self,
        condo_unit_id: Uuid,
        common_area_id: Uuid,
        max_quota_per_reservation: i32,
    ) -> Result<UnitReservationQuotaEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_unit_reservation_quota");
        let result = sqlx::query_as::<_, UnitReservationQuotaEntity>(
            r#"
            INSERT INTO unit_reservation_quotas
                (condo_unit_id, common_area_id, max_quota_per_reservation)
            VALUES ($1, $2, $3)
            ON CONFLICT (condo_unit_id, common_area_id)
            DO UPDATE SET max_quota_per_reservation = EXCLUDED.max_quota_per_reservation,
                          updated_at = now()
            RETURNING id, condo_unit_id, common_area_id, max_quota_per_reservation,
                      created_at, updated_at
            "#,
        )
        .bind(condo_unit_id)
        .bind(common_area_id)
        .bind(max_quota_per_reservation)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// The quota for a (unit, area) pair, read inside the admission
    /// transaction.
    pub async fn find_for_unit_and_area(
        &self,
        conn: &mut PgConnection,
        condo_unit_id: Uuid,
        common_area_id: Uuid,
    ) -> Result<Option<UnitReservationQuotaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_quota_for_unit_and_area");
        let result = sqlx::query_as::<_, UnitReservationQuotaEntity>(
            r#"
            SELECT id, condo_unit_id, common_area_id, max_quota_per_reservation,
                   created_at, updated_at
            FROM unit_reservation_quotas
            WHERE condo_unit_id = $1 AND common_area_id = $2
            "#,
        )
        .bind(condo_unit_id)
        .bind(common_area_id)
        .fetch_optional(&mut *conn)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: QuotaRepository tests require a database connection and are
    // exercised through the running service.
}
