//! Common area repository for database operations.

use domain::models::WeeklySchedule;
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::{CommonAreaEntity, CommonAreaTypeDb};
use crate::metrics::QueryTimer;

/// Repository for common-area-related database operations.
#[derive(Clone)]
pub struct CommonAreaRepository {
    pool: PgPool,
}

impl CommonAreaRepository {
    /// Creates a new CommonAreaRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new common area. The capacity counter starts full.
    pub async fn create(
        &self,
        condo_id: Uuid,
        name: &str,
        description: &str,
        area_type: CommonAreaTypeDb,
        max_capacity: i32,
        schedule: Option<&WeeklySchedule>,
    ) -> Result<CommonAreaEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_common_area");
        let result = sqlx::query_as::<_, CommonAreaEntity>(
            r#"
            INSERT INTO common_areas
                (condo_id, name, description, area_type, max_capacity,
                 remaining_capacity, is_available, schedule)
            VALUES ($1, $2, $3, $4, $5, $5, true, $6)
            RETURNING id, condo_id, name, description, area_type, max_capacity,
                      remaining_capacity, is_available, schedule, created_at, updated_at
            "#,
        )
        .bind(condo_id)
        .bind(name)
        .bind(description)
        .bind(area_type)
        .bind(max_capacity)
        .bind(schedule.map(Json))
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a common area by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CommonAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_common_area_by_id");
        let result = sqlx::query_as::<_, CommonAreaEntity>(
            r#"
            SELECT id, condo_id, name, description, area_type, max_capacity,
                   remaining_capacity, is_available, schedule, created_at, updated_at
            FROM common_areas
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a common area by ID, locking its row for the rest of the
    /// transaction. This is the per-area single-writer lock the strict
    /// admission path serializes on.
    pub async fn find_by_id_for_update(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<Option<CommonAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_common_area_for_update");
        let result = sqlx::query_as::<_, CommonAreaEntity>(
            r#"
            SELECT id, condo_id, name, description, area_type, max_capacity,
                   remaining_capacity, is_available, schedule, created_at, updated_at
            FROM common_areas
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await;
        timer.record();
        result
    }

    /// List all common areas of a condo.
    pub async fn list_for_condo(
        &self,
        condo_id: Uuid,
    ) -> Result<Vec<CommonAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_common_areas_for_condo");
        let result = sqlx::query_as::<_, CommonAreaEntity>(
            r#"
            SELECT id, condo_id, name, description, area_type, max_capacity,
                   remaining_capacity, is_available, schedule, created_at, updated_at
            FROM common_areas
            WHERE condo_id = $1
            ORDER BY name
            "#,
        )
        .bind(condo_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update name/description/schedule; missing fields keep their value.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        description: Option<&str>,
        schedule: Option<&WeeklySchedule>,
    ) -> Result<Option<CommonAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_common_area");
        let result = sqlx::query_as::<_, CommonAreaEntity>(
            r#"
            UPDATE common_areas
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                schedule = COALESCE($4, schedule),
                updated_at = now()
            WHERE id = $1
            RETURNING id, condo_id, name, description, area_type, max_capacity,
                      remaining_capacity, is_available, schedule, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(schedule.map(Json))
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Conditionally take `people` out of the capacity counter.
    ///
    /// Single-statement compare-and-swap: the decrement only happens while
    /// `remaining_capacity >= people`, and availability is recomputed from
    /// the new counter in the same write. Returns the number of rows
    /// updated; 0 means the capacity check lost to a concurrent admission.
    pub async fn reserve_capacity(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        people: i32,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("reserve_common_area_capacity");
        let result = sqlx::query(
            r#"
            UPDATE common_areas
            SET remaining_capacity = remaining_capacity - $2,
                is_available = remaining_capacity - $2 > 0,
                updated_at = now()
            WHERE id = $1 AND remaining_capacity >= $2
            "#,
        )
        .bind(id)
        .bind(people)
        .execute(&mut *conn)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Return `people` to the capacity counter, capped at `max_capacity`,
    /// with availability derived from the restored counter.
    pub async fn release_capacity(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
        people: i32,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("release_common_area_capacity");
        let result = sqlx::query(
            r#"
            UPDATE common_areas
            SET remaining_capacity = LEAST(remaining_capacity + $2, max_capacity),
                is_available = LEAST(remaining_capacity + $2, max_capacity) > 0,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(people)
        .execute(&mut *conn)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Count reservations still holding capacity on this area.
    pub async fn count_active_reservations(&self, id: Uuid) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_active_reservations_for_area");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM reservations
            WHERE common_area_id = $1
              AND status IN ('pending', 'confirmed', 'in_use')
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Delete a common area. Callers must have checked for active
    /// reservations first.
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_common_area");
        let result = sqlx::query("DELETE FROM common_areas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|r| r.rows_affected());
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: CommonAreaRepository tests require a database connection and are
    // exercised through the running service.
}
