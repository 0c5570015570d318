//! Condo unit and unit request repositories for database operations.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::{CondoUnitEntity, ResidentRoleDb, UnitRequestEntity};
use crate::metrics::QueryTimer;

/// Repository for condo-unit-related database operations.
#[derive(Clone)]
pub struct CondoUnitRepository {
    pool: PgPool,
}

impl CondoUnitRepository {
    /// Creates a new CondoUnitRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a unit inside the caller's transaction (unit creation and
    /// resident assignment commit together on request approval).
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        condo_id: Uuid,
        building_number: Option<&str>,
        floor_number: Option<&str>,
        unit_number: &str,
        is_rented: bool,
        phone: Option<&str>,
    ) -> Result<CondoUnitEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_condo_unit");
        let result = sqlx::query_as::<_, CondoUnitEntity>(
            r#"
            INSERT INTO condo_units
                (condo_id, building_number, floor_number, unit_number, is_rented, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, condo_id, building_number, floor_number, unit_number,
                      is_rented, phone, created_at, updated_at
            "#,
        )
        .bind(condo_id)
        .bind(building_number)
        .bind(floor_number)
        .bind(unit_number)
        .bind(is_rented)
        .bind(phone)
        .fetch_one(&mut *conn)
        .await;
        timer.record();
        result
    }

    /// Find a unit by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CondoUnitEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_condo_unit_by_id");
        let result = sqlx::query_as::<_, CondoUnitEntity>(
            r#"
            SELECT id, condo_id, building_number, floor_number, unit_number,
                   is_rented, phone, created_at, updated_at
            FROM condo_units
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a unit by its number within a condo (duplicate check on
    /// approval).
    pub async fn find_by_number(
        &self,
        condo_id: Uuid,
        unit_number: &str,
    ) -> Result<Option<CondoUnitEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_condo_unit_by_number");
        let result = sqlx::query_as::<_, CondoUnitEntity>(
            r#"
            SELECT id, condo_id, building_number, floor_number, unit_number,
                   is_rented, phone, created_at, updated_at
            FROM condo_units
            WHERE condo_id = $1 AND unit_number = $2
            "#,
        )
        .bind(condo_id)
        .bind(unit_number)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Register a resident on a unit inside the caller's transaction.
    pub async fn add_resident(
        &self,
        conn: &mut PgConnection,
        unit_id: Uuid,
        user_id: Uuid,
        role: ResidentRoleDb,
    ) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("add_unit_resident");
        let result = sqlx::query(
            "INSERT INTO unit_residents (condo_unit_id, user_id, role) VALUES ($1, $2, $3)",
        )
        .bind(unit_id)
        .bind(user_id)
        .bind(role)
        .execute(&mut *conn)
        .await
        .map(|_| ());
        timer.record();
        result
    }

    /// Whether the user lives in (owns or rents) the unit.
    pub async fn is_resident(&self, unit_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("condo_unit_is_resident");
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM unit_residents WHERE condo_unit_id = $1 AND user_id = $2)",
        )
        .bind(unit_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

/// Repository for unit association requests.
#[derive(Clone)]
pub struct UnitRequestRepository {
    pool: PgPool,
}

impl UnitRequestRepository {
    /// Creates a new UnitRequestRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a resident's association request.
    pub async fn create(
        &self,
        user_id: Uuid,
        condo_id: Uuid,
        building_number: Option<&str>,
        floor_number: Option<&str>,
        unit_number: &str,
        phone: Option<&str>,
        is_owner: bool,
    ) -> Result<UnitRequestEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_unit_request");
        let result = sqlx::query_as::<_, UnitRequestEntity>(
            r#"
            INSERT INTO unit_requests
                (user_id, condo_id, building_number, floor_number, unit_number,
                 phone, is_owner)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, condo_id, building_number, floor_number, unit_number,
                      phone, is_owner, status, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(condo_id)
        .bind(building_number)
        .bind(floor_number)
        .bind(unit_number)
        .bind(phone)
        .bind(is_owner)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a unit request by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<UnitRequestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_unit_request_by_id");
        let result = sqlx::query_as::<_, UnitRequestEntity>(
            r#"
            SELECT id, user_id, condo_id, building_number, floor_number, unit_number,
                   phone, is_owner, status, created_at, updated_at
            FROM unit_requests
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Pending requests for a condo, oldest first.
    pub async fn list_pending_for_condo(
        &self,
        condo_id: Uuid,
    ) -> Result<Vec<UnitRequestEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_pending_unit_requests");
        let result = sqlx::query_as::<_, UnitRequestEntity>(
            r#"
            SELECT id, user_id, condo_id, building_number, floor_number, unit_number,
                   phone, is_owner, status, created_at, updated_at
            FROM unit_requests
            WHERE condo_id = $1 AND status = 'pending'
            ORDER BY created_at
            "#,
        )
        .bind(condo_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Mark a still-pending request approved, inside the caller's
    /// transaction. Returns rows updated; 0 means it was already decided.
    pub async fn mark_approved(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("approve_unit_request");
        let result = sqlx::query(
            r#"
            UPDATE unit_requests
            SET status = 'approved', updated_at = now()
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: unit repositories require a database connection and are
    // exercised through the running service.
}
