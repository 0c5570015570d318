//! Condo repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::CondoEntity;
use crate::metrics::QueryTimer;

/// Fields for inserting a condo.
#[derive(Debug, Clone)]
pub struct NewCondoRow {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub unique_code: String,
}

/// Repository for condo-related database operations.
#[derive(Clone)]
pub struct CondoRepository {
    pool: PgPool,
}

impl CondoRepository {
    /// Creates a new CondoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a condo and register its first admin in one transaction.
    pub async fn create(
        &self,
        row: &NewCondoRow,
        first_admin: Uuid,
    ) -> Result<CondoEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_condo");
        let result = async {
            let mut tx = self.pool.begin().await?;

            let entity = sqlx::query_as::<_, CondoEntity>(
                r#"
                INSERT INTO condos (name, address, city, state, zip_code, country, unique_code)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, name, address, city, state, zip_code, country, unique_code,
                          is_active, created_at, updated_at
                "#,
            )
            .bind(&row.name)
            .bind(&row.address)
            .bind(&row.city)
            .bind(&row.state)
            .bind(&row.zip_code)
            .bind(&row.country)
            .bind(&row.unique_code)
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query("INSERT INTO condo_admins (condo_id, user_id) VALUES ($1, $2)")
                .bind(entity.id)
                .bind(first_admin)
                .execute(&mut *tx)
                .await?;

            tx.commit().await?;
            Ok(entity)
        }
        .await;
        timer.record();
        result
    }

    /// Find a condo by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<CondoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_condo_by_id");
        let result = sqlx::query_as::<_, CondoEntity>(
            r#"
            SELECT id, name, address, city, state, zip_code, country, unique_code,
                   is_active, created_at, updated_at
            FROM condos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a condo by its unique code (duplicate check at creation).
    pub async fn find_by_unique_code(
        &self,
        unique_code: &str,
    ) -> Result<Option<CondoEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_condo_by_unique_code");
        let result = sqlx::query_as::<_, CondoEntity>(
            r#"
            SELECT id, name, address, city, state, zip_code, country, unique_code,
                   is_active, created_at, updated_at
            FROM condos
            WHERE unique_code = $1
            "#,
        )
        .bind(unique_code)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Admin user ids of a condo.
    pub async fn admins(&self, condo_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
        let timer = QueryTimer::new("condo_admins");
        let result = sqlx::query_scalar::<_, Uuid>(
            "SELECT user_id FROM condo_admins WHERE condo_id = $1",
        )
        .bind(condo_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Admin user ids of the condo owning a common area. One query resolves
    /// the ownership chain area -> condo -> admins.
    pub async fn admins_for_area(&self, common_area_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
        let timer = QueryTimer::new("condo_admins_for_area");
        let result = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT ca_admins.user_id
            FROM condo_admins ca_admins
            JOIN common_areas area ON area.condo_id = ca_admins.condo_id
            WHERE area.id = $1
            "#,
        )
        .bind(common_area_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Whether the user administers the condo.
    pub async fn is_admin(&self, condo_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("condo_is_admin");
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM condo_admins WHERE condo_id = $1 AND user_id = $2)",
        )
        .bind(condo_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: CondoRepository tests require a database connection and are
    // exercised through the running service.
}
