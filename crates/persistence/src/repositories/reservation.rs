//! Reservation repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::entities::{ReservationEntity, ReservationWithAreaEntity};
use crate::metrics::QueryTimer;

/// Fields for inserting a reservation.
#[derive(Debug, Clone)]
pub struct NewReservationRow {
    pub common_area_id: Uuid,
    pub condo_unit_id: Uuid,
    pub user_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub number_of_people: i32,
}

/// Repository for reservation-related database operations.
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a pending reservation inside the caller's transaction, so the
    /// insert and the capacity mutation commit or roll back as one unit.
    pub async fn create(
        &self,
        conn: &mut PgConnection,
        row: &NewReservationRow,
    ) -> Result<ReservationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_reservation");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            INSERT INTO reservations
                (common_area_id, condo_unit_id, user_id, start_time, end_time,
                 number_of_people, status, notification_sent)
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', false)
            RETURNING id, common_area_id, condo_unit_id, user_id, start_time, end_time,
                      number_of_people, status, notification_sent, payment_status,
                      total_price, created_at
            "#,
        )
        .bind(row.common_area_id)
        .bind(row.condo_unit_id)
        .bind(row.user_id)
        .bind(row.start_time)
        .bind(row.end_time)
        .bind(row.number_of_people)
        .fetch_one(&mut *conn)
        .await;
        timer.record();
        result
    }

    /// Find a reservation by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_reservation_by_id");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            SELECT id, common_area_id, condo_unit_id, user_id, start_time, end_time,
                   number_of_people, status, notification_sent, payment_status,
                   total_price, created_at
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active reservations on an area whose interval overlaps
    /// `[start, end)`. Read inside the admission transaction, under the
    /// area's row lock.
    pub async fn overlapping_for_area(
        &self,
        conn: &mut PgConnection,
        common_area_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("overlapping_reservations_for_area");
        let result = sqlx::query_as::<_, ReservationEntity>(
            r#"
            SELECT id, common_area_id, condo_unit_id, user_id, start_time, end_time,
                   number_of_people, status, notification_sent, payment_status,
                   total_price, created_at
            FROM reservations
            WHERE common_area_id = $1
              AND status IN ('pending', 'confirmed', 'in_use')
              AND end_time IS NOT NULL
              AND start_time < $3
              AND end_time > $2
            "#,
        )
        .bind(common_area_id)
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await;
        timer.record();
        result
    }

    /// Sum of party sizes the unit has committed on this area within
    /// `[day_start, day_end)`.
    pub async fn same_day_people(
        &self,
        conn: &mut PgConnection,
        condo_unit_id: Uuid,
        common_area_id: Uuid,
        day_start: DateTime<Utc>,
        day_end: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("same_day_people_for_unit");
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COALESCE(SUM(number_of_people), 0)
            FROM reservations
            WHERE condo_unit_id = $1
              AND common_area_id = $2
              AND status IN ('pending', 'confirmed', 'in_use')
              AND start_time >= $3
              AND start_time < $4
            "#,
        )
        .bind(condo_unit_id)
        .bind(common_area_id)
        .bind(day_start)
        .bind(day_end)
        .fetch_one(&mut *conn)
        .await;
        timer.record();
        result
    }

    /// List a user's reservations, newest first, keyset-paginated.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        cursor: Option<(DateTime<Utc>, Uuid)>,
        limit: i64,
    ) -> Result<Vec<ReservationWithAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_reservations_for_user");
        let result = sqlx::query_as::<_, ReservationWithAreaEntity>(
            r#"
            SELECT r.id, r.common_area_id, ca.name AS common_area_name, r.condo_unit_id,
                   r.user_id, r.start_time, r.end_time, r.number_of_people, r.status, r.notification_sent,
                   r.created_at
            FROM reservations r
            JOIN common_areas ca ON r.common_area_id = ca.id
            WHERE r.user_id = $1
              AND ($2::timestamptz IS NULL OR (r.created_at, r.id) < ($2, $3))
            ORDER BY r.created_at DESC, r.id DESC
            LIMIT $4
            "#,
        )
        .bind(user_id)
        .bind(cursor.map(|(ts, _)| ts))
        .bind(cursor.map(|(_, id)| id))
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List a condo's reservations across all its areas, newest first,
    /// keyset-paginated.
    pub async fn list_for_condo(
        &self,
        condo_id: Uuid,
        cursor: Option<(DateTime<Utc>, Uuid)>,
        limit: i64,
    ) -> Result<Vec<ReservationWithAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_reservations_for_condo");
        let result = sqlx::query_as::<_, ReservationWithAreaEntity>(
            r#"
            SELECT r.id, r.common_area_id, ca.name AS common_area_name, r.condo_unit_id,
                   r.user_id, r.start_time, r.end_time, r.number_of_people, r.status, r.notification_sent,
                   r.created_at
            FROM reservations r
            JOIN common_areas ca ON r.common_area_id = ca.id
            WHERE ca.condo_id = $1
              AND ($2::timestamptz IS NULL OR (r.created_at, r.id) < ($2, $3))
            ORDER BY r.created_at DESC, r.id DESC
            LIMIT $4
            "#,
        )
        .bind(condo_id)
        .bind(cursor.map(|(ts, _)| ts))
        .bind(cursor.map(|(_, id)| id))
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Pending, not-yet-notified reservations starting inside
    /// `(now, horizon]`, joined with the area name for the reminder text.
    pub async fn due_for_reminder(
        &self,
        now: DateTime<Utc>,
        horizon: DateTime<Utc>,
    ) -> Result<Vec<ReservationWithAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("reservations_due_for_reminder");
        let result = sqlx::query_as::<_, ReservationWithAreaEntity>(
            r#"
            SELECT r.id, r.common_area_id, ca.name AS common_area_name, r.condo_unit_id,
                   r.user_id, r.start_time, r.end_time, r.number_of_people, r.status, r.notification_sent,
                   r.created_at
            FROM reservations r
            JOIN common_areas ca ON r.common_area_id = ca.id
            WHERE r.status = 'pending'
              AND r.notification_sent = false
              AND r.start_time > $1
              AND r.start_time <= $2
            ORDER BY r.start_time
            "#,
        )
        .bind(now)
        .bind(horizon)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Pending reservations starting inside `(now, horizon]`, candidates
    /// for expiration to no-show.
    pub async fn pending_expiring(
        &self,
        now: DateTime<Utc>,
        horizon: DateTime<Utc>,
    ) -> Result<Vec<ReservationWithAreaEntity>, sqlx::Error> {
        let timer = QueryTimer::new("pending_expiring_reservations");
        let result = sqlx::query_as::<_, ReservationWithAreaEntity>(
            r#"
            SELECT r.id, r.common_area_id, ca.name AS common_area_name, r.condo_unit_id,
                   r.user_id, r.start_time, r.end_time, r.number_of_people, r.status, r.notification_sent,
                   r.created_at
            FROM reservations r
            JOIN common_areas ca ON r.common_area_id = ca.id
            WHERE r.status = 'pending'
              AND r.start_time > $1
              AND r.start_time <= $2
            ORDER BY r.start_time
            "#,
        )
        .bind(now)
        .bind(horizon)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Flip the reminder flag. Conditional on the flag still being unset
    /// and the reservation still pending, so concurrent sweeps (or a sweep
    /// racing an expiration) notify at most once. Returns rows updated.
    pub async fn mark_reminder_sent(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("mark_reservation_reminder_sent");
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET notification_sent = true
            WHERE id = $1 AND notification_sent = false AND status = 'pending'
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Transition a still-pending reservation to no-show. Returns rows
    /// updated; 0 means it was confirmed or already transitioned meanwhile.
    pub async fn mark_no_show(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("mark_reservation_no_show");
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET status = 'no_show'
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Transition a still-pending reservation to confirmed. Returns rows
    /// updated; 0 means the sweep got there first.
    pub async fn mark_confirmed(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("mark_reservation_confirmed");
        let result = sqlx::query(
            r#"
            UPDATE reservations
            SET status = 'confirmed'
            WHERE id = $1 AND status = 'pending'
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }

    /// Delete a reservation inside the caller's transaction (cancellation
    /// deletes outright; capacity restore shares the transaction).
    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_reservation");
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
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
    // Note: ReservationRepository tests require a database connection and
    // are exercised through the running service.
}
