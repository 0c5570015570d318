//! Notification repository for database operations.
//!
//! The emitter contract: inserting a notification and bumping the user's
//! denormalized unread counter happen in one transaction, so every unread
//! notification increments the counter by exactly one.

use chrono::{DateTime, Utc};
use domain::models::NewNotification;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{NotificationEntity, NotificationTypeDb};
use crate::metrics::QueryTimer;

/// Repository for notification-related database operations.
#[derive(Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Creates a new NotificationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a notification and increment the recipient's unread counter
    /// atomically.
    pub async fn create(
        &self,
        notification: &NewNotification,
    ) -> Result<NotificationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_notification");
        let result = async {
            let mut tx = self.pool.begin().await?;

            let entity = sqlx::query_as::<_, NotificationEntity>(
                r#"
                INSERT INTO notifications (user_id, notification_type, message, reservation_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, user_id, notification_type, message, reservation_id,
                          is_read, created_at
                "#,
            )
            .bind(notification.user_id)
            .bind(NotificationTypeDb::from(notification.notification_type))
            .bind(&notification.message)
            .bind(notification.reservation_id)
            .fetch_one(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                UPDATE users
                SET unread_notifications = unread_notifications + 1,
                    updated_at = now()
                WHERE id = $1
                "#,
            )
            .bind(notification.user_id)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;
            Ok(entity)
        }
        .await;
        timer.record();
        result
    }

    /// List a user's notifications, newest first, keyset-paginated.
    pub async fn list_for_user(
        &self,
        user_id: Uuid,
        cursor: Option<(DateTime<Utc>, Uuid)>,
        limit: i64,
    ) -> Result<Vec<NotificationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_notifications_for_user");
        let result = sqlx::query_as::<_, NotificationEntity>(
            r#"
            SELECT id, user_id, notification_type, message, reservation_id,
                   is_read, created_at
            FROM notifications
            WHERE user_id = $1
              AND ($2::timestamptz IS NULL OR (created_at, id) < ($2, $3))
            ORDER BY created_at DESC, id DESC
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

    /// Read the denormalized unread counter.
    pub async fn unread_count(&self, user_id: Uuid) -> Result<Option<i32>, sqlx::Error> {
        let timer = QueryTimer::new("unread_notification_count");
        let result = sqlx::query_scalar::<_, i32>(
            "SELECT unread_notifications FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Reset the unread counter to zero. Notification rows are untouched.
    pub async fn reset_unread(&self, user_id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("reset_unread_notifications");
        let result = sqlx::query(
            r#"
            UPDATE users
            SET unread_notifications = 0,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map(|r| r.rows_affected());
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: NotificationRepository tests require a database connection and
    // are exercised through the running service.
}
