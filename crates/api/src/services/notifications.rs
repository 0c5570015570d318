//! Notification emitter facade.
//!
//! Notifications are a fire-and-forget side channel: a failed write is
//! logged and never fails the operation that triggered it. Delivery to
//! devices is an external concern; this backend only persists the
//! notification and bumps the user's unread counter.

use sqlx::PgPool;

use domain::models::NewNotification;
use persistence::repositories::NotificationRepository;

/// Writes notifications as a side effect of lifecycle transitions.
#[derive(Clone)]
pub struct NotificationEmitter {
    repo: NotificationRepository,
}

impl NotificationEmitter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: NotificationRepository::new(pool),
        }
    }

    /// Persist a notification; errors are logged, not propagated.
    pub async fn emit(&self, notification: &NewNotification) {
        match self.repo.create(notification).await {
            Ok(entity) => {
                tracing::debug!(
                    notification_id = %entity.id,
                    user_id = %notification.user_id,
                    notification_type = %notification.notification_type,
                    "Notification emitted"
                );
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %notification.user_id,
                    notification_type = %notification.notification_type,
                    error = %e,
                    "Failed to emit notification"
                );
            }
        }
    }
}
