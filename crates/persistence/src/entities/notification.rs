//! Notification entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{Notification, NotificationType};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for notification types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
pub enum NotificationTypeDb {
    ReservationReminder,
    ReservationConfirmation,
    ReservationInvalidation,
}

impl From<NotificationTypeDb> for NotificationType {
    fn from(value: NotificationTypeDb) -> Self {
        match value {
            NotificationTypeDb::ReservationReminder => NotificationType::ReservationReminder,
            NotificationTypeDb::ReservationConfirmation => {
                NotificationType::ReservationConfirmation
            }
            NotificationTypeDb::ReservationInvalidation => {
                NotificationType::ReservationInvalidation
            }
        }
    }
}

impl From<NotificationType> for NotificationTypeDb {
    fn from(value: NotificationType) -> Self {
        match value {
            NotificationType::ReservationReminder => NotificationTypeDb::ReservationReminder,
            NotificationType::ReservationConfirmation => {
                NotificationTypeDb::ReservationConfirmation
            }
            NotificationType::ReservationInvalidation => {
                NotificationTypeDb::ReservationInvalidation
            }
        }
    }
}

/// Database row mapping for the notifications table.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notification_type: NotificationTypeDb,
    pub message: String,
    pub reservation_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationEntity> for Notification {
    fn from(entity: NotificationEntity) -> Self {
        Notification {
            id: entity.id,
            user_id: entity.user_id,
            notification_type: entity.notification_type.into(),
            message: entity.message,
            reservation_id: entity.reservation_id,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}
