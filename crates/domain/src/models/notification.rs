//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    ReservationReminder,
    ReservationConfirmation,
    ReservationInvalidation,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::ReservationReminder => write!(f, "reservation_reminder"),
            NotificationType::ReservationConfirmation => write!(f, "reservation_confirmation"),
            NotificationType::ReservationInvalidation => write!(f, "reservation_invalidation"),
        }
    }
}

/// A notification addressed to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A notification to be written by the emitter.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    pub message: String,
    pub reservation_id: Option<Uuid>,
}

/// Query parameters for notification listings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ListNotificationsQuery {
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

/// Response for notification listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListNotificationsResponse {
    pub data: Vec<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Response for the unread counter.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct UnreadCountResponse {
    pub unread: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_display() {
        assert_eq!(
            NotificationType::ReservationReminder.to_string(),
            "reservation_reminder"
        );
        assert_eq!(
            NotificationType::ReservationConfirmation.to_string(),
            "reservation_confirmation"
        );
        assert_eq!(
            NotificationType::ReservationInvalidation.to_string(),
            "reservation_invalidation"
        );
    }

    #[test]
    fn test_notification_type_serde() {
        let json = serde_json::to_string(&NotificationType::ReservationInvalidation).unwrap();
        assert_eq!(json, r#""reservation_invalidation""#);
    }

    #[test]
    fn test_notification_serialization_skips_empty_reservation() {
        let notification = Notification {
            id: Uuid::nil(),
            user_id: Uuid::nil(),
            notification_type: NotificationType::ReservationReminder,
            message: "msg".to_string(),
            reservation_id: None,
            is_read: false,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&notification).unwrap();
        assert!(!json.contains("reservation_id"));
    }
}
