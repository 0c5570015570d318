//! Notification construction for reservation lifecycle events.
//!
//! Only the call contract is owned here: the emitter (persistence layer)
//! writes the row and bumps the user's unread counter; delivery to devices
//! is an external concern.

use uuid::Uuid;

use crate::models::{NewNotification, NotificationType};

/// Reminder sent while a reservation is still unconfirmed an hour before
/// start.
pub fn reservation_reminder(
    user_id: Uuid,
    reservation_id: Uuid,
    area_name: &str,
) -> NewNotification {
    NewNotification {
        user_id,
        notification_type: NotificationType::ReservationReminder,
        message: format!(
            "Your reservation for {area_name} starts in 1 hour. Please confirm it."
        ),
        reservation_id: Some(reservation_id),
    }
}

/// Confirmation acknowledgement after the user confirms a reservation.
pub fn reservation_confirmation(
    user_id: Uuid,
    reservation_id: Uuid,
    area_name: &str,
) -> NewNotification {
    NewNotification {
        user_id,
        notification_type: NotificationType::ReservationConfirmation,
        message: format!("Your reservation for {area_name} is confirmed."),
        reservation_id: Some(reservation_id),
    }
}

/// Invalidation notice when a pending reservation expires to no-show.
pub fn reservation_invalidation(
    user_id: Uuid,
    reservation_id: Uuid,
    area_name: &str,
) -> NewNotification {
    NewNotification {
        user_id,
        notification_type: NotificationType::ReservationInvalidation,
        message: format!(
            "Your reservation for {area_name} was invalidated because it was not confirmed."
        ),
        reservation_id: Some(reservation_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_notification() {
        let user = Uuid::new_v4();
        let reservation = Uuid::new_v4();
        let n = reservation_reminder(user, reservation, "Main Pool");

        assert_eq!(n.user_id, user);
        assert_eq!(n.reservation_id, Some(reservation));
        assert_eq!(n.notification_type, NotificationType::ReservationReminder);
        assert_eq!(
            n.message,
            "Your reservation for Main Pool starts in 1 hour. Please confirm it."
        );
    }

    #[test]
    fn test_confirmation_notification() {
        let n = reservation_confirmation(Uuid::new_v4(), Uuid::new_v4(), "Gym");
        assert_eq!(n.notification_type, NotificationType::ReservationConfirmation);
        assert_eq!(n.message, "Your reservation for Gym is confirmed.");
    }

    #[test]
    fn test_invalidation_notification() {
        let n = reservation_invalidation(Uuid::new_v4(), Uuid::new_v4(), "Sauna");
        assert_eq!(n.notification_type, NotificationType::ReservationInvalidation);
        assert_eq!(
            n.message,
            "Your reservation for Sauna was invalidated because it was not confirmed."
        );
    }
}
