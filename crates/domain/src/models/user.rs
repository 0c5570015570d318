//! User domain models.
//!
//! Users are created and authenticated by an upstream system; this backend
//! consumes their ids as already-validated inputs and maintains only the
//! denormalized unread-notification counter.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user as seen by this backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_admin: bool,
    pub is_tenant: bool,
    /// Denormalized count of unread notifications; incremented by the
    /// notification emitter, reset independently of notification rows.
    pub unread_notifications: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serde_skips_missing_fields() {
        let user = User {
            id: Uuid::nil(),
            name: None,
            last_name: None,
            email: None,
            phone: None,
            is_admin: false,
            is_tenant: true,
            unread_notifications: 3,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("email"));
        assert!(json.contains("\"unread_notifications\":3"));
    }
}
