//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::User;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_admin: bool,
    pub is_tenant: bool,
    pub unread_notifications: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        User {
            id: entity.id,
            name: entity.name,
            last_name: entity.last_name,
            email: entity.email,
            phone: entity.phone,
            is_admin: entity.is_admin,
            is_tenant: entity.is_tenant,
            unread_notifications: entity.unread_notifications,
        }
    }
}
