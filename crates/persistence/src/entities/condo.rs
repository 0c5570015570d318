//! Condo entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the condos table.
#[derive(Debug, Clone, FromRow)]
pub struct CondoEntity {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub unique_code: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CondoEntity {
    /// Convert to the domain model with the given admin set.
    pub fn into_domain(self, admins: Vec<Uuid>) -> domain::models::Condo {
        domain::models::Condo {
            id: self.id,
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            country: self.country,
            unique_code: self.unique_code,
            is_active: self.is_active,
            admins,
        }
    }
}
