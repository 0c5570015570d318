//! Condo unit and unit request entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{CondoUnit, ResidentRole, UnitRequest, UnitRequestStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for a resident's role within a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "unit_resident_role", rename_all = "lowercase")]
pub enum ResidentRoleDb {
    Owner,
    Tenant,
}

impl From<ResidentRoleDb> for ResidentRole {
    fn from(value: ResidentRoleDb) -> Self {
        match value {
            ResidentRoleDb::Owner => ResidentRole::Owner,
            ResidentRoleDb::Tenant => ResidentRole::Tenant,
        }
    }
}

impl From<ResidentRole> for ResidentRoleDb {
    fn from(value: ResidentRole) -> Self {
        match value {
            ResidentRole::Owner => ResidentRoleDb::Owner,
            ResidentRole::Tenant => ResidentRoleDb::Tenant,
        }
    }
}

/// Database enum for unit request status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "unit_request_status", rename_all = "lowercase")]
pub enum UnitRequestStatusDb {
    Pending,
    Approved,
    Rejected,
}

impl From<UnitRequestStatusDb> for UnitRequestStatus {
    fn from(value: UnitRequestStatusDb) -> Self {
        match value {
            UnitRequestStatusDb::Pending => UnitRequestStatus::Pending,
            UnitRequestStatusDb::Approved => UnitRequestStatus::Approved,
            UnitRequestStatusDb::Rejected => UnitRequestStatus::Rejected,
        }
    }
}

/// Database row mapping for the condo_units table.
#[derive(Debug, Clone, FromRow)]
pub struct CondoUnitEntity {
    pub id: Uuid,
    pub condo_id: Uuid,
    pub building_number: Option<String>,
    pub floor_number: Option<String>,
    pub unit_number: String,
    pub is_rented: bool,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CondoUnitEntity> for CondoUnit {
    fn from(entity: CondoUnitEntity) -> Self {
        CondoUnit {
            id: entity.id,
            condo_id: entity.condo_id,
            building_number: entity.building_number,
            floor_number: entity.floor_number,
            unit_number: entity.unit_number,
            is_rented: entity.is_rented,
            phone: entity.phone,
        }
    }
}

/// Database row mapping for the unit_requests table.
#[derive(Debug, Clone, FromRow)]
pub struct UnitRequestEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub condo_id: Uuid,
    pub building_number: Option<String>,
    pub floor_number: Option<String>,
    pub unit_number: String,
    pub phone: Option<String>,
    pub is_owner: bool,
    pub status: UnitRequestStatusDb,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UnitRequestEntity> for UnitRequest {
    fn from(entity: UnitRequestEntity) -> Self {
        UnitRequest {
            id: entity.id,
            user_id: entity.user_id,
            condo_id: entity.condo_id,
            building_number: entity.building_number,
            floor_number: entity.floor_number,
            unit_number: entity.unit_number,
            phone: entity.phone,
            is_owner: entity.is_owner,
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}
