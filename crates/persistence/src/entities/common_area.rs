//! Common area entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{CommonArea, CommonAreaType, WeeklySchedule};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for common area categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "common_area_type", rename_all = "snake_case")]
pub enum CommonAreaTypeDb {
    Gym,
    Pool,
    Sauna,
    SteamRoom,
    SoccerField,
    SocialRoom,
}

impl From<CommonAreaTypeDb> for CommonAreaType {
    fn from(value: CommonAreaTypeDb) -> Self {
        match value {
            CommonAreaTypeDb::Gym => CommonAreaType::Gym,
            CommonAreaTypeDb::Pool => CommonAreaType::Pool,
            CommonAreaTypeDb::Sauna => CommonAreaType::Sauna,
            CommonAreaTypeDb::SteamRoom => CommonAreaType::SteamRoom,
            CommonAreaTypeDb::SoccerField => CommonAreaType::SoccerField,
            CommonAreaTypeDb::SocialRoom => CommonAreaType::SocialRoom,
        }
    }
}

impl From<CommonAreaType> for CommonAreaTypeDb {
    fn from(value: CommonAreaType) -> Self {
        match value {
            CommonAreaType::Gym => CommonAreaTypeDb::Gym,
            CommonAreaType::Pool => CommonAreaTypeDb::Pool,
            CommonAreaType::Sauna => CommonAreaTypeDb::Sauna,
            CommonAreaType::SteamRoom => CommonAreaTypeDb::SteamRoom,
            CommonAreaType::SoccerField => CommonAreaTypeDb::SoccerField,
            CommonAreaType::SocialRoom => CommonAreaTypeDb::SocialRoom,
        }
    }
}

/// Database row mapping for the common_areas table.
#[derive(Debug, Clone, FromRow)]
pub struct CommonAreaEntity {
    pub id: Uuid,
    pub condo_id: Uuid,
    pub name: String,
    pub description: String,
    pub area_type: CommonAreaTypeDb,
    pub max_capacity: i32,
    pub remaining_capacity: i32,
    pub is_available: bool,
    pub schedule: Option<Json<WeeklySchedule>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CommonAreaEntity> for CommonArea {
    fn from(entity: CommonAreaEntity) -> Self {
        CommonArea {
            id: entity.id,
            condo_id: entity.condo_id,
            name: entity.name,
            description: entity.description,
            area_type: entity.area_type.into(),
            max_capacity: entity.max_capacity,
            remaining_capacity: entity.remaining_capacity,
            is_available: entity.is_available,
            schedule: entity.schedule.map(|Json(s)| s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_type_db_round_trip() {
        for ty in [
            CommonAreaType::Gym,
            CommonAreaType::Pool,
            CommonAreaType::Sauna,
            CommonAreaType::SteamRoom,
            CommonAreaType::SoccerField,
            CommonAreaType::SocialRoom,
        ] {
            let db: CommonAreaTypeDb = ty.into();
            let back: CommonAreaType = db.into();
            assert_eq!(back, ty);
        }
    }
}
