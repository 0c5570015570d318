//! Per-unit reservation quota domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Maximum party size a unit may book per reservation (and per day) on one
/// common area. Required by the strict availability model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UnitReservationQuota {
    pub id: Uuid,
    pub condo_unit_id: Uuid,
    pub common_area_id: Uuid,
    pub max_quota_per_reservation: i32,
}

/// Request to set a unit's quota on a common area (upsert).
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct SetQuotaRequest {
    #[validate(custom(function = "shared::validation::validate_quota"))]
    pub max_quota_per_reservation: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_quota_validation() {
        let req = SetQuotaRequest {
            max_quota_per_reservation: 4,
        };
        assert!(req.validate().is_ok());

        let req = SetQuotaRequest {
            max_quota_per_reservation: 0,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_quota_serde_round_trip() {
        let quota = UnitReservationQuota {
            id: Uuid::new_v4(),
            condo_unit_id: Uuid::new_v4(),
            common_area_id: Uuid::new_v4(),
            max_quota_per_reservation: 6,
        };
        let json = serde_json::to_string(&quota).unwrap();
        let parsed: UnitReservationQuota = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.max_quota_per_reservation, 6);
    }
}
