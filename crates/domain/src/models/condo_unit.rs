//! Condo unit and unit-association-request domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Role of a resident within a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidentRole {
    Owner,
    Tenant,
}

impl std::fmt::Display for ResidentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResidentRole::Owner => write!(f, "owner"),
            ResidentRole::Tenant => write!(f, "tenant"),
        }
    }
}

/// An apartment or house within a condo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CondoUnit {
    pub id: Uuid,
    pub condo_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<String>,
    pub unit_number: String,
    pub is_rented: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Status of a resident's request to be associated with a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitRequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for UnitRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitRequestStatus::Pending => write!(f, "pending"),
            UnitRequestStatus::Approved => write!(f, "approved"),
            UnitRequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A resident's claim to live in a unit, awaiting admin review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UnitRequest {
    pub id: Uuid,
    pub user_id: Uuid,
    pub condo_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_number: Option<String>,
    pub unit_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub is_owner: bool,
    pub status: UnitRequestStatus,
    pub created_at: DateTime<Utc>,
}

/// Request body for a resident asking to be associated with a unit.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateUnitRequestRequest {
    #[serde(default)]
    #[validate(length(max = 20))]
    pub building_number: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub floor_number: Option<String>,
    #[validate(length(min = 1, max = 20, message = "Unit number must be 1-20 characters"))]
    pub unit_number: String,
    #[serde(default)]
    #[validate(length(max = 30))]
    pub phone: Option<String>,
    pub is_owner: bool,
}

/// Response after approving a unit request: the created unit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ApproveUnitRequestResponse {
    pub unit_id: Uuid,
    pub request_id: Uuid,
    pub resident_role: ResidentRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resident_role_display() {
        assert_eq!(ResidentRole::Owner.to_string(), "owner");
        assert_eq!(ResidentRole::Tenant.to_string(), "tenant");
    }

    #[test]
    fn test_unit_request_status_display() {
        assert_eq!(UnitRequestStatus::Pending.to_string(), "pending");
        assert_eq!(UnitRequestStatus::Approved.to_string(), "approved");
        assert_eq!(UnitRequestStatus::Rejected.to_string(), "rejected");
    }

    #[test]
    fn test_create_unit_request_validation() {
        let req = CreateUnitRequestRequest {
            building_number: Some("B".to_string()),
            floor_number: Some("3".to_string()),
            unit_number: "301".to_string(),
            phone: None,
            is_owner: true,
        };
        assert!(req.validate().is_ok());

        let req = CreateUnitRequestRequest {
            building_number: None,
            floor_number: None,
            unit_number: String::new(),
            phone: None,
            is_owner: false,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unit_request_deserialize() {
        let json = r#"{"unit_number":"301","is_owner":false}"#;
        let req: CreateUnitRequestRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.unit_number, "301");
        assert!(!req.is_owner);
        assert!(req.building_number.is_none());
    }
}
