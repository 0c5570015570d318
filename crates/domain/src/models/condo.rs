//! Condo domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A managed condominium community.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Condo {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub unique_code: String,
    pub is_active: bool,
    /// Users with administrative rights over this condo.
    pub admins: Vec<Uuid>,
}

/// Request to create a condo. The creator becomes its first admin.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateCondoRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub city: String,
    #[validate(length(min = 1, max = 100))]
    pub state: String,
    #[validate(length(min = 1, max = 20))]
    pub zip_code: String,
    #[validate(length(min = 1, max = 100))]
    pub country: String,
    #[validate(custom(function = "shared::validation::validate_unique_code"))]
    pub unique_code: String,
}

/// Response after creating a condo.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateCondoResponse {
    pub id: Uuid,
    pub unique_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::address::en::{CityName, StreetName};
    use fake::Fake;

    fn valid_request() -> CreateCondoRequest {
        CreateCondoRequest {
            name: "Palm Gardens".to_string(),
            address: StreetName().fake(),
            city: CityName().fake(),
            state: "FL".to_string(),
            zip_code: "33101".to_string(),
            country: "US".to_string(),
            unique_code: "PALM01".to_string(),
        }
    }

    #[test]
    fn test_create_condo_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_condo_request_rejects_bad_code() {
        let mut req = valid_request();
        req.unique_code = "palm gardens".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_condo_request_rejects_empty_name() {
        let mut req = valid_request();
        req.name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_condo_serde_round_trip() {
        let condo = Condo {
            id: Uuid::new_v4(),
            name: "Palm Gardens".to_string(),
            address: "100 Main St".to_string(),
            city: "Miami".to_string(),
            state: "FL".to_string(),
            zip_code: "33101".to_string(),
            country: "US".to_string(),
            unique_code: "PALM01".to_string(),
            is_active: true,
            admins: vec![Uuid::new_v4()],
        };
        let json = serde_json::to_string(&condo).unwrap();
        let parsed: Condo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.unique_code, condo.unique_code);
        assert_eq!(parsed.admins, condo.admins);
    }
}
