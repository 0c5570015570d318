//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

/// Maximum per-reservation quota accepted for a (unit, area) pair.
const MAX_QUOTA: i32 = 500;

/// Maximum simultaneous capacity accepted for a common area.
const MAX_AREA_CAPACITY: i32 = 10_000;

lazy_static! {
    /// 24-hour "HH:MM" time of day, e.g. "06:00" or "21:30".
    static ref SCHEDULE_TIME_RE: Regex =
        Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid schedule time regex");

    /// Condo unique codes: 4-16 uppercase letters and digits.
    static ref UNIQUE_CODE_RE: Regex =
        Regex::new(r"^[A-Z0-9]{4,16}$").expect("valid unique code regex");
}

/// Validates that a common area's maximum capacity is positive.
pub fn validate_max_capacity(capacity: i32) -> Result<(), ValidationError> {
    if (1..=MAX_AREA_CAPACITY).contains(&capacity) {
        Ok(())
    } else {
        let mut err = ValidationError::new("capacity_range");
        err.message = Some("Capacity must be between 1 and 10000".into());
        Err(err)
    }
}

/// Validates that a per-reservation quota is positive.
pub fn validate_quota(quota: i32) -> Result<(), ValidationError> {
    if (1..=MAX_QUOTA).contains(&quota) {
        Ok(())
    } else {
        let mut err = ValidationError::new("quota_range");
        err.message = Some("Quota must be between 1 and 500".into());
        Err(err)
    }
}

/// Validates a schedule time-of-day in 24-hour "HH:MM" format.
pub fn validate_schedule_time(value: &str) -> Result<(), ValidationError> {
    if SCHEDULE_TIME_RE.is_match(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("schedule_time_format");
        err.message = Some("Schedule times must use 24-hour HH:MM format".into());
        Err(err)
    }
}

/// Validates a condo unique code (4-16 uppercase letters/digits).
pub fn validate_unique_code(code: &str) -> Result<(), ValidationError> {
    if UNIQUE_CODE_RE.is_match(code) {
        Ok(())
    } else {
        let mut err = ValidationError::new("unique_code_format");
        err.message = Some("Unique code must be 4-16 uppercase letters or digits".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Capacity tests
    #[test]
    fn test_validate_max_capacity() {
        assert!(validate_max_capacity(1).is_ok());
        assert!(validate_max_capacity(250).is_ok());
        assert!(validate_max_capacity(10_000).is_ok());
        assert!(validate_max_capacity(0).is_err());
        assert!(validate_max_capacity(10_001).is_err());
    }

    // Quota tests
    #[test]
    fn test_validate_quota() {
        assert!(validate_quota(1).is_ok());
        assert!(validate_quota(8).is_ok());
        assert!(validate_quota(0).is_err());
        assert!(validate_quota(-1).is_err());
    }

    // Schedule time tests
    #[test]
    fn test_validate_schedule_time() {
        assert!(validate_schedule_time("00:00").is_ok());
        assert!(validate_schedule_time("06:30").is_ok());
        assert!(validate_schedule_time("23:59").is_ok());
        assert!(validate_schedule_time("24:00").is_err());
        assert!(validate_schedule_time("9:00").is_err());
        assert!(validate_schedule_time("09:60").is_err());
        assert!(validate_schedule_time("0900").is_err());
        assert!(validate_schedule_time("").is_err());
    }

    #[test]
    fn test_validate_schedule_time_error_message() {
        let err = validate_schedule_time("25:00").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Schedule times must use 24-hour HH:MM format"
        );
    }

    // Unique code tests
    #[test]
    fn test_validate_unique_code() {
        assert!(validate_unique_code("COND01").is_ok());
        assert!(validate_unique_code("A1B2").is_ok());
        assert!(validate_unique_code("ABCDEFGH12345678").is_ok());
        assert!(validate_unique_code("abc123").is_err());
        assert!(validate_unique_code("AB").is_err());
        assert!(validate_unique_code("TOO-LONG-CODE-123").is_err());
    }
}
