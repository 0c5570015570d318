//! Common area (amenity) domain models.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Category of a common area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommonAreaType {
    Gym,
    Pool,
    Sauna,
    SteamRoom,
    SoccerField,
    SocialRoom,
}

impl std::fmt::Display for CommonAreaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommonAreaType::Gym => write!(f, "gym"),
            CommonAreaType::Pool => write!(f, "pool"),
            CommonAreaType::Sauna => write!(f, "sauna"),
            CommonAreaType::SteamRoom => write!(f, "steam_room"),
            CommonAreaType::SoccerField => write!(f, "soccer_field"),
            CommonAreaType::SocialRoom => write!(f, "social_room"),
        }
    }
}

/// Serde adapter for "HH:MM" schedule times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        // chrono alone would accept unpadded hours; keep the wire format strict
        shared::validation::validate_schedule_time(&s).map_err(serde::de::Error::custom)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Opening hours for a single day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DaySchedule {
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl DaySchedule {
    /// Whether `[start, end]` lies entirely within this day's opening hours.
    pub fn contains(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start_time <= start && end <= self.end_time && start <= end
    }
}

/// Weekly opening hours for a common area. A missing day means the area is
/// closed that day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WeeklySchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DaySchedule>,
}

impl WeeklySchedule {
    /// Opening hours for the given weekday, if the area opens that day.
    pub fn for_weekday(&self, weekday: Weekday) -> Option<&DaySchedule> {
        match weekday {
            Weekday::Mon => self.monday.as_ref(),
            Weekday::Tue => self.tuesday.as_ref(),
            Weekday::Wed => self.wednesday.as_ref(),
            Weekday::Thu => self.thursday.as_ref(),
            Weekday::Fri => self.friday.as_ref(),
            Weekday::Sat => self.saturday.as_ref(),
            Weekday::Sun => self.sunday.as_ref(),
        }
    }
}

/// A reservable common area belonging to a condo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CommonArea {
    pub id: Uuid,
    pub condo_id: Uuid,
    pub name: String,
    pub description: String,
    pub area_type: CommonAreaType,
    pub max_capacity: i32,
    /// Materialized counter used by the simple availability model.
    pub remaining_capacity: i32,
    /// Derived: true iff `remaining_capacity > 0`.
    pub is_available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<WeeklySchedule>,
}

/// Request to create a common area.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateCommonAreaRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    #[serde(default)]
    pub description: String,
    pub area_type: CommonAreaType,
    #[validate(custom(function = "shared::validation::validate_max_capacity"))]
    pub max_capacity: i32,
    #[serde(default)]
    pub schedule: Option<WeeklySchedule>,
}

/// Request to update a common area. Missing fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateCommonAreaRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    pub schedule: Option<WeeklySchedule>,
}

/// Common area with its availability as computed for the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CommonAreaWithAvailability {
    #[serde(flatten)]
    pub area: CommonArea,
    /// People that can still be admitted (stored counter in the simple
    /// model, recomputed from overlapping reservations in the strict model).
    pub available_capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule_day(open: &str, close: &str) -> DaySchedule {
        DaySchedule {
            start_time: NaiveTime::parse_from_str(open, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(close, "%H:%M").unwrap(),
        }
    }

    #[test]
    fn test_area_type_display() {
        assert_eq!(CommonAreaType::Gym.to_string(), "gym");
        assert_eq!(CommonAreaType::SteamRoom.to_string(), "steam_room");
        assert_eq!(CommonAreaType::SocialRoom.to_string(), "social_room");
    }

    #[test]
    fn test_area_type_serde_round_trip() {
        let json = serde_json::to_string(&CommonAreaType::SoccerField).unwrap();
        assert_eq!(json, r#""soccer_field""#);
        let parsed: CommonAreaType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, CommonAreaType::SoccerField);
    }

    #[test]
    fn test_day_schedule_hhmm_serde() {
        let day = schedule_day("06:00", "21:30");
        let json = serde_json::to_string(&day).unwrap();
        assert_eq!(json, r#"{"start_time":"06:00","end_time":"21:30"}"#);
        let parsed: DaySchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, day);
    }

    #[test]
    fn test_day_schedule_rejects_bad_time() {
        let result: Result<DaySchedule, _> =
            serde_json::from_str(r#"{"start_time":"25:00","end_time":"21:30"}"#);
        assert!(result.is_err());

        // unpadded hours are rejected, the wire format is strict HH:MM
        let result: Result<DaySchedule, _> =
            serde_json::from_str(r#"{"start_time":"9:00","end_time":"21:30"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_day_schedule_contains() {
        let day = schedule_day("06:00", "22:00");
        let t = |s: &str| NaiveTime::parse_from_str(s, "%H:%M").unwrap();

        assert!(day.contains(t("06:00"), t("22:00")));
        assert!(day.contains(t("10:00"), t("11:00")));
        assert!(!day.contains(t("05:59"), t("07:00")));
        assert!(!day.contains(t("21:00"), t("22:01")));
        // inverted interval
        assert!(!day.contains(t("12:00"), t("11:00")));
    }

    #[test]
    fn test_weekly_schedule_for_weekday() {
        let schedule = WeeklySchedule {
            monday: Some(schedule_day("06:00", "22:00")),
            ..Default::default()
        };

        assert!(schedule.for_weekday(Weekday::Mon).is_some());
        assert!(schedule.for_weekday(Weekday::Tue).is_none());
        assert!(schedule.for_weekday(Weekday::Sun).is_none());
    }

    #[test]
    fn test_create_request_validation() {
        let req = CreateCommonAreaRequest {
            name: "Main Pool".to_string(),
            description: String::new(),
            area_type: CommonAreaType::Pool,
            max_capacity: 30,
            schedule: None,
        };
        assert!(req.validate().is_ok());

        let req = CreateCommonAreaRequest {
            name: String::new(),
            description: String::new(),
            area_type: CommonAreaType::Pool,
            max_capacity: 0,
            schedule: None,
        };
        assert!(req.validate().is_err());
    }
}
