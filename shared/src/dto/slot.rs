use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::SharedError;

lazy_static! {
    static ref TIME_OF_DAY: Regex = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
}

/// A bookable unit of court time, as served by the booking API.
///
/// Times are court-local wall times; the server guarantees
/// `start_time < end_time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotDto {
    pub id: i64,
    pub court_id: i64,
    pub slot_number: u32,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub is_available: bool,
    #[serde(default)]
    pub price: f64,
}

impl TimeSlotDto {
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }
}

/// Payload for creating a slot from the owner's slot-management form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSlotRequest {
    pub court_id: i64,
    #[validate(range(min = 1, max = 48, message = "Slot number must be between 1 and 48"))]
    pub slot_number: u32,
    pub date: NaiveDate,
    #[validate(regex(path = "TIME_OF_DAY", message = "Start time must be HH:MM"))]
    pub start_time: String,
    #[validate(regex(path = "TIME_OF_DAY", message = "End time must be HH:MM"))]
    pub end_time: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

impl CreateSlotRequest {
    /// Validates field constraints plus the start-before-end rule the form
    /// cannot express as a field attribute.
    pub fn validated(self) -> crate::error::Result<Self> {
        self.validate()?;
        if self.end_time <= self.start_time {
            let start = self
                .date
                .and_time(parse_time_of_day(&self.start_time)?);
            let end = self.date.and_time(parse_time_of_day(&self.end_time)?);
            return Err(SharedError::InvalidTimeRange { start, end });
        }
        Ok(self)
    }
}

/// Payload for toggling a slot's availability (lock/unlock).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetSlotAvailabilityRequest {
    pub is_available: bool,
}

fn parse_time_of_day(value: &str) -> crate::error::Result<chrono::NaiveTime> {
    chrono::NaiveTime::parse_from_str(&format!("{}:00", value), "%H:%M:%S")
        .map_err(|e| SharedError::Conversion(format!("invalid time of day '{}': {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateSlotRequest {
        CreateSlotRequest {
            court_id: 4,
            slot_number: 3,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            price: 25.0,
        }
    }

    #[test]
    fn test_create_slot_request_valid() {
        assert!(request().validated().is_ok());
    }

    #[test]
    fn test_create_slot_request_bad_time_format() {
        let mut req = request();
        req.start_time = "25:00".to_string();
        assert!(req.validate().is_err());

        let mut req = request();
        req.end_time = "9am".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_slot_request_end_before_start() {
        let mut req = request();
        req.start_time = "14:00".to_string();
        req.end_time = "13:00".to_string();
        let err = req.validated().unwrap_err();
        assert!(matches!(err, SharedError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_create_slot_request_negative_price() {
        let mut req = request();
        req.price = -1.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_time_slot_wire_format_is_camel_case() {
        let slot = TimeSlotDto {
            id: 1,
            court_id: 2,
            slot_number: 5,
            start_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            end_time: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(11, 0, 0)
                .unwrap(),
            is_available: true,
            price: 25.0,
        };
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("\"startTime\""));
        assert!(json.contains("\"isAvailable\":true"));
        assert!(json.contains("\"slotNumber\":5"));
    }
}
