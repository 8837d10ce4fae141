use serde::{Deserialize, Serialize};
use validator::Validate;

/// Data Transfer Object for a court listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CourtDto {
    #[serde(default)]
    pub id: i64,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Court name is required and must be at most 100 characters"
    ))]
    pub name: String,
    #[validate(length(min = 1, max = 50, message = "Sport is required"))]
    pub sport: String,
    #[validate(length(
        min = 1,
        max = 200,
        message = "Address is required and must be at most 200 characters"
    ))]
    pub address: String,
    pub city: String,
    #[validate(range(min = 0.0, message = "Hourly price cannot be negative"))]
    pub price_per_hour: f64,
    pub owner_id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Filter for the public court listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sport: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn court() -> CourtDto {
        CourtDto {
            id: 1,
            name: "Riverside Padel 1".to_string(),
            sport: "Padel".to_string(),
            address: "12 Riverside Way".to_string(),
            city: "Leeds".to_string(),
            price_per_hour: 32.0,
            owner_id: 9,
            image_url: None,
            is_active: true,
        }
    }

    #[test]
    fn test_court_dto_valid() {
        assert!(court().validate().is_ok());
    }

    #[test]
    fn test_court_dto_empty_name() {
        let mut dto = court();
        dto.name = String::new();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_court_dto_negative_price() {
        let mut dto = court();
        dto.price_per_hour = -5.0;
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_court_filter_skips_empty_fields() {
        let filter = CourtFilter {
            query: String::new(),
            sport: "Tennis".to_string(),
            city: String::new(),
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert_eq!(json, "{\"sport\":\"Tennis\"}");
    }
}
