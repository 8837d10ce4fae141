use serde::{Deserialize, Serialize};
use validator::Validate;

/// A coaching package offered through the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub sessions: u32,
    pub price: f64,
    pub validity_days: u32,
    pub is_active: bool,
}

/// Payload for creating or editing a coaching package.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SavePackageRequest {
    #[validate(length(
        min = 1,
        max = 80,
        message = "Title is required and must be at most 80 characters"
    ))]
    pub title: String,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: String,
    #[validate(range(min = 1, max = 100, message = "Sessions must be between 1 and 100"))]
    pub sessions: u32,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[validate(range(min = 1, max = 730, message = "Validity must be between 1 and 730 days"))]
    pub validity_days: u32,
}

/// Filter for the package management screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SavePackageRequest {
        SavePackageRequest {
            title: "Beginner Tennis Block".to_string(),
            description: "Five one-hour sessions with a club coach".to_string(),
            sessions: 5,
            price: 120.0,
            validity_days: 90,
        }
    }

    #[test]
    fn test_save_package_valid() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_save_package_empty_title() {
        let mut req = request();
        req.title = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_save_package_zero_sessions() {
        let mut req = request();
        req.sessions = 0;
        assert!(req.validate().is_err());
    }
}
