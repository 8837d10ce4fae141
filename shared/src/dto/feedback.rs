use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer review of a court, as shown on the feedback management screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackDto {
    pub id: i64,
    pub court_id: i64,
    pub court_name: String,
    pub customer_name: String,
    /// 1 to 5 stars.
    pub rating: u8,
    pub comment: String,
    pub created_at: NaiveDateTime,
}

/// Filter for the feedback management screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub query: String,
    /// Only show feedback with this exact star rating.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub court_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_filter_wire_shape() {
        let filter = FeedbackFilter {
            query: String::new(),
            rating: Some(4),
            court_id: Some(12),
        };
        let json = serde_json::to_string(&filter).unwrap();
        assert!(json.contains("\"rating\":4"));
        assert!(json.contains("\"courtId\":12"));
        assert!(!json.contains("query"));
    }
}
