use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }

    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];
}

/// A "looking for a playmate" post on the community board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaymatePostDto {
    pub id: i64,
    pub author_name: String,
    pub sport: String,
    pub area: String,
    pub play_date: NaiveDate,
    pub skill_level: SkillLevel,
    pub message: String,
    pub created_at: NaiveDateTime,
}

/// Payload for publishing a playmate post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlaymatePostRequest {
    #[validate(length(min = 1, max = 50, message = "Sport is required"))]
    pub sport: String,
    #[validate(length(min = 1, max = 100, message = "Area is required"))]
    pub area: String,
    pub play_date: NaiveDate,
    pub skill_level: SkillLevel,
    #[validate(length(
        min = 1,
        max = 400,
        message = "Message is required and must be at most 400 characters"
    ))]
    pub message: String,
}

/// Filter for the playmate management screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaymateFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sport: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub area: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_post_requires_message() {
        let req = CreatePlaymatePostRequest {
            sport: "Badminton".to_string(),
            area: "Northside".to_string(),
            play_date: NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(),
            skill_level: SkillLevel::Intermediate,
            message: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_skill_level_round_trip() {
        let json = serde_json::to_string(&SkillLevel::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
        let back: SkillLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SkillLevel::Advanced);
    }
}
