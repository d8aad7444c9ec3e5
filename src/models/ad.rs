use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::validation::validate_week_days,
    service::{
        clock::{ClockError, format_minutes, parse_clock_string},
        week_days::{join_week_days, split_week_days},
    },
};

/// Ad row as stored, week days joined and hours in minutes since midnight.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: Uuid,
    pub game_id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub week_days: String,
    pub hours_start: i32,
    pub hours_end: i32,
    pub use_voice_channel: bool,
    pub discord: String,
    pub created_at: DateTime<Utc>,
}

/// Projection used when listing ads for a game. Leaves out the contact handle.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdSummary {
    pub id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub week_days: String,
    pub hours_start: i32,
    pub hours_end: i32,
    pub use_voice_channel: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdResponse {
    pub id: Uuid,
    pub name: String,
    pub years_playing: i32,
    pub week_days: Vec<String>,
    pub hours_start: String,
    pub hours_end: String,
    pub use_voice_channel: bool,
}

impl AdResponse {
    pub fn from_summary(summary: AdSummary) -> Result<Self, ClockError> {
        Ok(Self {
            id: summary.id,
            name: summary.name,
            years_playing: summary.years_playing,
            week_days: split_week_days(&summary.week_days),
            hours_start: format_minutes(summary.hours_start)?,
            hours_end: format_minutes(summary.hours_end)?,
            use_voice_channel: summary.use_voice_channel,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "Years playing cannot be negative"))]
    pub years_playing: i32,
    #[validate(length(min = 1, max = 100, message = "Discord must be between 1 and 100 characters"))]
    pub discord: String,
    #[validate(custom(function = "validate_week_days"))]
    pub week_days: Vec<String>,
    pub hours_start: String,
    pub hours_end: String,
    pub use_voice_channel: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAd {
    pub name: String,
    pub years_playing: i32,
    pub discord: String,
    pub week_days: String,
    pub hours_start: i32,
    pub hours_end: i32,
    pub use_voice_channel: bool,
}

impl NewAd {
    pub fn from_request(request: CreateAdRequest) -> Result<Self, ClockError> {
        Ok(Self {
            hours_start: parse_clock_string(&request.hours_start)?,
            hours_end: parse_clock_string(&request.hours_end)?,
            week_days: join_week_days(&request.week_days),
            name: request.name,
            years_playing: request.years_playing,
            discord: request.discord,
            use_voice_channel: request.use_voice_channel,
        })
    }
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AdContact {
    pub discord: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hours_start: &str, hours_end: &str) -> CreateAdRequest {
        CreateAdRequest {
            name: "Alex".into(),
            years_playing: 3,
            discord: "alex#1234".into(),
            week_days: vec!["0".into(), "2".into(), "4".into()],
            hours_start: hours_start.into(),
            hours_end: hours_end.into(),
            use_voice_channel: true,
        }
    }

    #[test]
    fn new_ad_stores_joined_days_and_minutes() {
        let new_ad = NewAd::from_request(request("08:00", "12:30")).unwrap();

        assert_eq!(new_ad.week_days, "0,2,4");
        assert_eq!(new_ad.hours_start, 480);
        assert_eq!(new_ad.hours_end, 750);
        assert_eq!(new_ad.discord, "alex#1234");
    }

    #[test]
    fn new_ad_rejects_bad_clock_string() {
        let result = NewAd::from_request(request("abc", "12:30"));
        assert_eq!(result, Err(ClockError::InvalidFormat("abc".into())));
    }

    #[test]
    fn response_splits_days_and_formats_hours() {
        let summary = AdSummary {
            id: Uuid::new_v4(),
            name: "Alex".into(),
            years_playing: 3,
            week_days: "0,2,4".into(),
            hours_start: 480,
            hours_end: 750,
            use_voice_channel: true,
        };

        let response = AdResponse::from_summary(summary).unwrap();
        assert_eq!(response.week_days, vec!["0", "2", "4"]);
        assert_eq!(response.hours_start, "08:00");
        assert_eq!(response.hours_end, "12:30");

        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("discord").is_none());
        assert_eq!(value["yearsPlaying"], 3);
        assert_eq!(value["useVoiceChannel"], true);
    }

    #[test]
    fn request_validation_rejects_empty_fields() {
        let mut invalid = request("08:00", "12:30");
        invalid.name = String::new();
        invalid.week_days = Vec::new();

        let errors = invalid.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("week_days"));
    }

    #[test]
    fn years_playing_has_no_upper_bound() {
        let mut veteran = request("08:00", "12:30");
        veteran.years_playing = 150;
        assert!(veteran.validate().is_ok());

        veteran.years_playing = -1;
        let errors = veteran.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("years_playing"));
    }

    #[test]
    fn created_ad_serializes_stored_form() {
        let ad = Ad {
            id: Uuid::new_v4(),
            game_id: Uuid::new_v4(),
            name: "Alex".into(),
            years_playing: 3,
            week_days: "0,2,4".into(),
            hours_start: 480,
            hours_end: 750,
            use_voice_channel: true,
            discord: "alex#1234".into(),
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&ad).unwrap();
        assert_eq!(value["weekDays"], "0,2,4");
        assert_eq!(value["hoursStart"], 480);
        assert_eq!(value["hoursEnd"], 750);
        assert_eq!(value["gameId"], serde_json::json!(ad.game_id));
        assert!(value.get("createdAt").is_some());
    }
}
