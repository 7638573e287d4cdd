//! Request and response bodies
//!
//! Kept apart from the database records in [`crate::db`] so the wire format
//! can't drift when a table changes.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::{Poll, PollOption};
use crate::models::{NewPoll, ValidationError};

/// Create poll request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePollRequest {
    pub question_text: String,
    pub options: Vec<CreateOptionRequest>,
}

/// One option in a create poll request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOptionRequest {
    pub option_text: String,
}

impl CreatePollRequest {
    /// Check texts and build the poll to insert.
    pub fn validate(&self) -> Result<NewPoll, ValidationError> {
        NewPoll::new(
            &self.question_text,
            self.options.iter().map(|o| o.option_text.as_str()),
        )
    }
}

/// Option response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct OptionResponse {
    pub id: i32,
    pub poll_id: i32,
    pub option_text: String,
    pub vote_count: i32,
}

impl From<PollOption> for OptionResponse {
    fn from(o: PollOption) -> Self {
        Self {
            id: o.id,
            poll_id: o.poll_id,
            option_text: o.option_text,
            vote_count: o.vote_count,
        }
    }
}

/// Poll response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct PollResponse {
    pub id: i32,
    pub question_text: String,
    /// RFC 3339 timestamp
    #[schema(example = "2024-05-01T12:00:00+00:00")]
    pub created_at: String,
    pub options: Vec<OptionResponse>,
}

impl From<Poll> for PollResponse {
    fn from(p: Poll) -> Self {
        Self {
            id: p.id,
            question_text: p.question_text,
            created_at: p.created_at.to_rfc3339(),
            options: p.options.into_iter().map(OptionResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;

    #[test]
    fn poll_response_shape() {
        let poll = Poll {
            id: 3,
            question_text: "Pizza?".into(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
            options: vec![PollOption {
                id: 9,
                poll_id: 3,
                option_text: "Yes".into(),
                vote_count: 2,
            }],
        };

        let value = serde_json::to_value(PollResponse::from(poll)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "question_text": "Pizza?",
                "created_at": "2024-05-01T12:30:00+00:00",
                "options": [
                    { "id": 9, "poll_id": 3, "option_text": "Yes", "vote_count": 2 }
                ]
            })
        );
    }

    #[test]
    fn request_validation_names_option_index() {
        let req: CreatePollRequest = serde_json::from_value(json!({
            "question_text": "Pick",
            "options": [{ "option_text": "a" }, { "option_text": "   " }]
        }))
        .unwrap();

        let err = req.validate().unwrap_err();
        assert_eq!(err.field(), Some("options[1].option_text"));
    }

    #[test]
    fn request_ignores_unknown_fields() {
        let req: CreatePollRequest = serde_json::from_value(json!({
            "question_text": "Pick",
            "options": [],
            "extra": true
        }))
        .unwrap();

        assert!(req.validate().unwrap().options.is_empty());
    }
}
