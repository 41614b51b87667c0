use std::str::FromStr;

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moderation state of a thought. New records start in review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThoughtStatus {
    #[display("APPROVED")]
    Approved,
    #[default]
    #[display("IN_REVIEW")]
    InReview,
    #[display("REMOVED")]
    Removed,
}

impl ThoughtStatus {
    pub const ALL: [ThoughtStatus; 3] = [
        ThoughtStatus::Approved,
        ThoughtStatus::InReview,
        ThoughtStatus::Removed,
    ];
}

impl FromStr for ThoughtStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "APPROVED" => Ok(ThoughtStatus::Approved),
            "IN_REVIEW" => Ok(ThoughtStatus::InReview),
            "REMOVED" => Ok(ThoughtStatus::Removed),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// A thought record as the backend serializes it. Vote counters and
/// timestamps are backend-owned; clients only hold transient copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[display("Thought {{ id: {}, status: {}, votes: +{}/-{} }}", id, status, thumbs_up, thumbs_down)]
pub struct Thought {
    pub id: Uuid,
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub author_bio: String,
    pub thumbs_up: u32,
    pub thumbs_down: u32,
    pub status: ThoughtStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for `POST /thoughts`. Empty optional fields are dropped rather than
/// sent as `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateThoughtRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_bio: Option<String>,
}

impl CreateThoughtRequest {
    pub fn new(content: &str, author: &str, author_bio: &str) -> Self {
        Self {
            content: content.to_string(),
            author: non_empty(author),
            author_bio: non_empty(author_bio),
        }
    }
}

/// Body for `PUT /thoughts/{id}`. Status is admin-editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThoughtRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_bio: Option<String>,
    pub status: ThoughtStatus,
}

impl UpdateThoughtRequest {
    pub fn new(content: &str, author: &str, author_bio: &str, status: ThoughtStatus) -> Self {
        Self {
            content: content.to_string(),
            author: non_empty(author),
            author_bio: non_empty(author_bio),
            status,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

/// Cut text for table cells, appending `...` when something was dropped.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{cut}...")
}
