use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_datetime, parse_wire_id};
use crate::error::ApiError;

/// A related work exactly as the backend emits it.
///
/// The wire record also carries `url` and `deep_dive_session_id`; unknown
/// keys are ignored on ingestion and those two never reach screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RelatedWorkRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub creator: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A work the deep-dive answer references, as screens consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedWork {
    pub id: String,
    pub title: String,
    pub creator: Option<String>,
    pub description: Option<String>,
}

impl From<RelatedWorkRecord> for RelatedWork {
    fn from(record: RelatedWorkRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            creator: record.creator,
            description: record.description,
        }
    }
}

/// A deep-dive session exactly as the backend emits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeepDiveRecord {
    pub id: i64,
    pub media_id: i64,
    /// The question the user asked
    pub question: String,
    /// The generated answer
    pub answer: String,
    #[serde(default)]
    pub related_works: Option<Vec<RelatedWorkRecord>>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
}

/// One reflection Q&A round on a media item.
///
/// Sessions are immutable once created; there is no update anywhere in the
/// stack.
#[derive(Debug, Clone, PartialEq)]
pub struct DeepDiveSession {
    pub id: String,
    pub media_id: String,
    pub question: String,
    pub answer: String,
    pub related_works: Vec<RelatedWork>,
    pub created_at: DateTime<Utc>,
}

impl From<DeepDiveRecord> for DeepDiveSession {
    fn from(record: DeepDiveRecord) -> Self {
        Self {
            id: record.id.to_string(),
            media_id: record.media_id.to_string(),
            question: record.question,
            answer: record.answer,
            related_works: record
                .related_works
                .unwrap_or_default()
                .into_iter()
                .map(RelatedWork::from)
                .collect(),
            created_at: record.created_at,
        }
    }
}

/// Request body for starting a deep-dive session.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DeepDivePayload {
    pub media_id: i64,
    pub question: String,
}

impl DeepDivePayload {
    /// Build a payload, converting the string media id to the integer the
    /// wire requires.
    pub fn new(media_id: &str, question: &str) -> Result<Self, ApiError> {
        Ok(Self {
            media_id: parse_wire_id(media_id)?,
            question: question.to_string(),
        })
    }
}
