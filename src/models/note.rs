use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{deserialize_datetime, parse_wire_id};
use crate::error::ApiError;

/// Fixed emotion label set for notes.
///
/// Serialized as the lowercase tokens the backend stores. Only this client
/// ever writes the field, so the set is closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Moved,
    Excited,
    Surprised,
    Amused,
    Sad,
    Angry,
    Scared,
    Confused,
}

impl Emotion {
    /// Every emotion label, in the order the note form offers them.
    pub const ALL: [Emotion; 8] = [
        Emotion::Moved,
        Emotion::Excited,
        Emotion::Surprised,
        Emotion::Amused,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Scared,
        Emotion::Confused,
    ];

    /// The wire token for this label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Moved => "moved",
            Emotion::Excited => "excited",
            Emotion::Surprised => "surprised",
            Emotion::Amused => "amused",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Scared => "scared",
            Emotion::Confused => "confused",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note exactly as the backend emits it.
///
/// `rating` arrives as a float (the backend column is numeric) even though
/// the client only ever writes whole stars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteRecord {
    pub id: i64,
    pub media_id: i64,
    pub content: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub emotion: Option<Emotion>,
    /// Server-generated summary, read-only
    #[serde(default)]
    pub ai_summary: Option<String>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// A note as screens consume it: string ids, whole-star rating.
#[derive(Debug, Clone, PartialEq)]
pub struct UserNote {
    pub id: String,
    pub media_id: String,
    pub content: String,
    /// Whole stars, 1 through 5
    pub rating: Option<u8>,
    pub emotion: Option<Emotion>,
    /// Server-generated summary, if one has been produced
    pub ai_summary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<NoteRecord> for UserNote {
    fn from(record: NoteRecord) -> Self {
        Self {
            id: record.id.to_string(),
            media_id: record.media_id.to_string(),
            content: record.content,
            rating: record.rating.map(|r| r as u8),
            emotion: record.emotion,
            ai_summary: record.ai_summary,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Input for creating a note.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    /// Id of the media item the note belongs to
    pub media_id: String,
    pub content: String,
    pub rating: Option<u8>,
    pub emotion: Option<Emotion>,
}

impl NoteDraft {
    /// Create a draft with the required fields.
    pub fn new(media_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            media_id: media_id.into(),
            content: content.into(),
            rating: None,
            emotion: None,
        }
    }

    /// Attach a star rating.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Attach an emotion tag.
    pub fn with_emotion(mut self, emotion: Emotion) -> Self {
        self.emotion = Some(emotion);
        self
    }

    /// The request body for this draft.
    ///
    /// Fails with [`ApiError::InvalidId`] when `media_id` is not numeric,
    /// since the wire requires an integer there.
    pub fn to_payload(&self) -> Result<NotePayload, ApiError> {
        Ok(NotePayload {
            media_id: parse_wire_id(&self.media_id)?,
            content: self.content.clone(),
            rating: self.rating,
            emotion: self.emotion,
        })
    }
}

/// Request body for note creation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotePayload {
    pub media_id: i64,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}

/// Request body for note update.
///
/// `media_id` is never re-sent; a note cannot move between media items.
/// Unset fields are omitted and left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<Emotion>,
}
