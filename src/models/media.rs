use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_datetime;

/// Kind of media a captured item is.
///
/// Serialized as the uppercase tokens the backend stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Movie,
    Anime,
    Book,
    Game,
    Music,
    #[default]
    Other,
}

impl MediaType {
    /// Every media type, in the order the capture form offers them.
    pub const ALL: [MediaType; 6] = [
        MediaType::Movie,
        MediaType::Anime,
        MediaType::Book,
        MediaType::Game,
        MediaType::Music,
        MediaType::Other,
    ];

    /// The wire token for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "MOVIE",
            MediaType::Anime => "ANIME",
            MediaType::Book => "BOOK",
            MediaType::Game => "GAME",
            MediaType::Music => "MUSIC",
            MediaType::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A media item exactly as the backend emits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaRecord {
    /// Backend integer id
    pub id: i64,
    /// Title of the work
    pub title: String,
    /// Kind of media
    pub media_type: MediaType,
    /// Author, director, studio, ...
    #[serde(default)]
    pub creator: Option<String>,
    /// Year of release
    #[serde(default)]
    pub release_year: Option<i32>,
    /// Cover image URL
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Genre labels; the backend may omit the key entirely
    #[serde(default)]
    pub genres: Option<Vec<String>>,
    /// When the item was captured
    #[serde(deserialize_with = "deserialize_datetime")]
    pub captured_at: DateTime<Utc>,
}

/// A captured media item as screens consume it.
///
/// Ids are strings, `genres` is never absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub media_type: MediaType,
    pub creator: Option<String>,
    pub release_year: Option<i32>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,
    pub captured_at: DateTime<Utc>,
}

impl From<MediaRecord> for MediaItem {
    fn from(record: MediaRecord) -> Self {
        Self {
            id: record.id.to_string(),
            title: record.title,
            media_type: record.media_type,
            creator: record.creator,
            release_year: record.release_year,
            cover_image: record.cover_image,
            description: record.description,
            genres: record.genres.unwrap_or_default(),
            captured_at: record.captured_at,
        }
    }
}

impl MediaItem {
    /// The writable fields of this item, for edit flows.
    pub fn to_draft(&self) -> MediaDraft {
        MediaDraft {
            title: self.title.clone(),
            media_type: self.media_type,
            creator: self.creator.clone(),
            release_year: self.release_year,
            cover_image: self.cover_image.clone(),
            description: self.description.clone(),
            genres: self.genres.clone(),
        }
    }
}

/// Writable media fields, used for both create and update.
///
/// `title` must be non-empty for the backend to produce a meaningful item;
/// the capture form enforces that before submitting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaDraft {
    pub title: String,
    pub media_type: MediaType,
    pub creator: Option<String>,
    pub release_year: Option<i32>,
    pub cover_image: Option<String>,
    pub description: Option<String>,
    pub genres: Vec<String>,
}

impl MediaDraft {
    /// Create a draft with the two required fields.
    pub fn new(title: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            title: title.into(),
            media_type,
            ..Default::default()
        }
    }

    /// The request body for this draft.
    pub fn to_payload(&self) -> MediaPayload {
        MediaPayload {
            title: self.title.clone(),
            media_type: self.media_type,
            creator: self.creator.clone(),
            release_year: self.release_year,
            cover_image: self.cover_image.clone(),
            description: self.description.clone(),
            genres: self.genres.clone(),
        }
    }
}

/// Request body for media create and update.
///
/// No id field; unset optionals are omitted rather than sent as null.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MediaPayload {
    pub title: String,
    pub media_type: MediaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub genres: Vec<String>,
}
