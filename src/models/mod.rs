//! Data model: wire records, client entities and request payloads.
//!
//! Each resource module defines three shapes. Records mirror backend JSON
//! exactly (snake_case keys, integer ids, optional keys); entities are what
//! screens consume (string ids, collections that are never absent, native
//! datetimes); payloads are the bodies create/update send. Conversions live
//! next to the types they convert.

pub mod deep_dive;
pub mod media;
pub mod note;

pub use deep_dive::{DeepDivePayload, DeepDiveRecord, DeepDiveSession, RelatedWork, RelatedWorkRecord};
pub use media::{MediaDraft, MediaItem, MediaPayload, MediaRecord, MediaType};
pub use note::{Emotion, NoteDraft, NotePayload, NoteRecord, NoteUpdate, UserNote};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserializer;

use crate::error::ApiError;

/// Helper to deserialize timestamps that may lack a UTC offset.
///
/// The backend stores naive UTC datetimes, so the same field arrives both as
/// `2024-01-01T00:00:00Z` and `2024-01-01T00:00:00.123456`. Offset-less
/// values are taken as UTC.
pub(crate) fn deserialize_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct DateTimeVisitor;

    impl<'de> Visitor<'de> for DateTimeVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an ISO-8601 timestamp")
        }

        fn visit_str<E>(self, value: &str) -> Result<DateTime<Utc>, E>
        where
            E: de::Error,
        {
            parse_datetime(value)
                .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", value)))
        }
    }

    deserializer.deserialize_str(DateTimeVisitor)
}

fn parse_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse a client-side string id into the integer the wire requires.
///
/// The backend keys everything by integer ids; entities carry them as
/// strings. A value that does not parse is an error, never a sentinel.
pub(crate) fn parse_wire_id(value: &str) -> Result<i64, ApiError> {
    value.trim().parse::<i64>().map_err(|_| ApiError::InvalidId {
        value: value.to_string(),
    })
}
