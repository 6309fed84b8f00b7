//! Deep-dive session operations.
//!
//! Sessions are create/read/delete only; they are immutable once the answer
//! has been generated.

use crate::adapters::ReqwestHttpClient;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{parse_wire_id, DeepDivePayload, DeepDiveRecord, DeepDiveSession};
use crate::traits::HttpClient;

/// Server-side filter for session listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeepDiveFilter {
    /// Only sessions about this media item
    pub media_id: Option<String>,
    /// Number of sessions to skip (paging)
    pub skip: Option<u32>,
    /// Maximum number of sessions to return
    pub limit: Option<u32>,
}

impl DeepDiveFilter {
    /// Filter to the sessions of one media item.
    pub fn for_media(media_id: impl Into<String>) -> Self {
        Self {
            media_id: Some(media_id.into()),
            ..Default::default()
        }
    }

    /// Build the query string, converting the media id to its wire integer.
    fn to_query(&self) -> Result<String, ApiError> {
        let mut params = Vec::new();
        if let Some(media_id) = &self.media_id {
            params.push(format!("media_id={}", parse_wire_id(media_id)?));
        }
        if let Some(skip) = self.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if params.is_empty() {
            Ok(String::new())
        } else {
            Ok(format!("?{}", params.join("&")))
        }
    }
}

/// Operations for deep-dive sessions (no update; sessions are immutable).
#[derive(Debug, Clone)]
pub struct DeepDiveService<C = ReqwestHttpClient> {
    api: ApiClient<C>,
}

impl<C: HttpClient> DeepDiveService<C> {
    /// Create a service over an existing client.
    pub fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// Fetch sessions matching the filter.
    pub async fn list(&self, filter: &DeepDiveFilter) -> Result<Vec<DeepDiveSession>, ApiError> {
        let path = format!("/deep-dive{}", filter.to_query()?);
        let records: Vec<DeepDiveRecord> = self.api.get(&path).await?;
        Ok(records.into_iter().map(DeepDiveSession::from).collect())
    }

    /// Fetch a single session by id.
    pub async fn get(&self, id: &str) -> Result<DeepDiveSession, ApiError> {
        let record: DeepDiveRecord = self.api.get(&format!("/deep-dive/{}", id)).await?;
        Ok(record.into())
    }

    /// Ask a question about a media item. The backend generates the answer
    /// and related works before answering 201 with the complete session.
    pub async fn create(&self, media_id: &str, question: &str) -> Result<DeepDiveSession, ApiError> {
        let payload = DeepDivePayload::new(media_id, question)?;
        let record: DeepDiveRecord = self.api.post("/deep-dive", &payload).await?;
        Ok(record.into())
    }

    /// Delete a session. The backend answers 204.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/deep-dive/{}", id)).await
    }
}
