//! Media item CRUD.

use crate::adapters::ReqwestHttpClient;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{MediaDraft, MediaItem, MediaRecord, MediaType};
use crate::traits::HttpClient;

/// Server-side filter for media listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaFilter {
    /// Only items of this type
    pub media_type: Option<MediaType>,
    /// Number of items to skip (paging)
    pub skip: Option<u32>,
    /// Maximum number of items to return
    pub limit: Option<u32>,
}

impl MediaFilter {
    /// Filter to a single media type.
    pub fn by_type(media_type: MediaType) -> Self {
        Self {
            media_type: Some(media_type),
            ..Default::default()
        }
    }

    fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(media_type) = self.media_type {
            params.push(format!("media_type={}", media_type));
        }
        if let Some(skip) = self.skip {
            params.push(format!("skip={}", skip));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// CRUD operations for media items.
///
/// # Example
///
/// ```ignore
/// use fukabori::client::ApiClient;
/// use fukabori::config::ApiConfig;
/// use fukabori::services::{MediaFilter, MediaService};
///
/// let api = ApiClient::new(ApiConfig::from_env())?;
/// let media = MediaService::new(api);
/// let items = media.list(&MediaFilter::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MediaService<C = ReqwestHttpClient> {
    api: ApiClient<C>,
}

impl<C: HttpClient> MediaService<C> {
    /// Create a service over an existing client.
    pub fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// Fetch media items matching the filter.
    pub async fn list(&self, filter: &MediaFilter) -> Result<Vec<MediaItem>, ApiError> {
        let path = format!("/media{}", filter.to_query());
        let records: Vec<MediaRecord> = self.api.get(&path).await?;
        Ok(records.into_iter().map(MediaItem::from).collect())
    }

    /// Fetch a single media item by id.
    pub async fn get(&self, id: &str) -> Result<MediaItem, ApiError> {
        let record: MediaRecord = self.api.get(&format!("/media/{}", id)).await?;
        Ok(record.into())
    }

    /// Capture a new media item. The backend answers 201 with the created
    /// record.
    pub async fn create(&self, draft: &MediaDraft) -> Result<MediaItem, ApiError> {
        let record: MediaRecord = self.api.post("/media", &draft.to_payload()).await?;
        Ok(record.into())
    }

    /// Replace the writable fields of an item.
    pub async fn update(&self, id: &str, draft: &MediaDraft) -> Result<MediaItem, ApiError> {
        let record: MediaRecord = self
            .api
            .put(&format!("/media/{}", id), &draft.to_payload())
            .await?;
        Ok(record.into())
    }

    /// Delete an item. The backend answers 204.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/media/{}", id)).await
    }
}
