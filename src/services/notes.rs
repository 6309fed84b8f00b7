//! Note CRUD.

use crate::adapters::ReqwestHttpClient;
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{parse_wire_id, NoteDraft, NoteRecord, NoteUpdate, UserNote};
use crate::traits::HttpClient;

/// Server-side filter for note listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteFilter {
    /// Only notes attached to this media item
    pub media_id: Option<String>,
    /// Number of notes to skip (paging)
    pub skip: Option<u32>,
    /// Maximum number of notes to return
    pub limit: Option<u32>,
}

impl NoteFilter {
    /// Filter to the notes of one media item.
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

/// CRUD operations for notes.
#[derive(Debug, Clone)]
pub struct NotesService<C = ReqwestHttpClient> {
    api: ApiClient<C>,
}

impl<C: HttpClient> NotesService<C> {
    /// Create a service over an existing client.
    pub fn new(api: ApiClient<C>) -> Self {
        Self { api }
    }

    /// Fetch notes matching the filter.
    pub async fn list(&self, filter: &NoteFilter) -> Result<Vec<UserNote>, ApiError> {
        let path = format!("/notes{}", filter.to_query()?);
        let records: Vec<NoteRecord> = self.api.get(&path).await?;
        Ok(records.into_iter().map(UserNote::from).collect())
    }

    /// Fetch a single note by id.
    pub async fn get(&self, id: &str) -> Result<UserNote, ApiError> {
        let record: NoteRecord = self.api.get(&format!("/notes/{}", id)).await?;
        Ok(record.into())
    }

    /// Create a note. Fails with [`ApiError::InvalidId`] before any request
    /// when the draft's media id is not numeric.
    pub async fn create(&self, draft: &NoteDraft) -> Result<UserNote, ApiError> {
        let payload = draft.to_payload()?;
        let record: NoteRecord = self.api.post("/notes", &payload).await?;
        Ok(record.into())
    }

    /// Update the writable fields of a note. Unset fields are left
    /// untouched.
    pub async fn update(&self, id: &str, update: &NoteUpdate) -> Result<UserNote, ApiError> {
        let record: NoteRecord = self.api.put(&format!("/notes/{}", id), update).await?;
        Ok(record.into())
    }

    /// Delete a note. The backend answers 204.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&format!("/notes/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::ApiConfig;
    use crate::models::Emotion;
    use crate::traits::Response;
    use bytes::Bytes;

    fn service(mock: MockHttpClient) -> NotesService<MockHttpClient> {
        NotesService::new(ApiClient::with_transport(ApiConfig::default(), mock))
    }

    fn record_json() -> &'static str {
        r#"{"id":3,"media_id":12,"content":"memo","rating":5.0,"emotion":"moved","created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}"#
    }

    #[test]
    fn test_filter_query_for_media() {
        assert_eq!(
            NoteFilter::for_media("12").to_query().unwrap(),
            "?media_id=12"
        );
        assert_eq!(NoteFilter::default().to_query().unwrap(), "");
    }

    #[test]
    fn test_filter_query_rejects_bad_media_id() {
        let filter = NoteFilter::for_media("abc");
        assert!(matches!(
            filter.to_query(),
            Err(ApiError::InvalidId { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_for_media() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(format!("[{}]", record_json())),
        )));
        let notes = service(mock.clone());

        let listed = notes.list(&NoteFilter::for_media("12")).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "3");
        assert_eq!(listed[0].media_id, "12");

        assert_eq!(
            mock.get_requests()[0].url,
            "http://localhost:8000/api/v1/notes?media_id=12"
        );
    }

    #[tokio::test]
    async fn test_list_with_bad_media_id_makes_no_request() {
        let mock = MockHttpClient::new();
        let notes = service(mock.clone());

        let result = notes.list(&NoteFilter::for_media("abc")).await;
        assert!(matches!(result, Err(ApiError::InvalidId { .. })));
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_sends_integer_media_id() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            201,
            Bytes::from(record_json()),
        )));
        let notes = service(mock.clone());

        let mut draft = NoteDraft::new("12", "memo");
        draft.rating = Some(5);
        draft.emotion = Some(Emotion::Moved);
        let created = notes.create(&draft).await.unwrap();
        assert_eq!(created.id, "3");
        assert_eq!(created.rating, Some(5));

        let requests = mock.get_requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].url, "http://localhost:8000/api/v1/notes");

        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["media_id"], 12);
        assert_eq!(body["emotion"], "moved");
    }

    #[tokio::test]
    async fn test_create_with_bad_media_id_makes_no_request() {
        let mock = MockHttpClient::new();
        let notes = service(mock.clone());

        let result = notes.create(&NoteDraft::new("abc", "memo")).await;
        assert!(matches!(result, Err(ApiError::InvalidId { .. })));
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_only_set_fields() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(record_json()),
        )));
        let notes = service(mock.clone());

        let update = NoteUpdate {
            rating: Some(4),
            ..Default::default()
        };
        notes.update("3", &update).await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].url, "http://localhost:8000/api/v1/notes/3");

        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"rating": 4}));
    }

    #[tokio::test]
    async fn test_delete() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(204, Bytes::new())));
        let notes = service(mock.clone());

        notes.delete("3").await.unwrap();
        assert_eq!(mock.get_requests()[0].method, "DELETE");
        assert_eq!(
            mock.get_requests()[0].url,
            "http://localhost:8000/api/v1/notes/3"
        );
    }
}
