//! Config-aware API client.
//!
//! [`ApiClient`] sits between the per-resource services and the HTTP
//! transport: it joins the configured base URL and path prefix with an
//! endpoint path, serializes JSON bodies, turns non-2xx statuses into
//! [`ApiError::Status`] and decodes successful bodies into typed values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::traits::{Headers, HttpClient, Response};

/// Typed JSON client over an [`HttpClient`] transport.
///
/// Cheap to clone; services each hold their own clone.
///
/// # Example
///
/// ```ignore
/// use fukabori::client::ApiClient;
/// use fukabori::config::ApiConfig;
/// use fukabori::models::media::MediaRecord;
///
/// let api = ApiClient::new(ApiConfig::from_env())?;
/// let records: Vec<MediaRecord> = api.get("/media").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient<C = ReqwestHttpClient> {
    config: ApiConfig,
    transport: C,
}

impl ApiClient<ReqwestHttpClient> {
    /// Create a client with the production transport, applying the
    /// configured uniform timeout.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let transport = ReqwestHttpClient::with_timeout(config.timeout)?;
        Ok(Self { config, transport })
    }
}

impl<C: HttpClient> ApiClient<C> {
    /// Create a client over a specific transport (mocks in tests).
    pub fn with_transport(config: ApiConfig, transport: C) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform a GET and decode the response body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let response = self.transport.get(&url, &Self::json_headers()).await?;
        Self::check_status(&url, &response)?;
        Ok(response.json()?)
    }

    /// Perform a POST with a JSON body and decode the response body.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let body = serde_json::to_string(body)?;
        let response = self
            .transport
            .post(&url, &body, &Self::json_headers())
            .await?;
        Self::check_status(&url, &response)?;
        Ok(response.json()?)
    }

    /// Perform a PUT with a JSON body and decode the response body.
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let body = serde_json::to_string(body)?;
        let response = self
            .transport
            .put(&url, &body, &Self::json_headers())
            .await?;
        Self::check_status(&url, &response)?;
        Ok(response.json()?)
    }

    /// Perform a DELETE. The backend answers 204 with an empty body, so
    /// nothing is decoded.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.config.endpoint(path);
        let response = self.transport.delete(&url, &Self::json_headers()).await?;
        Self::check_status(&url, &response)?;
        Ok(())
    }

    fn json_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    /// Map a non-2xx response to [`ApiError::Status`].
    ///
    /// The backend sends error detail as `{"detail": ...}`; that body is
    /// logged here and not exposed on the error.
    fn check_status(url: &str, response: &Response) -> Result<(), ApiError> {
        if response.is_success() {
            return Ok(());
        }
        debug!(
            url,
            status = response.status,
            body = %String::from_utf8_lossy(&response.body),
            "request failed"
        );
        Err(ApiError::from_status(response.status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;
    use bytes::Bytes;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
        title: String,
    }

    fn client_with(mock: MockHttpClient) -> ApiClient<MockHttpClient> {
        ApiClient::with_transport(ApiConfig::default(), mock)
    }

    #[tokio::test]
    async fn test_get_joins_config_url() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"id":1,"title":"A"}"#),
        )));
        let api = client_with(mock.clone());

        let item: Item = api.get("/media/1").await.unwrap();
        assert_eq!(
            item,
            Item {
                id: 1,
                title: "A".to_string()
            }
        );

        let requests = mock.get_requests();
        assert_eq!(requests[0].url, "http://localhost:8000/api/v1/media/1");
    }

    #[tokio::test]
    async fn test_json_headers_sent() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from("[]"),
        )));
        let api = client_with(mock.clone());

        let _: Vec<Item> = api.get("/media").await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(
            requests[0].headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_post_serializes_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            201,
            Bytes::from(r#"{"id":9,"title":"B"}"#),
        )));
        let api = client_with(mock.clone());

        let body = serde_json::json!({"title": "B"});
        let created: Item = api.post("/media", &body).await.unwrap();
        assert_eq!(created.id, 9);

        let requests = mock.get_requests();
        assert_eq!(requests[0].method, "POST");
        let sent: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, serde_json::json!({"title": "B"}));
    }

    #[tokio::test]
    async fn test_non_2xx_maps_to_status_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            500,
            Bytes::from(r#"{"detail":"boom"}"#),
        )));
        let api = client_with(mock);

        let result: Result<Vec<Item>, ApiError> = api.get("/media").await;
        match result {
            Err(ApiError::Status {
                status,
                status_text,
            }) => {
                assert_eq!(status, 500);
                assert_eq!(status_text, "Internal Server Error");
            }
            other => panic!("expected Status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_transport_error_maps_to_network() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let api = client_with(mock);

        let result: Result<Vec<Item>, ApiError> = api.get("/media").await;
        assert!(matches!(result, Err(ApiError::Network(_))));
    }

    #[tokio::test]
    async fn test_bad_body_maps_to_decode() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from("not json"),
        )));
        let api = client_with(mock);

        let result: Result<Vec<Item>, ApiError> = api.get("/media").await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_delete_ignores_empty_body() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(204, Bytes::new())));
        let api = client_with(mock.clone());

        api.delete("/media/1").await.unwrap();

        let requests = mock.get_requests();
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].url, "http://localhost:8000/api/v1/media/1");
    }

    #[tokio::test]
    async fn test_put_round_trip() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"{"id":1,"title":"Updated"}"#),
        )));
        let api = client_with(mock.clone());

        let body = serde_json::json!({"title": "Updated"});
        let item: Item = api.put("/media/1", &body).await.unwrap();
        assert_eq!(item.title, "Updated");
        assert_eq!(mock.get_requests()[0].method, "PUT");
    }
}
