//! Mock HTTP transport for testing.
//!
//! Provides a configurable mock transport that can return predefined
//! responses or errors without network access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PUT or DELETE)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST and PUT requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
    /// Return a response after a pause (for request-ordering tests)
    Delayed(Response, Duration),
}

/// Mock HTTP transport for testing.
///
/// This client can be configured to return specific responses for URLs,
/// allowing tests to verify HTTP interactions without network access. A URL
/// can also be given a sequence of responses; successive matching requests
/// consume successive entries, and the last entry repeats once the sequence
/// is exhausted.
///
/// # Example
///
/// ```ignore
/// use fukabori::adapters::mock::{MockHttpClient, MockResponse};
/// use fukabori::traits::{Headers, HttpClient, Response};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
///
/// client.set_response(
///     "http://localhost:8000/api/v1/media",
///     MockResponse::Success(Response::new(200, Bytes::from("[]"))),
/// );
///
/// let response = client.get("http://localhost:8000/api/v1/media", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
///
/// let requests = client.get_requests();
/// assert_eq!(requests.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured response sequences by URL pattern
    responses: Arc<Mutex<HashMap<String, Vec<MockResponse>>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a specific URL.
    ///
    /// The URL is matched exactly first, then by prefix.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), vec![response]);
    }

    /// Set a sequence of responses for a specific URL.
    ///
    /// Each matching request consumes one entry; the last entry repeats.
    pub fn set_response_sequence(&self, url: &str, sequence: Vec<MockResponse>) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), sequence);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Clear all configured responses.
    pub fn clear_responses(&self) {
        self.responses.lock().unwrap().clear();
    }

    /// Record a request.
    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    /// Take the next response for a URL.
    fn next_response(&self, url: &str) -> Option<MockResponse> {
        let mut responses = self.responses.lock().unwrap();

        // Exact match first, then prefix match (for URL patterns)
        let key = if responses.contains_key(url) {
            Some(url.to_string())
        } else {
            responses
                .keys()
                .find(|pattern| url.starts_with(pattern.as_str()))
                .cloned()
        };

        if let Some(key) = key {
            if let Some(sequence) = responses.get_mut(&key) {
                if sequence.len() > 1 {
                    return Some(sequence.remove(0));
                }
                return sequence.first().cloned();
            }
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    /// Record and answer one request.
    async fn respond(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<String>,
    ) -> Result<Response, HttpError> {
        self.record_request(method, url, headers, body);

        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            Some(MockResponse::Delayed(response, delay)) => {
                tokio::time::sleep(delay).await;
                Ok(response)
            }
            None => Err(HttpError::Other(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("GET", url, headers, None).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("POST", url, headers, Some(body.to_string()))
            .await
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("PUT", url, headers, Some(body.to_string()))
            .await
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.respond("DELETE", url, headers, None).await
    }
}
