//! Synchronized deep-dive session log for one media item.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::ApiError;
use crate::models::DeepDiveSession;
use crate::services::{DeepDiveFilter, DeepDiveService};
use crate::sync::resource::{FetchFn, Resource, ResourceState};
use crate::traits::HttpClient;

/// The deep-dive sessions attached to one media item, plus creation.
///
/// Built with `None` when no item is selected yet: the log is gated, never
/// fetches, and `create` answers `Ok(None)` without a request. A created
/// session is appended at the end of the local list, with its answer and
/// related works, so the screen shows it without a refetch.
#[derive(Clone)]
pub struct DeepDiveLog<C: HttpClient = ReqwestHttpClient> {
    service: DeepDiveService<C>,
    media_id: Option<String>,
    resource: Resource<Vec<DeepDiveSession>>,
}

impl<C> DeepDiveLog<C>
where
    C: HttpClient + Clone + 'static,
{
    pub fn new(service: DeepDiveService<C>, media_id: Option<String>) -> Self {
        let resource = match &media_id {
            Some(id) => {
                let fetch: FetchFn<Vec<DeepDiveSession>> = {
                    let service = service.clone();
                    let id = id.clone();
                    Arc::new(move || {
                        let service = service.clone();
                        let filter = DeepDiveFilter::for_media(id.clone());
                        Box::pin(async move { service.list(&filter).await })
                    })
                };
                Resource::new(
                    Vec::new(),
                    "deep_dive_log",
                    "Failed to load deep dive sessions",
                    fetch,
                )
            }
            None => Resource::gated(
                Vec::new(),
                "deep_dive_log",
                "Failed to load deep dive sessions",
            ),
        };
        Self {
            service,
            media_id,
            resource,
        }
    }

    /// Fetch the sessions again and replace the current data.
    pub async fn refresh(&self) {
        self.resource.refresh().await;
    }

    /// Ask a question about the bound media item and append the resulting
    /// session, answer included.
    ///
    /// Returns `Ok(None)` without any request when no media item is bound.
    /// Failures propagate to the caller and leave the list untouched.
    pub async fn create(&self, question: &str) -> Result<Option<DeepDiveSession>, ApiError> {
        let Some(media_id) = &self.media_id else {
            return Ok(None);
        };
        let session = self.service.create(media_id, question).await?;
        self.resource.append(session.clone()).await;
        Ok(Some(session))
    }

    pub async fn snapshot(&self) -> ResourceState<Vec<DeepDiveSession>> {
        self.resource.snapshot().await
    }

    pub async fn sessions(&self) -> Vec<DeepDiveSession> {
        self.resource.data().await
    }

    pub async fn is_loading(&self) -> bool {
        self.resource.is_loading().await
    }

    pub async fn error(&self) -> Option<String> {
        self.resource.error().await
    }
}
