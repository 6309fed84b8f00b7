//! Synchronized views of the media collection.

use std::sync::Arc;

use crate::models::MediaItem;
use crate::services::{MediaFilter, MediaService};
use crate::sync::resource::{FetchFn, Resource, ResourceState};
use crate::traits::HttpClient;

/// The captured media collection as a screen sees it.
///
/// Holds the full item list plus loading and error flags. The underlying
/// service and filter are fixed at construction; `refresh` re-runs the same
/// listing.
#[derive(Clone)]
pub struct MediaLibrary {
    resource: Resource<Vec<MediaItem>>,
}

impl MediaLibrary {
    /// Library over every captured item.
    pub fn new<C>(service: MediaService<C>) -> Self
    where
        C: HttpClient + Clone + 'static,
    {
        Self::with_filter(service, MediaFilter::default())
    }

    /// Library restricted to one fixed filter, e.g. a single media type.
    pub fn with_filter<C>(service: MediaService<C>, filter: MediaFilter) -> Self
    where
        C: HttpClient + Clone + 'static,
    {
        let fetch: FetchFn<Vec<MediaItem>> = Arc::new(move || {
            let service = service.clone();
            let filter = filter.clone();
            Box::pin(async move { service.list(&filter).await })
        });
        Self {
            resource: Resource::new(
                Vec::new(),
                "media_library",
                "Failed to load media items",
                fetch,
            ),
        }
    }

    /// Fetch the list again and replace the current data.
    pub async fn refresh(&self) {
        self.resource.refresh().await;
    }

    pub async fn snapshot(&self) -> ResourceState<Vec<MediaItem>> {
        self.resource.snapshot().await
    }

    pub async fn items(&self) -> Vec<MediaItem> {
        self.resource.data().await
    }

    pub async fn is_loading(&self) -> bool {
        self.resource.is_loading().await
    }

    pub async fn error(&self) -> Option<String> {
        self.resource.error().await
    }
}

/// One media item by id, for the detail screen.
///
/// Built with `None` when the screen has no id yet (a gated detail): it
/// never fetches and reports loading until rebuilt with an id.
#[derive(Clone)]
pub struct MediaDetail {
    resource: Resource<Option<MediaItem>>,
}

impl MediaDetail {
    pub fn new<C>(service: MediaService<C>, id: Option<String>) -> Self
    where
        C: HttpClient + Clone + 'static,
    {
        let resource = match id {
            Some(id) => {
                let fetch: FetchFn<Option<MediaItem>> = Arc::new(move || {
                    let service = service.clone();
                    let id = id.clone();
                    Box::pin(async move { service.get(&id).await.map(Some) })
                });
                Resource::new(None, "media_detail", "Failed to load media item", fetch)
            }
            None => Resource::gated(None, "media_detail", "Failed to load media item"),
        };
        Self { resource }
    }

    pub async fn refresh(&self) {
        self.resource.refresh().await;
    }

    pub async fn snapshot(&self) -> ResourceState<Option<MediaItem>> {
        self.resource.snapshot().await
    }

    pub async fn item(&self) -> Option<MediaItem> {
        self.resource.data().await
    }

    pub async fn is_loading(&self) -> bool {
        self.resource.is_loading().await
    }

    pub async fn error(&self) -> Option<String> {
        self.resource.error().await
    }
}
