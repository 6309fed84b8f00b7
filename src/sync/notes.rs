//! Synchronized note log for one media item.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::error::ApiError;
use crate::models::{NoteDraft, UserNote};
use crate::services::{NoteFilter, NotesService};
use crate::sync::resource::{FetchFn, Resource, ResourceState};
use crate::traits::HttpClient;

/// The notes attached to one media item, plus creation.
///
/// Built with `None` when no item is selected yet: the log is gated, never
/// fetches, and stays in the loading phase. `create` still works either way
/// since the draft names its own media item; the created note is appended
/// at the end of the local list so the screen updates without a refetch.
#[derive(Clone)]
pub struct NoteLog<C: HttpClient = ReqwestHttpClient> {
    service: NotesService<C>,
    resource: Resource<Vec<UserNote>>,
}

impl<C> NoteLog<C>
where
    C: HttpClient + Clone + 'static,
{
    pub fn new(service: NotesService<C>, media_id: Option<String>) -> Self {
        let resource = match media_id {
            Some(id) => {
                let fetch: FetchFn<Vec<UserNote>> = {
                    let service = service.clone();
                    Arc::new(move || {
                        let service = service.clone();
                        let filter = NoteFilter::for_media(id.clone());
                        Box::pin(async move { service.list(&filter).await })
                    })
                };
                Resource::new(Vec::new(), "note_log", "Failed to load notes", fetch)
            }
            None => Resource::gated(Vec::new(), "note_log", "Failed to load notes"),
        };
        Self { service, resource }
    }

    /// Fetch the notes again and replace the current data.
    pub async fn refresh(&self) {
        self.resource.refresh().await;
    }

    /// Create a note and append it to the local list.
    ///
    /// Failures propagate to the caller and leave the list untouched; they
    /// do not set the log's own error message, which is reserved for load
    /// failures.
    pub async fn create(&self, draft: NoteDraft) -> Result<UserNote, ApiError> {
        let note = self.service.create(&draft).await?;
        self.resource.append(note.clone()).await;
        Ok(note)
    }

    pub async fn snapshot(&self) -> ResourceState<Vec<UserNote>> {
        self.resource.snapshot().await
    }

    pub async fn notes(&self) -> Vec<UserNote> {
        self.resource.data().await
    }

    pub async fn is_loading(&self) -> bool {
        self.resource.is_loading().await
    }

    pub async fn error(&self) -> Option<String> {
        self.resource.error().await
    }
}
