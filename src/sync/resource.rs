//! Generic async resource state.
//!
//! One primitive backs every screen-facing container: a shared
//! `{data, loading, error}` triple plus a fetch closure. The per-resource
//! wrappers in this module's siblings only choose the closure, the initial
//! value and the failure message.

use std::sync::Arc;

use futures::future::BoxFuture;
use tokio::sync::RwLock;
use tracing::error;

use crate::error::ApiError;

/// Lifecycle phase of a [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A fetch is in flight, or the resource has never fetched
    Loading,
    /// Data is current as of the last completed fetch
    Ready,
    /// The last fetch failed; `data` still holds the previous value
    Error,
}

/// Snapshot of a resource: the data, whether a fetch is in flight, and the
/// display message of the last failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub data: T,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> ResourceState<T> {
    /// Derive the phase from the flags. `loading` wins over `error`.
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Ready
        }
    }
}

/// Closure producing one fetch attempt.
pub type FetchFn<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, ApiError>> + Send + Sync>;

/// Shared `{data, loading, error}` container for one remote resource.
///
/// Clones share state, so a clone can refresh from a spawned task while
/// another observes. `refresh` has last-completion-wins semantics: when two
/// refreshes overlap, whichever resolves later writes the final state.
/// Nothing sequences or cancels in-flight fetches; callers needing ordering
/// await `refresh` serially.
pub struct Resource<T> {
    state: Arc<RwLock<ResourceState<T>>>,
    fetch: Option<FetchFn<T>>,
    /// Name used in log lines
    label: &'static str,
    /// Fixed display string stored on fetch failure
    failure_message: &'static str,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            fetch: self.fetch.clone(),
            label: self.label,
            failure_message: self.failure_message,
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Resource<T> {
    /// Create a resource that starts in the loading phase and fills itself
    /// with `fetch`.
    pub fn new(
        initial: T,
        label: &'static str,
        failure_message: &'static str,
        fetch: FetchFn<T>,
    ) -> Self {
        Self {
            state: Arc::new(RwLock::new(ResourceState {
                data: initial,
                loading: true,
                error: None,
            })),
            fetch: Some(fetch),
            label,
            failure_message,
        }
    }

    /// Create a gated resource: its identifying parameter is absent, so it
    /// never fetches and stays in the loading phase.
    pub fn gated(initial: T, label: &'static str, failure_message: &'static str) -> Self {
        Self {
            state: Arc::new(RwLock::new(ResourceState {
                data: initial,
                loading: true,
                error: None,
            })),
            fetch: None,
            label,
            failure_message,
        }
    }

    /// Whether this resource has no fetch to run.
    pub fn is_gated(&self) -> bool {
        self.fetch.is_none()
    }

    /// Run one fetch and store its outcome.
    ///
    /// Marks the state loading and clears the previous error, then awaits
    /// the fetch. Success replaces `data`; failure logs the underlying error
    /// and stores the fixed failure message, leaving `data` as it was. On a
    /// gated resource this is a no-op.
    pub async fn refresh(&self) {
        let Some(fetch) = self.fetch.clone() else {
            return;
        };

        {
            let mut state = self.state.write().await;
            state.loading = true;
            state.error = None;
        }

        let result = fetch().await;

        let mut state = self.state.write().await;
        match result {
            Ok(data) => {
                state.data = data;
            }
            Err(err) => {
                error!(resource = self.label, error = %err, "fetch failed");
                state.error = Some(self.failure_message.to_string());
            }
        }
        state.loading = false;
    }

    /// Clone the current state.
    pub async fn snapshot(&self) -> ResourceState<T> {
        self.state.read().await.clone()
    }

    /// Clone the current data.
    pub async fn data(&self) -> T {
        self.state.read().await.data.clone()
    }

    /// Whether a fetch is in flight (or the resource never fetched).
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.loading
    }

    /// The display message of the last failure, if any.
    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }
}

impl<T: Clone + Send + Sync + 'static> Resource<Vec<T>> {
    /// Append one element at the end of the list, leaving the flags alone.
    pub async fn append(&self, item: T) {
        self.state.write().await.data.push(item);
    }
}
