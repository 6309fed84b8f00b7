//! Screen-facing data synchronization.
//!
//! Each container here owns the `{data, loading, error}` state for one
//! remote resource and knows how to refresh it. Screens clone a container,
//! render from [`Resource::snapshot`]-style accessors, and call `refresh`
//! on focus; creation goes through the same container so the local list
//! stays current without a refetch.
//!
//! All containers share the [`resource::Resource`] primitive; see its docs
//! for the concurrency contract.

pub mod deep_dive;
pub mod media;
pub mod notes;
pub mod resource;

pub use deep_dive::DeepDiveLog;
pub use media::{MediaDetail, MediaLibrary};
pub use notes::NoteLog;
pub use resource::{FetchFn, Phase, Resource, ResourceState};
