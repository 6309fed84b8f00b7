//! Per-resource API services.
//!
//! Each service owns a clone of [`crate::client::ApiClient`] and exposes the
//! CRUD surface for one resource. Wire shapes never escape this layer:
//! inputs are drafts, outputs are entities.

pub mod deep_dive;
pub mod media;
pub mod notes;

pub use deep_dive::{DeepDiveFilter, DeepDiveService};
pub use media::{MediaFilter, MediaService};
pub use notes::{NoteFilter, NotesService};
