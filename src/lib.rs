//! Fukabori - client data layer for a media capture & reflection app
//!
//! Everything between the screens and the backend REST API: wire-shape
//! transformers, an HTTP transport abstraction with production and mock
//! adapters, per-resource services, and the screen-facing sync containers.

pub mod adapters;
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod services;
pub mod sync;
pub mod traits;
