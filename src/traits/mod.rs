//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for core functionality,
//! enabling dependency injection, mocking, and better testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP transport operations (GET, POST, PUT, DELETE)

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
