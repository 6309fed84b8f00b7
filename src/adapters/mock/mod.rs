//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network access.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP transport with configurable responses

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
