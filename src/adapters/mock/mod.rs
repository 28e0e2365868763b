//! Test doubles.

pub mod http;

pub use http::{MockGate, MockHttpClient, MockResponse, RecordedRequest};
