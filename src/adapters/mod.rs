//! [`HttpClient`](crate::traits::HttpClient) implementations: reqwest for
//! the binary, [`mock`] for tests.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
