//! Typed HTTP client layer for the external launch catalog.

pub mod http_client;
pub mod http_request;
pub mod http_response;

pub use http_client::HTTPClient;
