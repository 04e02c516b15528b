//! HTTP types for COVE API communication.
//!
//! # Overview
//!
//! - [`HttpRequest`]: A request to be signed and sent
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`Transport`]: The seam through which requests reach the network
//! - [`HttpClient`]: The default reqwest-backed [`Transport`]
//! - [`HttpError`]: Transport and non-2xx response errors
//!
//! # Retry Behavior
//!
//! None. Every request is attempted exactly once and failures are returned
//! to the caller unchanged.

mod errors;
mod http_client;
mod http_request;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, Transport, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
