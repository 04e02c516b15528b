//! HTTP request types for the COVE API client.
//!
//! An [`HttpRequest`] is the unit handed to the request signer and then to
//! the transport. Its `url` is the canonical URL, query string included, and
//! must reach the wire byte-for-byte: the signature is computed over it.

use std::collections::BTreeMap;
use std::fmt;

/// HTTP methods used by the client.
///
/// The COVE API is read-only from this client's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    #[default]
    Get,
}

impl HttpMethod {
    /// Returns the upper-case method name as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to be signed and sent to the COVE API.
///
/// # Example
///
/// ```rust
/// use coveapi::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder("http://api.pbs.org/cove/v1/programs/?a=1")
///     .header("X-Custom", "value")
///     .build();
///
/// assert_eq!(request.method, HttpMethod::Get);
/// assert_eq!(request.headers.get("X-Custom").map(String::as_str), Some("value"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The fully qualified canonical URL.
    pub url: String,
    /// Headers to include in the request.
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    /// Creates a new builder for a GET request to `url`.
    #[must_use]
    pub fn builder(url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(url)
    }

    /// Returns the value of a header, if set.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns a copy of this request with an additional header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    method: HttpMethod,
    url: String,
    headers: BTreeMap<String, String>,
}

impl HttpRequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: BTreeMap::new(),
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
        }
    }
}
