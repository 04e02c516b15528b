//! HTTP transport for COVE API communication.
//!
//! This module provides the [`Transport`] seam used by every
//! [`Requestor`](crate::Requestor) and the default reqwest-backed
//! [`HttpClient`] implementation.

use async_trait::async_trait;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sends a signed request and returns the raw response body.
///
/// Implementations must issue the request to `request.url` exactly as given
/// and must not retry. Any failure, including a non-2xx status, is returned
/// as an [`HttpError`].
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Performs the network call.
    async fn send(&self, request: &HttpRequest) -> Result<Vec<u8>, HttpError>;
}

/// HTTP client for making requests to the COVE API.
///
/// The client adds a `User-Agent` and `Accept: application/json` header to
/// every request and otherwise sends it untouched.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use coveapi::clients::{HttpClient, HttpRequest, Transport};
///
/// let client = HttpClient::new(None);
/// let request = HttpRequest::builder("http://api.pbs.org/cove/v1/programs/").build();
/// let body = client.send(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    user_agent: String,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `user_agent_prefix` - Optional prefix prepended to the `User-Agent` header
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(user_agent_prefix: Option<&str>) -> Self {
        let user_agent_prefix =
            user_agent_prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}COVE API Rust Client v{CLIENT_VERSION} | Rust {rust_version}");

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { client, user_agent }
    }

    /// Returns the `User-Agent` header value sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &HttpRequest) -> Result<Vec<u8>, HttpError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
        };

        req_builder = req_builder
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json");
        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;
        let code = res.status().as_u16();
        let body = res.bytes().await?;

        if !(200..300).contains(&code) {
            tracing::warn!(
                "COVE API request to {} failed with status {}",
                request.url,
                code
            );
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: String::from_utf8_lossy(&body).into_owned(),
            }));
        }

        Ok(body.to_vec())
    }
}
