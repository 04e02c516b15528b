//! HTTP-specific error types for the COVE API client.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError`]: Unified error type for transport failures
//!
//! The client performs no status-code interpretation: a 404 and a refused
//! connection both surface as an [`HttpError`], leaving the decision to the
//! caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use coveapi::{CoveError, HttpError};
//!
//! match connection.programs().get(1001.into(), &params).await {
//!     Ok(json) => println!("{json}"),
//!     Err(CoveError::Http(HttpError::Response(e))) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(CoveError::Http(HttpError::Network(e))) => {
//!         println!("Network error: {}", e);
//!     }
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a non-successful status.
///
/// `message` carries the raw response body so nothing the server said is lost.
///
/// # Example
///
/// ```rust
/// use coveapi::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"{"error":"Not found"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Unified error type for all transport errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
