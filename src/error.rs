//! Error types for the COVE API client.
//!
//! This module contains the configuration error type and the crate-wide
//! [`CoveError`] returned by every request operation.
//!
//! # Error Handling
//!
//! Configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Request operations return `Result<T, CoveError>`;
//! failures coming from the signer, the transport, or the JSON decoder are
//! wrapped without being reinterpreted, so callers can match on the original
//! error.
//!
//! # Example
//!
//! ```rust
//! use coveapi::{AppId, ConfigError};
//!
//! let result = AppId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAppId)));
//! ```

use thiserror::Error;

use crate::auth::SigningError;
use crate::clients::HttpError;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// App id cannot be empty.
    #[error("App id cannot be empty. Please provide a valid COVE API app id.")]
    EmptyAppId,

    /// App secret cannot be empty.
    #[error("App secret cannot be empty. Please provide a valid COVE API app secret.")]
    EmptyAppSecret,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Expected scheme and authority only (e.g., 'http://api.pbs.org').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

/// Unified error type for COVE API operations.
///
/// # Example
///
/// ```rust,ignore
/// use coveapi::CoveError;
///
/// match connection.programs().filter(&params).await {
///     Ok(json) => println!("{json}"),
///     Err(CoveError::Http(e)) => println!("request failed: {e}"),
///     Err(CoveError::Decode(e)) => println!("bad JSON: {e}"),
///     Err(other) => println!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum CoveError {
    /// Configuration validation failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The resource locator is neither an id, an absolute URI, nor a path.
    #[error("Invalid resource locator '{locator}'. Expected a positive id, an absolute http(s) URI, or a path starting with '/'.")]
    MalformedLocator {
        /// The rejected locator.
        locator: String,
    },

    /// The resource URI does not have a `/root/version/object` path.
    #[error("Malformed resource URI '{uri}'. Expected a path of the form '/root/version/object/[id]'.")]
    MalformedUri {
        /// The rejected URI.
        uri: String,
    },

    /// The collection name is not one the API exposes.
    #[error("Unknown collection '{name}'.")]
    UnknownCollection {
        /// The unrecognized collection name.
        name: String,
    },

    /// The request signer rejected the request.
    #[error(transparent)]
    Signing(#[from] SigningError),

    /// The transport failed or the server answered with a non-2xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
