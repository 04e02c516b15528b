//! Configuration types for the COVE API client.
//!
//! # Overview
//!
//! - [`CoveConfig`]: The configuration struct holding credentials and settings
//! - [`CoveConfigBuilder`]: A builder for constructing [`CoveConfig`] instances
//! - [`AppId`]: A validated app id newtype
//! - [`AppSecret`]: A validated app secret newtype with masked debug output
//! - [`HostUrl`]: A validated API host (scheme and authority)
//!
//! # Example
//!
//! ```rust
//! use coveapi::{CoveConfig, AppId, AppSecret};
//!
//! let config = CoveConfig::builder()
//!     .app_id(AppId::new("my-app-id").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "http://api.pbs.org");
//! ```

mod newtypes;

pub use newtypes::{AppId, AppSecret, HostUrl};

use crate::auth::Credentials;
use crate::error::ConfigError;
use crate::rest::{SpaceEncoding, COVEAPI_HOST};

/// Configuration for the COVE API client.
///
/// `CoveConfig` is `Clone`, `Send`, and `Sync`. It is immutable once built;
/// every [`Requestor`](crate::Requestor) created from it sees the same
/// credentials and host.
#[derive(Clone, Debug)]
pub struct CoveConfig {
    credentials: Credentials,
    host: HostUrl,
    space_encoding: SpaceEncoding,
    user_agent_prefix: Option<String>,
}

impl CoveConfig {
    /// Creates a new builder for constructing a `CoveConfig`.
    #[must_use]
    pub fn builder() -> CoveConfigBuilder {
        CoveConfigBuilder::new()
    }

    /// Returns the app credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the API host.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns how spaces are encoded in canonical query strings.
    #[must_use]
    pub const fn space_encoding(&self) -> SpaceEncoding {
        self.space_encoding
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CoveConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CoveConfig>();
};

/// Builder for constructing [`CoveConfig`] instances.
///
/// Required fields are `app_id` and `app_secret`.
///
/// # Defaults
///
/// - `host`: `http://api.pbs.org`
/// - `space_encoding`: [`SpaceEncoding::Plus`]
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use coveapi::{CoveConfig, AppId, AppSecret, HostUrl, SpaceEncoding};
///
/// let config = CoveConfig::builder()
///     .app_id(AppId::new("id").unwrap())
///     .app_secret(AppSecret::new("secret").unwrap())
///     .host(HostUrl::new("http://api.example.org").unwrap())
///     .space_encoding(SpaceEncoding::Percent)
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CoveConfigBuilder {
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
    host: Option<HostUrl>,
    space_encoding: Option<SpaceEncoding>,
    user_agent_prefix: Option<String>,
}

impl CoveConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the app id (required).
    #[must_use]
    pub fn app_id(mut self, id: AppId) -> Self {
        self.app_id = Some(id);
        self
    }

    /// Sets the app secret (required).
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the space encoding used for canonical query strings.
    ///
    /// The COVE authentication scheme verifies signatures over `+`-encoded
    /// spaces; only switch to [`SpaceEncoding::Percent`] against a service
    /// that expects `%20`.
    #[must_use]
    pub const fn space_encoding(mut self, encoding: SpaceEncoding) -> Self {
        self.space_encoding = Some(encoding);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CoveConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `app_id` or
    /// `app_secret` are not set, or [`ConfigError::InvalidHostUrl`] if the
    /// default host fails validation.
    pub fn build(self) -> Result<CoveConfig, ConfigError> {
        let app_id = self
            .app_id
            .ok_or(ConfigError::MissingRequiredField { field: "app_id" })?;
        let app_secret = self
            .app_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "app_secret",
            })?;
        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(COVEAPI_HOST)?,
        };

        Ok(CoveConfig {
            credentials: Credentials::new(app_id, app_secret),
            host,
            space_encoding: self.space_encoding.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
