//! Per-collection request façade.
//!
//! A [`Requestor`] is bound to one collection endpoint. All of its
//! operations share a single execution path:
//!
//! ```text
//! canonicalize -> normalize -> sign -> send -> decode JSON
//! ```
//!
//! Normalization parses the canonical URL the way the transport will, so
//! the signature always covers the exact URL put on the wire.
//!
//! Errors from the signer, the transport, and the decoder are returned
//! unchanged inside their [`CoveError`] variant.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use crate::auth::{Credentials, RequestSigner};
use crate::clients::{HttpRequest, Transport};
use crate::config::CoveConfig;
use crate::error::CoveError;
use crate::rest::canonical::{canonicalize, FilterParams, SpaceEncoding};
use crate::rest::collection::{resolve_endpoint, CollectionType};
use crate::rest::locator::ResourceLocator;

/// Parameter name used by the graveyard collection.
pub const DELETED_SINCE_PARAM: &str = "deleted_since";

/// Issues signed requests against one collection endpoint.
///
/// Obtain one from a [`Connection`](crate::Connection) accessor such as
/// [`programs`](crate::Connection::programs). Requestors hold no mutable
/// state and can be cloned and used from several tasks at once.
///
/// # Example
///
/// ```rust,ignore
/// use coveapi::rest::{FilterParams, ResourceLocator};
///
/// let programs = connection.programs();
///
/// // A single program by id
/// let program = programs.get(ResourceLocator::Id(1001), &FilterParams::new()).await?;
///
/// // A filtered listing
/// let params = FilterParams::new()
///     .with("filter_nola_root", "NOVA")
///     .with("fields", "associated_images");
/// let listing = programs.filter(&params).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Requestor {
    collection: CollectionType,
    endpoint: String,
    host: String,
    credentials: Credentials,
    space_encoding: SpaceEncoding,
    signer: Arc<dyn RequestSigner>,
    transport: Arc<dyn Transport>,
}

// Verify Requestor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Requestor>();
};

impl Requestor {
    /// Creates a requestor for `collection` using the host and credentials in `config`.
    #[must_use]
    pub fn new(
        collection: CollectionType,
        config: &CoveConfig,
        signer: Arc<dyn RequestSigner>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let host = config.host().as_ref().to_string();
        Self {
            collection,
            endpoint: resolve_endpoint(&host, collection),
            host,
            credentials: config.credentials().clone(),
            space_encoding: config.space_encoding(),
            signer,
            transport,
        }
    }

    /// Returns the collection this requestor is bound to.
    #[must_use]
    pub const fn collection(&self) -> CollectionType {
        self.collection
    }

    /// Returns the collection endpoint (`host/cove/v1/<collection>/`).
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the API host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the URL `get` would sign and request, without sending anything.
    ///
    /// # Errors
    ///
    /// Returns [`CoveError::MalformedLocator`] if the locator cannot be
    /// resolved to a valid URL.
    pub fn build_url(
        &self,
        locator: &ResourceLocator,
        params: &FilterParams,
    ) -> Result<String, CoveError> {
        let url = locator.resolve(&self.endpoint, &self.host)?;
        self.request_url(&url, params)
    }

    /// Canonicalizes `url` with `params` and normalizes the result.
    ///
    /// Dot-segments, default ports, host case, and unescaped path characters
    /// are rewritten here rather than silently by the transport.
    fn request_url(&self, url: &str, params: &FilterParams) -> Result<String, CoveError> {
        let canonical = canonicalize(url, params, self.space_encoding);
        let parsed = Url::parse(&canonical).map_err(|_| CoveError::MalformedLocator {
            locator: canonical.clone(),
        })?;
        Ok(parsed.into())
    }

    /// Fetches a single resource.
    ///
    /// # Errors
    ///
    /// Returns [`CoveError::MalformedLocator`] for an unresolvable locator,
    /// otherwise any signing, transport, or decode error unchanged.
    pub async fn get(
        &self,
        locator: ResourceLocator,
        params: &FilterParams,
    ) -> Result<Value, CoveError> {
        let url = locator.resolve(&self.endpoint, &self.host)?;
        self.make_request(&url, params).await
    }

    /// Fetches the collection, narrowed by `params`.
    ///
    /// # Errors
    ///
    /// Returns any signing, transport, or decode error unchanged.
    pub async fn filter(&self, params: &FilterParams) -> Result<Value, CoveError> {
        self.make_request(&self.endpoint, params).await
    }

    /// Fetches resources deleted since the `deleted_since` parameter.
    ///
    /// Meant for the graveyard collection. The request is built exactly as
    /// for [`filter`](Self::filter).
    ///
    /// # Errors
    ///
    /// Returns any signing, transport, or decode error unchanged.
    pub async fn deleted_since(&self, params: &FilterParams) -> Result<Value, CoveError> {
        self.make_request(&self.endpoint, params).await
    }

    /// Fetches resources deleted since `since`.
    ///
    /// # Errors
    ///
    /// Returns any signing, transport, or decode error unchanged.
    pub async fn deleted_since_time(&self, since: DateTime<Utc>) -> Result<Value, CoveError> {
        let params = FilterParams::new().with(DELETED_SINCE_PARAM, since);
        self.deleted_since(&params).await
    }

    async fn make_request(&self, url: &str, params: &FilterParams) -> Result<Value, CoveError> {
        let url = self.request_url(url, params)?;
        tracing::debug!(collection = %self.collection, url = %url, "sending COVE API request");

        let request = HttpRequest::builder(url).build();
        let signed = self.signer.sign(request, &self.credentials)?;
        let body = self.transport.send(&signed).await?;
        let json: Value = serde_json::from_slice(&body)?;

        tracing::debug!(
            collection = %self.collection,
            bytes = body.len(),
            "decoded COVE API response"
        );
        Ok(json)
    }
}
