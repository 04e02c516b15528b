//! Top-level entry point to the COVE API.

use std::sync::Arc;

use crate::auth::{PbsAuthSigner, RequestSigner};
use crate::clients::{HttpClient, Transport};
use crate::config::{AppId, AppSecret, CoveConfig, HostUrl};
use crate::error::CoveError;
use crate::rest::{CollectionType, Requestor};

/// Holds credentials and host, and hands out one [`Requestor`] per collection.
///
/// Construction performs no network access. Each accessor builds a fresh
/// `Requestor`; all of them share the same signer and transport.
///
/// # Example
///
/// ```rust
/// use coveapi::Connection;
///
/// let connection = Connection::connect("my-app-id", "my-secret", None).unwrap();
/// let programs = connection.programs();
/// assert_eq!(programs.endpoint(), "http://api.pbs.org/cove/v1/programs/");
/// ```
#[derive(Clone, Debug)]
pub struct Connection {
    config: CoveConfig,
    signer: Arc<dyn RequestSigner>,
    transport: Arc<dyn Transport>,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl Connection {
    /// Connects with an app id, secret, and optional host.
    ///
    /// The host defaults to `http://api.pbs.org`.
    ///
    /// # Errors
    ///
    /// Returns [`CoveError::Config`] if the id or secret is empty or the host
    /// is not a valid scheme-and-authority URL.
    pub fn connect(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
        host: Option<&str>,
    ) -> Result<Self, CoveError> {
        let mut builder = CoveConfig::builder()
            .app_id(AppId::new(app_id)?)
            .app_secret(AppSecret::new(app_secret)?);
        if let Some(host) = host {
            builder = builder.host(HostUrl::new(host)?);
        }
        Ok(Self::new(builder.build()?))
    }

    /// Creates a connection using the default signer and HTTP transport.
    #[must_use]
    pub fn new(config: CoveConfig) -> Self {
        let transport = HttpClient::new(config.user_agent_prefix());
        Self {
            config,
            signer: Arc::new(PbsAuthSigner::new()),
            transport: Arc::new(transport),
        }
    }

    /// Replaces the transport used by requestors created afterwards.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replaces the signer used by requestors created afterwards.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = signer;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CoveConfig {
        &self.config
    }

    /// Returns a requestor for `collection`.
    #[must_use]
    pub fn requestor(&self, collection: CollectionType) -> Requestor {
        Requestor::new(
            collection,
            &self.config,
            Arc::clone(&self.signer),
            Arc::clone(&self.transport),
        )
    }

    /// Returns a requestor for categories.
    #[must_use]
    pub fn categories(&self) -> Requestor {
        self.requestor(CollectionType::Categories)
    }

    /// Returns a requestor for groups.
    #[must_use]
    pub fn groups(&self) -> Requestor {
        self.requestor(CollectionType::Groups)
    }

    /// Returns a requestor for producers.
    #[must_use]
    pub fn producers(&self) -> Requestor {
        self.requestor(CollectionType::Producers)
    }

    /// Returns a requestor for programs.
    #[must_use]
    pub fn programs(&self) -> Requestor {
        self.requestor(CollectionType::Programs)
    }

    /// Returns a requestor for videos.
    #[must_use]
    pub fn videos(&self) -> Requestor {
        self.requestor(CollectionType::Videos)
    }

    /// Returns a requestor for the graveyard of deleted resources.
    ///
    /// Query it with [`Requestor::deleted_since`].
    #[must_use]
    pub fn graveyard(&self) -> Requestor {
        self.requestor(CollectionType::Graveyard)
    }
}
