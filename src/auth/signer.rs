//! Request signing for the COVE API.
//!
//! COVE authenticates each request with four `X-PBSAuth-*` headers. The
//! signature is a lowercase hex HMAC-SHA1, keyed by the app secret, over the
//! concatenation of:
//!
//! ```text
//! METHOD + canonical URL + timestamp + app id + nonce
//! ```
//!
//! The canonical URL is signed exactly as the transport will send it, so any
//! reordering or re-encoding of the query string invalidates the signature.
//!
//! # Example
//!
//! ```rust
//! use coveapi::auth::compute_signature;
//!
//! let sig = compute_signature(
//!     "GET",
//!     "http://api.pbs.org/cove/v1/programs/",
//!     "1300000000",
//!     "app-id",
//!     "nonce",
//!     "secret",
//! )
//! .unwrap();
//! assert_eq!(sig.len(), 40);
//! ```

use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use thiserror::Error;

use crate::auth::Credentials;
use crate::clients::HttpRequest;

type HmacSha1 = Hmac<Sha1>;

/// Header carrying the Unix timestamp of the request.
pub const HEADER_TIMESTAMP: &str = "X-PBSAuth-Timestamp";
/// Header carrying the app id.
pub const HEADER_CONSUMER_KEY: &str = "X-PBSAuth-Consumer-Key";
/// Header carrying the hex HMAC-SHA1 signature.
pub const HEADER_SIGNATURE: &str = "X-PBSAuth-Signature";
/// Header carrying the per-request nonce.
pub const HEADER_NONCE: &str = "X-PBSAuth-Nonce";

const NONCE_LENGTH: usize = 32;

/// Error returned when a request cannot be signed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Failed to sign request: {reason}")]
pub struct SigningError {
    /// Why signing failed.
    pub reason: String,
}

/// Attaches authentication data to a canonical request.
///
/// Implementations receive the request with its final URL and return an
/// equivalent request carrying whatever the remote service needs. They must
/// not alter the URL.
pub trait RequestSigner: Send + Sync + std::fmt::Debug {
    /// Signs `request` with `credentials`.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError`] if the signature cannot be computed.
    fn sign(
        &self,
        request: HttpRequest,
        credentials: &Credentials,
    ) -> Result<HttpRequest, SigningError>;
}

/// The `X-PBSAuth` signer used by the COVE API.
///
/// Each call draws a fresh timestamp and random nonce, so two signatures of
/// the same URL differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct PbsAuthSigner;

impl PbsAuthSigner {
    /// Creates a new signer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Signs `request` with an explicit timestamp and nonce.
    ///
    /// # Errors
    ///
    /// Returns [`SigningError`] if the HMAC key is rejected.
    pub fn sign_with(
        request: HttpRequest,
        credentials: &Credentials,
        timestamp: &str,
        nonce: &str,
    ) -> Result<HttpRequest, SigningError> {
        let app_id = credentials.app_id().as_ref();
        let signature = compute_signature(
            request.method.as_str(),
            &request.url,
            timestamp,
            app_id,
            nonce,
            credentials.app_secret().as_ref(),
        )?;

        Ok(request
            .with_header(HEADER_TIMESTAMP, timestamp)
            .with_header(HEADER_CONSUMER_KEY, app_id)
            .with_header(HEADER_SIGNATURE, signature)
            .with_header(HEADER_NONCE, nonce))
    }

    fn generate_nonce() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect()
    }
}

impl RequestSigner for PbsAuthSigner {
    fn sign(
        &self,
        request: HttpRequest,
        credentials: &Credentials,
    ) -> Result<HttpRequest, SigningError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let nonce = Self::generate_nonce();
        Self::sign_with(request, credentials, &timestamp, &nonce)
    }
}

/// Computes the `X-PBSAuth-Signature` value.
///
/// # Errors
///
/// Returns [`SigningError`] if the secret cannot be used as an HMAC key.
pub fn compute_signature(
    method: &str,
    url: &str,
    timestamp: &str,
    app_id: &str,
    nonce: &str,
    secret: &str,
) -> Result<String, SigningError> {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes()).map_err(|e| SigningError {
        reason: e.to_string(),
    })?;
    mac.update(format!("{method}{url}{timestamp}{app_id}{nonce}").as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
