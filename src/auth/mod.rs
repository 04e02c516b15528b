//! Authentication for the COVE API.
//!
//! # Overview
//!
//! - [`Credentials`]: The app id and secret issued for API access
//! - [`RequestSigner`]: The seam through which requests are authenticated
//! - [`PbsAuthSigner`]: The default `X-PBSAuth` HMAC-SHA1 signer
//!
//! A custom [`RequestSigner`] can be installed on a
//! [`Connection`](crate::Connection) with
//! [`with_signer`](crate::Connection::with_signer).

mod credentials;
mod signer;

pub use credentials::Credentials;
pub use signer::{
    compute_signature, PbsAuthSigner, RequestSigner, SigningError, HEADER_CONSUMER_KEY,
    HEADER_NONCE, HEADER_SIGNATURE, HEADER_TIMESTAMP,
};
