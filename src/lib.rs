//! # COVE API Rust Client
//!
//! A Rust client for the PBS COVE media-catalog API: programs, categories,
//! groups, producers, videos, and the graveyard feed of deleted resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`Connection`]: credentials and host, with one [`Requestor`] per collection
//! - [`Requestor`]: `get`, `filter`, and `deleted_since` against one collection
//! - Canonical, deterministically ordered query strings via [`rest::canonicalize`]
//! - `X-PBSAuth` request signing via [`auth::PbsAuthSigner`]
//! - Resource URI parsing via [`rest::parse_resource_uri`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coveapi::Connection;
//! use coveapi::rest::{FilterParams, ResourceLocator};
//!
//! let connection = Connection::connect("my-app-id", "my-secret", None)?;
//!
//! // A single program by id
//! let program = connection
//!     .programs()
//!     .get(ResourceLocator::Id(1001), &FilterParams::new())
//!     .await?;
//!
//! // Videos matching a filter
//! let params = FilterParams::new()
//!     .with("filter_program", 1001)
//!     .with("order_by", "-airdate");
//! let videos = connection.videos().filter(&params).await?;
//!
//! // Follow a resource URI returned by the API
//! let locator: ResourceLocator = "/cove/v1/programs/1001/".parse()?;
//! let same_program = connection.programs().get(locator, &FilterParams::new()).await?;
//! ```
//!
//! ## Parsing Resource URIs
//!
//! ```rust
//! use coveapi::rest::parse_resource_uri;
//!
//! let parsed = parse_resource_uri("/cove/v1/videos/42/").unwrap();
//! assert_eq!(parsed.object, "videos");
//! assert_eq!(parsed.id, Some(42));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: `Connection` and `Requestor` are `Send + Sync`
//! - **Read-only**: only GET requests; no retry, caching, or pagination
//! - **Pluggable collaborators**: signer and transport sit behind traits

pub mod auth;
pub mod clients;
pub mod config;
mod connection;
pub mod error;
pub mod rest;

pub use auth::{Credentials, PbsAuthSigner, RequestSigner, SigningError};
pub use clients::{HttpClient, HttpError, HttpRequest, HttpResponseError, Transport};
pub use config::{AppId, AppSecret, CoveConfig, CoveConfigBuilder, HostUrl};
pub use connection::Connection;
pub use error::{ConfigError, CoveError};
pub use rest::{
    parse_resource_uri, CollectionType, FilterParams, FilterValue, ParsedResourceUri,
    Requestor, ResourceLocator, SpaceEncoding,
};
