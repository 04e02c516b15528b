//! Request resolution and canonicalization for the COVE API.
//!
//! # Overview
//!
//! - [`CollectionType`] and [`resolve_endpoint`]: collection endpoints
//! - [`FilterParams`], [`canonicalize`], [`SpaceEncoding`]: canonical query strings
//! - [`ResourceLocator`]: id, absolute URI, or relative path to fetch
//! - [`parse_resource_uri`]: the inverse, splitting a URI into its parts
//! - [`Requestor`]: the per-collection request façade
//!
//! # Example
//!
//! ```rust
//! use coveapi::rest::{canonicalize, resolve_endpoint, CollectionType, FilterParams, SpaceEncoding};
//!
//! let endpoint = resolve_endpoint("http://api.pbs.org", CollectionType::Videos);
//! let params = FilterParams::new().with("b", "2").with("a", "1");
//!
//! assert_eq!(
//!     canonicalize(&endpoint, &params, SpaceEncoding::Plus),
//!     "http://api.pbs.org/cove/v1/videos/?a=1&b=2"
//! );
//! ```

mod canonical;
mod collection;
mod locator;
mod requestor;
mod uri;

pub use canonical::{canonicalize, FilterParams, FilterValue, SpaceEncoding};
pub use collection::{
    resolve_endpoint, CollectionType, COVEAPI_HOST, COVEAPI_ROOT, COVEAPI_VERSION,
};
pub use locator::ResourceLocator;
pub use requestor::{Requestor, DELETED_SINCE_PARAM};
pub use uri::{parse_resource_uri, ParsedResourceUri};
