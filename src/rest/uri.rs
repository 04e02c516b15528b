//! Parsing of COVE resource URIs.
//!
//! Resources returned by the API reference each other with URIs such as
//! `http://api.pbs.org/cove/v1/programs/1001/` or `/cove/v1/programs/1001/`.
//! [`parse_resource_uri`] splits either form into its root, version, object,
//! and optional numeric id. No network access is involved.
//!
//! Every form is parsed as a URL first, so the same path yields the same
//! segments whether it arrives absolute, scheme-relative, or host-relative:
//! dot-segments are resolved and segments keep their percent-encoding.
//!
//! # Example
//!
//! ```rust
//! use coveapi::rest::{parse_resource_uri, CollectionType};
//!
//! let parsed = parse_resource_uri("http://api.pbs.org/cove/v1/programs/1001/").unwrap();
//! assert_eq!(parsed.root, "cove");
//! assert_eq!(parsed.version, "v1");
//! assert_eq!(parsed.object, "programs");
//! assert_eq!(parsed.id, Some(1001));
//! assert_eq!(parsed.collection(), Some(CollectionType::Programs));
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoveError;
use crate::rest::collection::{CollectionType, COVEAPI_HOST, COVEAPI_ROOT, COVEAPI_VERSION};

/// The structural parts of a resource URI path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedResourceUri {
    /// First path segment (`cove`).
    pub root: String,
    /// Second path segment (`v1`).
    pub version: String,
    /// Third path segment, the collection name.
    pub object: String,
    /// Fourth path segment as an integer.
    ///
    /// `None` when the segment is missing or not numeric: collection-level
    /// URIs carry no id and still parse successfully.
    pub id: Option<u64>,
}

impl ParsedResourceUri {
    /// Returns `/root/version/object/`.
    #[must_use]
    pub fn path_prefix(&self) -> String {
        format!("/{}/{}/{}/", self.root, self.version, self.object)
    }

    /// Returns the path prefix followed by `id/` when an id is present.
    #[must_use]
    pub fn resource_path(&self) -> String {
        match self.id {
            Some(id) => format!("{}{id}/", self.path_prefix()),
            None => self.path_prefix(),
        }
    }

    /// Returns the collection named by `object`, if it is a known one.
    #[must_use]
    pub fn collection(&self) -> Option<CollectionType> {
        self.object.parse().ok()
    }

    /// Returns `true` if root and version match the API this client speaks.
    #[must_use]
    pub fn is_current_api(&self) -> bool {
        self.root == COVEAPI_ROOT && self.version == COVEAPI_VERSION
    }
}

impl FromStr for ParsedResourceUri {
    type Err = CoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_resource_uri(s)
    }
}

/// Parses an absolute URI, scheme-relative URI (`//host/...`), or
/// host-relative path into its structural parts.
///
/// # Errors
///
/// Returns [`CoveError::MalformedUri`] if the input is none of those forms,
/// or if its path has fewer than three non-empty leading segments.
pub fn parse_resource_uri(uri: &str) -> Result<ParsedResourceUri, CoveError> {
    let malformed = || CoveError::MalformedUri {
        uri: uri.to_string(),
    };

    let parsed = if uri.starts_with('/') {
        Url::parse(COVEAPI_HOST).and_then(|base| base.join(uri))
    } else if uri.contains("://") {
        Url::parse(uri)
    } else {
        return Err(malformed());
    };
    let url = parsed.map_err(|_| malformed())?;
    let path = url.path();

    // The leading separator yields an empty first element.
    let mut segments = path.split('/').skip(1);
    let mut next_required = || {
        segments
            .next()
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .ok_or_else(malformed)
    };

    let root = next_required()?;
    let version = next_required()?;
    let object = next_required()?;
    let id = segments.next().and_then(|segment| segment.parse().ok());

    Ok(ParsedResourceUri {
        root,
        version,
        object,
        id,
    })
}
