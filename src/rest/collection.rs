//! Collections exposed by the COVE API and their endpoints.
//!
//! Every collection lives at `host/cove/v1/<collection>/`.
//!
//! # Example
//!
//! ```rust
//! use coveapi::rest::{resolve_endpoint, CollectionType};
//!
//! let endpoint = resolve_endpoint("http://api.example.org", CollectionType::Programs);
//! assert_eq!(endpoint, "http://api.example.org/cove/v1/programs/");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoveError;

/// Default API host.
pub const COVEAPI_HOST: &str = "http://api.pbs.org";
/// Root path segment shared by every endpoint.
pub const COVEAPI_ROOT: &str = "cove";
/// API version path segment.
pub const COVEAPI_VERSION: &str = "v1";

/// A named group of remote resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    /// Program categories.
    Categories,
    /// Curated groups.
    Groups,
    /// Producers.
    Producers,
    /// Programs.
    Programs,
    /// Videos.
    Videos,
    /// Feed of deleted resources, queried with `deleted_since`.
    Graveyard,
}

impl CollectionType {
    /// Every collection, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Categories,
        Self::Groups,
        Self::Producers,
        Self::Programs,
        Self::Videos,
        Self::Graveyard,
    ];

    /// Returns the path segment for this collection.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Categories => "categories",
            Self::Groups => "groups",
            Self::Producers => "producers",
            Self::Programs => "programs",
            Self::Videos => "videos",
            Self::Graveyard => "graveyard",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionType {
    type Err = CoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == s)
            .ok_or_else(|| CoveError::UnknownCollection {
                name: s.to_string(),
            })
    }
}

/// Returns the endpoint URL for `collection` under `host`.
///
/// The result always ends with `/`.
#[must_use]
pub fn resolve_endpoint(host: &str, collection: CollectionType) -> String {
    format!("{host}/{COVEAPI_ROOT}/{COVEAPI_VERSION}/{collection}/")
}
