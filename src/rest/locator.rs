//! Resource locators accepted by [`Requestor::get`](crate::Requestor::get).

use std::fmt;
use std::str::FromStr;

use crate::error::CoveError;

/// Scheme prefixes recognized as absolute URIs.
const ABSOLUTE_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Identifies a single resource to fetch.
///
/// Classification is purely syntactic: an integer is an id, a string with an
/// `http://` or `https://` prefix is an absolute URI, and a string starting
/// with `/` is a path relative to the API host. Any other string is rejected.
///
/// # Example
///
/// ```rust
/// use coveapi::rest::ResourceLocator;
///
/// assert_eq!(ResourceLocator::from(1001), ResourceLocator::Id(1001));
///
/// let path: ResourceLocator = "/cove/v1/programs/1001/".parse().unwrap();
/// assert!(matches!(path, ResourceLocator::RelativePath(_)));
///
/// assert!("programs".parse::<ResourceLocator>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceLocator {
    /// A resource id under the requestor's endpoint.
    Id(u64),
    /// A fully qualified URI, used verbatim.
    AbsoluteUri(String),
    /// A path appended to the API host.
    RelativePath(String),
}

impl ResourceLocator {
    /// Resolves the locator to a concrete URL.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The collection endpoint, ending with `/`
    /// * `host` - The API host, without a trailing `/`
    ///
    /// # Errors
    ///
    /// Returns [`CoveError::MalformedLocator`] for an id of `0`.
    pub fn resolve(&self, endpoint: &str, host: &str) -> Result<String, CoveError> {
        match self {
            Self::Id(0) => Err(CoveError::MalformedLocator {
                locator: "0".to_string(),
            }),
            Self::Id(id) => Ok(format!("{endpoint}{id}/")),
            Self::AbsoluteUri(uri) => Ok(uri.clone()),
            Self::RelativePath(path) => Ok(format!("{host}{path}")),
        }
    }
}

impl From<u64> for ResourceLocator {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl FromStr for ResourceLocator {
    type Err = CoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if ABSOLUTE_PREFIXES.iter().any(|prefix| s.starts_with(prefix)) {
            Ok(Self::AbsoluteUri(s.to_string()))
        } else if s.starts_with('/') {
            Ok(Self::RelativePath(s.to_string()))
        } else {
            Err(CoveError::MalformedLocator {
                locator: s.to_string(),
            })
        }
    }
}

impl TryFrom<&str> for ResourceLocator {
    type Error = CoveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<String> for ResourceLocator {
    type Error = CoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::AbsoluteUri(value) | Self::RelativePath(value) => f.write_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "http://api.example.org";
    const ENDPOINT: &str = "http://api.example.org/cove/v1/programs/";

    #[test]
    fn test_id_resolves_under_endpoint() {
        let url = ResourceLocator::from(1001).resolve(ENDPOINT, HOST).unwrap();
        assert_eq!(url, "http://api.example.org/cove/v1/programs/1001/");
    }

    #[test]
    fn test_zero_id_is_rejected() {
        let result = ResourceLocator::Id(0).resolve(ENDPOINT, HOST);
        assert!(matches!(result, Err(CoveError::MalformedLocator { .. })));
    }

    #[test]
    fn test_absolute_uri_is_used_verbatim() {
        let locator: ResourceLocator = "http://other.host/path".parse().unwrap();
        assert_eq!(locator.resolve(ENDPOINT, HOST).unwrap(), "http://other.host/path");

        let locator: ResourceLocator = "https://secure.host/cove/v1/videos/5/".parse().unwrap();
        assert_eq!(
            locator.resolve(ENDPOINT, HOST).unwrap(),
            "https://secure.host/cove/v1/videos/5/"
        );
    }

    #[test]
    fn test_relative_path_is_joined_to_host() {
        let locator: ResourceLocator = "/cove/v1/programs/1001".parse().unwrap();
        assert_eq!(
            locator.resolve(ENDPOINT, HOST).unwrap(),
            "http://api.example.org/cove/v1/programs/1001"
        );
    }

    #[test]
    fn test_unrecognized_strings_are_rejected() {
        for input in ["", "programs/1001", "1001", "ftp://host/x", "api.pbs.org/cove"] {
            let result = input.parse::<ResourceLocator>();
            assert!(
                matches!(result, Err(CoveError::MalformedLocator { ref locator }) if locator == input),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_try_from_string_classifies() {
        let locator = ResourceLocator::try_from(String::from("/cove/v1/groups/")).unwrap();
        assert_eq!(locator, ResourceLocator::RelativePath("/cove/v1/groups/".to_string()));
    }

    #[test]
    fn test_display_echoes_input() {
        assert_eq!(ResourceLocator::Id(7).to_string(), "7");
        assert_eq!(
            ResourceLocator::RelativePath("/cove/v1/videos/".to_string()).to_string(),
            "/cove/v1/videos/"
        );
    }
}
