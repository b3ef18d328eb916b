use crate::builder::{build, build_into};
use crate::compat::{String, ToString};
use crate::extract::{
    extract_hash, extract_path, extract_query, extract_scheme, find_host, strip_to_host,
};
use crate::key_value_map::KeyValueMap;

/// A URL split into its five parts.
///
/// `None` marks a part that was not found. A present part may still be
/// empty: `Some("")` for text, an empty map for query and hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Scheme with its delimiter, e.g. `"https://"`
    pub scheme: Option<String>,
    pub host: Option<String>,
    /// Path without its leading `/`
    pub path: Option<String>,
    pub query: Option<KeyValueMap>,
    pub hash: Option<KeyValueMap>,
}

impl ParsedUrl {
    /// Split a URL into its parts. Never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparts::ParsedUrl;
    ///
    /// let parsed = ParsedUrl::parse("https://www.test.com/test/a?query1=1#hash1=1");
    /// assert_eq!(parsed.scheme.as_deref(), Some("https://"));
    /// assert_eq!(parsed.host.as_deref(), Some("www.test.com"));
    /// assert_eq!(parsed.path.as_deref(), Some("test/a"));
    /// ```
    pub fn parse(url: &str) -> Self {
        let host = find_host(url);
        let host_stripped = strip_to_host(url, host.as_ref());

        Self {
            scheme: extract_scheme(url).map(ToString::to_string),
            host: host.map(|range| url[range].to_string()),
            path: extract_path(host_stripped).map(ToString::to_string),
            query: extract_query(url),
            hash: extract_hash(url),
        }
    }

    /// Rebuild the URL string
    pub fn href(&self) -> String {
        build(self)
    }
}

impl core::fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = String::new();
        build_into(&mut buffer, self);
        f.write_str(&buffer)
    }
}

impl core::str::FromStr for ParsedUrl {
    type Err = core::convert::Infallible;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(url))
    }
}

impl From<&str> for ParsedUrl {
    fn from(url: &str) -> Self {
        Self::parse(url)
    }
}
