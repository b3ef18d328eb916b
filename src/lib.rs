#![cfg_attr(not(feature = "std"), no_std)]

//! Split a URL into scheme, host, path, query and hash, edit single parts or
//! single query/hash entries, and rebuild the string.
//!
//! The grammar is deliberately small: no ports, no credentials, no
//! percent-decoding. Parts that cannot be found are `None`.
//!
//! ```
//! use urlparts::{Part, parse, remove, set};
//!
//! let url = "https://www.test.com/test/a?query1=1&query2=2#hash1=1";
//!
//! let parsed = parse(url);
//! assert_eq!(parsed.path.as_deref(), Some("test/a"));
//!
//! assert_eq!(
//!     set(url, Part::Query, [("query1", "20")]),
//!     "https://www.test.com/test/a?query1=20&query2=2#hash1=1"
//! );
//! assert_eq!(
//!     remove(url, Part::Scheme, None),
//!     "www.test.com/test/a?query1=1&query2=2#hash1=1"
//! );
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod builder;
mod character_sets;
mod edit;
mod error;
mod extract;
mod helpers;
mod key_value_map;
mod parsed_url;
mod part;

// Public API
pub use builder::{build, build_into};
pub use extract::{
    extract_hash, extract_hash_fragment, extract_host, extract_path, extract_query,
    extract_query_fragment, extract_scheme, find_host, strip_to_host,
};
pub use edit::{PartValue, remove, set};
pub use error::{ParseError, Result};
pub use key_value_map::KeyValueMap;
pub use parsed_url::ParsedUrl;
pub use part::Part;

/// Split a URL into its parts
pub fn parse(url: &str) -> ParsedUrl {
    ParsedUrl::parse(url)
}
