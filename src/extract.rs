//! Part extractors.
//!
//! Each extractor scans the raw text on its own; they may read overlapping
//! characters. Path extraction is the exception: it takes the text returned
//! by [`strip_to_host`], so the host has to be located first.

use core::ops::Range;

use log::trace;

use crate::helpers::{
    find_authority_marker, find_scheme_delimiter, host_end, path_end, prune_fragment,
};
use crate::key_value_map::KeyValueMap;

/// Locate the host as a byte range of `text`.
///
/// After the first `:/` (with an optional second `/`) the host runs to the
/// first `/`, `?` or `:`. When that run never meets a terminator but the
/// second slash was there, the slash itself ends an empty host. Without a
/// `:/` match the run starts at the beginning of the text. A run that never
/// meets a terminator is no host at all.
pub fn find_host(text: &str) -> Option<Range<usize>> {
    if let Some(pos) = find_authority_marker(text) {
        let after = pos + 2;
        if text.as_bytes().get(after) == Some(&b'/') {
            let start = after + 1;
            return Some(match host_end(&text[start..]) {
                Some(len) => start..start + len,
                None => after..after,
            });
        }
        if let Some(len) = host_end(&text[after..]) {
            return Some(after..after + len);
        }
    }

    let Some(len) = host_end(text) else {
        trace!("no host terminator in {text:?}");
        return None;
    };
    Some(0..len)
}

/// Extract the host text
pub fn extract_host(text: &str) -> Option<&str> {
    find_host(text).map(|range| &text[range])
}

/// The text from the first byte of the matched host onward.
/// Without a host the text is returned unchanged.
pub fn strip_to_host<'a>(text: &'a str, host: Option<&Range<usize>>) -> &'a str {
    host.map_or(text, |range| &text[range.start..])
}

/// Extract the scheme including its `://` delimiter
pub fn extract_scheme(text: &str) -> Option<&str> {
    let Some(pos) = find_scheme_delimiter(text) else {
        trace!("no scheme delimiter in {text:?}");
        return None;
    };
    Some(&text[..pos + 3])
}

/// Extract the raw query fragment: after the first `?`, up to `#` or the end
pub fn extract_query_fragment(text: &str) -> Option<&str> {
    let Some(pos) = memchr::memchr(b'?', text.as_bytes()) else {
        trace!("no query in {text:?}");
        return None;
    };
    let (query, _) = prune_fragment(&text[pos + 1..]);
    Some(query)
}

/// Extract and decode the query
pub fn extract_query(text: &str) -> Option<KeyValueMap> {
    extract_query_fragment(text).map(KeyValueMap::parse)
}

/// Extract the raw hash fragment: everything after the first `#`
pub fn extract_hash_fragment(text: &str) -> Option<&str> {
    let (_, fragment) = prune_fragment(text);
    if fragment.is_none() {
        trace!("no hash in {text:?}");
    }
    fragment
}

/// Extract and decode the hash
pub fn extract_hash(text: &str) -> Option<KeyValueMap> {
    extract_hash_fragment(text).map(KeyValueMap::parse)
}

/// Extract the path from host-stripped text.
///
/// The path follows the first `/` and stops at the first `?`, `.`, `#`, or
/// the end of the text. It is returned without the leading slash.
pub fn extract_path(host_stripped: &str) -> Option<&str> {
    let Some(pos) = memchr::memchr(b'/', host_stripped.as_bytes()) else {
        trace!("no path in {host_stripped:?}");
        return None;
    };
    let rest = &host_stripped[pos + 1..];
    Some(&rest[..path_end(rest)])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_host_after_scheme() {
        assert_eq!(
            extract_host("https://www.test.com/test/a?query1=1"),
            Some("www.test.com")
        );
        assert_eq!(extract_host("ftp://files.test.com:21/x"), Some("files.test.com"));
        assert_eq!(extract_host("http://www.test.com?a=1"), Some("www.test.com"));
    }

    #[test]
    fn test_unterminated_host_after_double_slash_is_empty() {
        // The second slash ends an empty host run
        assert_eq!(find_host("https://www.test.com"), Some(7..7));
        assert_eq!(extract_host("https://www.test.com#top"), Some(""));
    }

    #[test]
    fn test_host_with_single_slash_delimiter() {
        assert_eq!(extract_host("news:/www.test.com/a"), Some("www.test.com"));
        // Unterminated after `:/`, so the run from the start is used
        assert_eq!(extract_host("news:/www.test.com"), Some("news"));
    }

    #[test]
    fn test_host_without_scheme() {
        assert_eq!(extract_host("www.test.com/test"), Some("www.test.com"));
        assert_eq!(extract_host("www.test.com?a=1"), Some("www.test.com"));
        assert_eq!(extract_host("www.test.com:8080"), Some("www.test.com"));
        assert_eq!(extract_host("mailto:someone"), Some("mailto"));
    }

    #[test]
    fn test_host_runs_through_fragment() {
        assert_eq!(extract_host("www.test.com#a/b"), Some("www.test.com#a"));
    }

    #[test]
    fn test_no_host_without_terminator() {
        assert_eq!(extract_host("www.test.com"), None);
        assert_eq!(extract_host("www.test.com#top"), None);
        assert_eq!(extract_host(""), None);
    }

    #[test]
    fn test_empty_host() {
        assert_eq!(extract_host("file:///etc/hosts"), Some(""));
        assert_eq!(extract_host("?a=1"), Some(""));
    }

    #[test]
    fn test_host_range() {
        let text = "https://www.test.com/test";
        let range = find_host(text);
        assert_eq!(range, Some(8..20));
        assert_eq!(strip_to_host(text, range.as_ref()), "www.test.com/test");
        assert_eq!(strip_to_host(text, None), text);
    }

    #[test]
    fn test_scheme() {
        assert_eq!(extract_scheme("https://www.test.com"), Some("https://"));
        assert_eq!(extract_scheme("git+ssh://host/repo"), Some("git+ssh://"));
        assert_eq!(extract_scheme("www.test.com/test"), None);
        assert_eq!(extract_scheme("mailto:someone"), None);
        assert_eq!(
            extract_scheme("https://a.com/?next=http://b.com"),
            Some("https://")
        );
    }

    #[test]
    fn test_query() {
        let query = extract_query("https://www.test.com/a?query1=1&query2=2#hash1=1");
        assert_eq!(query, Some(KeyValueMap::from([("query1", "1"), ("query2", "2")])));
        assert_eq!(extract_query_fragment("www.test.com/?#x"), Some(""));
        assert_eq!(extract_query("www.test.com/test#hash"), None);
    }

    #[test]
    fn test_hash() {
        let hash = extract_hash("www.test.com/test#hash").unwrap();
        assert_eq!(hash.get("hash"), Some(None));
        assert_eq!(extract_hash_fragment("www.test.com/test#"), Some(""));
        assert_eq!(extract_hash_fragment("a#b#c"), Some("b#c"));
        assert_eq!(extract_hash("www.test.com/test"), None);
    }

    #[test]
    fn test_path() {
        assert_eq!(extract_path("www.test.com/test/a?query1=1"), Some("test/a"));
        assert_eq!(extract_path("www.test.com/test"), Some("test"));
        assert_eq!(extract_path("www.test.com/test#hash"), Some("test"));
        assert_eq!(extract_path("www.test.com/index.html"), Some("index"));
        assert_eq!(extract_path("www.test.com/"), Some(""));
        assert_eq!(extract_path("www.test.com"), None);
    }

    #[test]
    fn test_path_requires_stripped_text() {
        let text = "https://www.test.com/test";
        let host = find_host(text);
        assert_eq!(extract_path(strip_to_host(text, host.as_ref())), Some("test"));
        // On the raw text the scheme's slashes are mistaken for the path
        assert_eq!(extract_path(text), Some("/www"));
    }

    #[test]
    fn test_path_without_host_reads_raw_text() {
        let text = "www.test.com#a/b";
        assert_eq!(strip_to_host(text, find_host(text).as_ref()), text);
        assert_eq!(extract_path(text), Some("b"));

        let text = "no-host";
        assert_eq!(find_host(text), None);
        assert_eq!(extract_path(strip_to_host(text, None)), None);
    }
}
