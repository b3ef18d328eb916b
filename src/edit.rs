use log::debug;

use crate::compat::{String, ToString};
use crate::key_value_map::KeyValueMap;
use crate::parsed_url::ParsedUrl;
use crate::part::Part;

/// A value handed to [`set`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    /// Replaces scheme, host or path. For query and hash it is decoded as a
    /// fragment (a leading `?` or `#` is dropped) and merged.
    Text(String),
    /// Merged into query or hash. For the other parts it is stored as its
    /// serialized `k=v&k` text.
    Entries(KeyValueMap),
}

impl PartValue {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Entries(map) => map.to_string(),
        }
    }

    fn into_entries(self, lead: Option<char>) -> KeyValueMap {
        match self {
            Self::Entries(map) => map,
            Self::Text(text) => {
                let fragment = match lead {
                    Some(lead) => text.strip_prefix(lead).unwrap_or(text.as_str()),
                    None => text.as_str(),
                };
                KeyValueMap::parse(fragment)
            }
        }
    }
}

impl From<&str> for PartValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PartValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<KeyValueMap> for PartValue {
    fn from(map: KeyValueMap) -> Self {
        Self::Entries(map)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for PartValue {
    fn from(pairs: [(K, V); N]) -> Self {
        Self::Entries(KeyValueMap::from(pairs))
    }
}

/// Mutable access to one part's storage
enum Slot<'a> {
    Text(&'a mut Option<String>),
    Entries(&'a mut Option<KeyValueMap>),
}

impl ParsedUrl {
    fn slot(&mut self, part: Part) -> Slot<'_> {
        match part {
            Part::Scheme => Slot::Text(&mut self.scheme),
            Part::Host => Slot::Text(&mut self.host),
            Part::Path => Slot::Text(&mut self.path),
            Part::Query => Slot::Entries(&mut self.query),
            Part::Hash => Slot::Entries(&mut self.hash),
        }
    }

    /// Set a part.
    ///
    /// Scheme, host and path are replaced; one leading `/` is dropped from a
    /// new path. Query and hash entries are merged into the existing map,
    /// which is created when the part was absent.
    pub fn set(&mut self, part: Part, value: impl Into<PartValue>) {
        let value = value.into();
        match self.slot(part) {
            Slot::Text(field) => {
                debug!("replacing {part}");
                let mut text = value.into_text();
                if part == Part::Path && text.starts_with('/') {
                    text.remove(0);
                }
                *field = Some(text);
            }
            Slot::Entries(field) => {
                let entries = value.into_entries(part.lead_symbol());
                debug!("merging {} entries into {part}", entries.len());
                field.get_or_insert_with(KeyValueMap::new).merge(entries);
            }
        }
    }

    /// Drop a whole part. Removing an absent part does nothing.
    pub fn remove_part(&mut self, part: Part) {
        debug!("removing {part}");
        match self.slot(part) {
            Slot::Text(field) => *field = None,
            Slot::Entries(field) => *field = None,
        }
    }

    /// Drop single keys from query or hash, leaving the other entries.
    /// Missing keys are ignored. For scheme, host and path the whole part
    /// is dropped.
    pub fn remove_keys(&mut self, part: Part, keys: &[&str]) {
        if !part.is_keyed() {
            self.remove_part(part);
            return;
        }
        if let Slot::Entries(Some(map)) = self.slot(part) {
            debug!("removing {} keys from {part}", keys.len());
            for key in keys {
                map.remove(key);
            }
        } else {
            debug!("{part} is absent, nothing to remove");
        }
    }
}

/// Set one part of `url` and return the rebuilt URL.
///
/// # Examples
///
/// ```
/// use urlparts::{Part, set};
///
/// assert_eq!(
///     set("www.test.com?a=1", Part::Scheme, "https://"),
///     "https://www.test.com?a=1"
/// );
/// assert_eq!(
///     set("www.test.com?a=1", Part::Query, [("b", "2")]),
///     "www.test.com?a=1&b=2"
/// );
/// ```
pub fn set(url: &str, part: Part, value: impl Into<PartValue>) -> String {
    let mut parsed = ParsedUrl::parse(url);
    parsed.set(part, value);
    parsed.href()
}

/// Remove a part of `url`, or only the given keys of its query or hash,
/// and return the rebuilt URL.
///
/// # Examples
///
/// ```
/// use urlparts::{Part, remove};
///
/// assert_eq!(remove("www.test.com?a=1&b=2", Part::Query, Some(&["a"])), "www.test.com?b=2");
/// assert_eq!(remove("www.test.com?a=1&b=2", Part::Query, None), "www.test.com");
/// ```
pub fn remove(url: &str, part: Part, keys: Option<&[&str]>) -> String {
    let mut parsed = ParsedUrl::parse(url);
    match keys {
        Some(keys) => parsed.remove_keys(part, keys),
        None => parsed.remove_part(part),
    }
    parsed.href()
}
