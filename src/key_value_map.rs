use crate::compat::{String, ToString, Vec};

/// Key/value entries of a query string or hash fragment.
///
/// Each key appears once and maps to `Some(value)` (`k=v`, value may be
/// empty) or `None` (`k` with no `=`). Entries keep their insertion order, so
/// serialization is deterministic, but equality ignores order.
#[derive(Debug, Clone, Default, Eq)]
pub struct KeyValueMap {
    entries: Vec<(String, Option<String>)>,
}

impl KeyValueMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse a `&`-delimited fragment (without its leading `?` or `#`).
    ///
    /// Each `&`-separated token is split on its first `=`. An empty token is
    /// the empty key with no value, so an empty fragment yields one entry.
    /// When a key repeats, its first occurrence wins.
    pub fn parse(fragment: &str) -> Self {
        let mut map = Self::new();

        for token in fragment.split('&') {
            let (key, value) = match token.split_once('=') {
                Some((key, value)) => (key, Some(value)),
                None => (token, None),
            };
            if !map.contains_key(key) {
                map.entries
                    .push((key.to_string(), value.map(ToString::to_string)));
            }
        }

        map
    }

    /// Serialize with a leading symbol (`?` or `#`).
    /// An empty map still yields the symbol.
    pub fn serialize(&self, lead: char) -> String {
        let mut result = String::new();
        self.serialize_into(&mut result, lead);
        result
    }

    /// Append the serialized form, led by `lead`, to `buffer`
    pub fn serialize_into(&self, buffer: &mut String, lead: char) {
        buffer.push(lead);
        self.write_pairs(buffer);
    }

    fn write_pairs(&self, buffer: &mut String) {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                buffer.push('&');
            }
            buffer.push_str(key);
            if let Some(value) = value {
                buffer.push('=');
                buffer.push_str(value);
            }
        }
    }

    /// Look up a key.
    /// `None` means the key is absent, `Some(None)` that it has no value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Set a key to a value, overwriting in place or appending a new entry.
    /// Returns the previous value when the key existed.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Option<String>,
    ) -> Option<Option<String>> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Set a key with no value (serialized as the bare key)
    pub fn insert_key(&mut self, key: impl Into<String>) -> Option<Option<String>> {
        self.insert(key, None)
    }

    /// Delete a key, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Shallow merge: entries of `other` overwrite same keys in place,
    /// new keys are appended in `other`'s order.
    pub fn merge(&mut self, other: KeyValueMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for KeyValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

/// Serialized pairs without a leading symbol
impl core::fmt::Display for KeyValueMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut pairs = String::new();
        self.write_pairs(&mut pairs);
        f.write_str(&pairs)
    }
}

impl From<&str> for KeyValueMap {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for KeyValueMap {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for KeyValueMap {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeyValueMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for KeyValueMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, Some(value.into()));
        }
    }
}
