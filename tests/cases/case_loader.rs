/// Case file loader
///
/// Both files are JSON arrays. Plain strings are comments; objects are cases.
/// `null` stands for an absent part, and for a key without a value inside a
/// query or hash object. `lossy` marks inputs whose rebuilt text no longer
/// parses to the same parts.
use serde::Deserialize;
use std::collections::BTreeMap;
use urlparts::KeyValueMap;

pub type Entries = BTreeMap<String, Option<String>>;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum ParseCase {
    Expectation {
        input: String,
        scheme: Option<String>,
        host: Option<String>,
        path: Option<String>,
        query: Option<Entries>,
        hash: Option<Entries>,
        #[serde(default)]
        lossy: bool,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Set,
    Remove,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum EditCase {
    Expectation {
        input: String,
        op: Operation,
        part: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        entries: Option<Entries>,
        #[serde(default)]
        keys: Option<Vec<String>>,
        expected: String,
    },
    /// A comment line (string)
    Comment(String),
}

/// Build a map from case entries
pub fn to_map(entries: &Entries) -> KeyValueMap {
    let mut map = KeyValueMap::new();
    for (key, value) in entries {
        map.insert(key.as_str(), value.clone());
    }
    map
}

pub fn load_parse_cases() -> Vec<ParseCase> {
    serde_json::from_str(include_str!("data/parse_cases.json"))
        .expect("parse_cases.json should be valid")
}

pub fn load_edit_cases() -> Vec<EditCase> {
    serde_json::from_str(include_str!("data/edit_cases.json"))
        .expect("edit_cases.json should be valid")
}
