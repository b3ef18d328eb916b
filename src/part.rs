use crate::error::{ParseError, Result};

/// One of the five URL parts this crate recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Scheme,
    Host,
    Path,
    Query,
    Hash,
}

impl Part {
    /// All parts, in the order the builder emits them
    pub const ALL: [Part; 5] = [
        Part::Scheme,
        Part::Host,
        Part::Path,
        Part::Query,
        Part::Hash,
    ];

    /// The lowercase name accepted by `FromStr`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Host => "host",
            Self::Path => "path",
            Self::Query => "query",
            Self::Hash => "hash",
        }
    }

    /// Check if this part holds key/value entries (query or hash)
    pub fn is_keyed(self) -> bool {
        matches!(self, Self::Query | Self::Hash)
    }

    /// The symbol that introduces a keyed part in a URL
    pub fn lead_symbol(self) -> Option<char> {
        match self {
            Self::Query => Some('?'),
            Self::Hash => Some('#'),
            Self::Scheme | Self::Host | Self::Path => None,
        }
    }
}

/// Get the part from its name
fn get_part(name: &str) -> Option<Part> {
    match name {
        "scheme" => Some(Part::Scheme),
        "host" => Some(Part::Host),
        "path" => Some(Part::Path),
        "query" => Some(Part::Query),
        "hash" => Some(Part::Hash),
        _ => None,
    }
}

impl core::str::FromStr for Part {
    type Err = ParseError;

    fn from_str(name: &str) -> Result<Self> {
        get_part(name).ok_or(ParseError::InvalidPartName)
    }
}

impl TryFrom<&str> for Part {
    type Error = ParseError;

    fn try_from(name: &str) -> Result<Self> {
        name.parse()
    }
}

impl core::fmt::Display for Part {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
