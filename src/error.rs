/// Errors reported by the part-name lookup.
///
/// Parsing itself never fails: a part that cannot be found is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The name is not one of `scheme`, `host`, `path`, `query` or `hash`
    InvalidPartName,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidPartName => "Invalid URL part name",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for part-name lookups
pub type Result<T> = core::result::Result<T, ParseError>;
