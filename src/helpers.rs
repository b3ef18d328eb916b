use crate::character_sets::{is_host_delimiter, is_path_delimiter};

/// Position of the first `://` in the input
pub fn find_scheme_delimiter(input: &str) -> Option<usize> {
    memchr::memmem::find(input.as_bytes(), b"://")
}

/// Position of the first `:/` in the input (the second slash of `://` is optional)
pub fn find_authority_marker(input: &str) -> Option<usize> {
    memchr::memmem::find(input.as_bytes(), b":/")
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Offset of the first host delimiter, if the input has one
pub fn host_end(input: &str) -> Option<usize> {
    input.bytes().position(is_host_delimiter)
}

/// Offset of the first path delimiter, or the input length
pub fn path_end(input: &str) -> usize {
    input
        .bytes()
        .position(is_path_delimiter)
        .unwrap_or(input.len())
}
