use crate::compat::String;
use crate::parsed_url::ParsedUrl;

/// Rebuild a URL string from its parts
pub fn build(parsed: &ParsedUrl) -> String {
    let mut buffer = String::with_capacity(estimate_len(parsed));
    build_into(&mut buffer, parsed);
    buffer
}

/// Append the rebuilt URL to `buffer`.
///
/// Present parts are written in the order scheme, host, path, query, hash.
/// The path gets its `/` here; no other delimiters are inserted.
pub fn build_into(buffer: &mut String, parsed: &ParsedUrl) {
    if let Some(scheme) = &parsed.scheme {
        buffer.push_str(scheme);
    }
    if let Some(host) = &parsed.host {
        buffer.push_str(host);
    }
    if let Some(path) = &parsed.path {
        buffer.push('/');
        buffer.push_str(path);
    }
    if let Some(query) = &parsed.query {
        query.serialize_into(buffer, '?');
    }
    if let Some(hash) = &parsed.hash {
        hash.serialize_into(buffer, '#');
    }
}

/// Rough output length, used to pre-allocate
fn estimate_len(parsed: &ParsedUrl) -> usize {
    let text = [&parsed.scheme, &parsed.host, &parsed.path]
        .into_iter()
        .flatten()
        .map(|part| part.len() + 1)
        .sum::<usize>();
    let entries = [&parsed.query, &parsed.hash]
        .into_iter()
        .flatten()
        .flat_map(|map| map.iter())
        .map(|(key, value)| key.len() + value.map_or(1, |value| value.len() + 2))
        .sum::<usize>();
    text + entries
}
