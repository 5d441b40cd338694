//! URL helper functions

use percent_encoding::{AsciiSet, CONTROLS};

/// Characters that must be escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?');

/// Whether a path already carries a scheme (`https://...`)
pub fn is_absolute(path: &str) -> bool {
    path.contains("://")
}

/// Join a relative path onto an origin, normalizing the slash between them
///
/// # Examples
/// ```ignore
/// join_origin("https://cdn.example.com", "/img/a.png") // -> "https://cdn.example.com/img/a.png"
/// ```
pub fn join_origin(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", origin, path)
}

/// Percent-encode a slug for use as a URL path segment
pub fn encode_slug(slug: &str) -> String {
    percent_encoding::utf8_percent_encode(slug, PATH_SEGMENT).to_string()
}
