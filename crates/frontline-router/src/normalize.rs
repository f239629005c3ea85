//! Request path normalization.

use crate::params::DEFAULT_FORMAT;

/// Extensions that all render as HTML.
const HTML_EXTENSIONS: [&str; 3] = ["html", "htm", "php"];

/// A request path with the mount prefix, query string and format extension
/// taken off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPath {
    /// Path left for route matching.
    pub path: String,
    /// Output format inferred from the extension.
    pub format: String,
    /// Raw query string, without the leading `?`.
    pub query: Option<String>,
}

impl NormalizedPath {
    /// Splits the path on `/`, keeping empty segments so indices line up with
    /// pattern segments.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').collect()
    }
}

/// Normalizes a raw request path.
///
/// Everything up to and including the first occurrence of `url_prefix` is
/// removed, the query string and fragment are split off, and a trailing
/// `.<extension>` on the last segment becomes the format.
///
/// # Example
///
/// ```
/// use frontline_router::normalize;
///
/// let normalized = normalize("/app/users/list/show.json?page=2", "/app");
/// assert_eq!(normalized.path, "/users/list/show");
/// assert_eq!(normalized.format, "json");
/// assert_eq!(normalized.query.as_deref(), Some("page=2"));
/// ```
pub fn normalize(raw: &str, url_prefix: &str) -> NormalizedPath {
    let unprefixed = strip_prefix(raw, url_prefix);

    let without_fragment = unprefixed.split('#').next().unwrap_or_default();
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (without_fragment, None),
    };

    let (path, format) = strip_extension(path);

    NormalizedPath {
        path: path.to_string(),
        format,
        query,
    }
}

fn strip_prefix<'a>(raw: &'a str, url_prefix: &str) -> &'a str {
    if url_prefix.is_empty() {
        return raw;
    }
    raw.find(url_prefix)
        .map_or(raw, |start| &raw[start + url_prefix.len()..])
}

fn strip_extension(path: &str) -> (&str, String) {
    let last_start = path.rfind('/').map_or(0, |i| i + 1);
    let last = &path[last_start..];

    let Some(dot) = last.find('.') else {
        return (path, DEFAULT_FORMAT.to_string());
    };

    let extension = &last[dot + 1..];
    let format = if extension.is_empty() || HTML_EXTENSIONS.contains(&extension) {
        DEFAULT_FORMAT.to_string()
    } else {
        extension.to_string()
    };

    (&path[..last_start + dot], format)
}
