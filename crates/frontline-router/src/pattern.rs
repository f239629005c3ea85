//! Route pattern parsing and structural matching.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, RouterError};
use crate::params::is_core;

static PLACEHOLDER_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").expect("placeholder name regex is valid")
});

/// A segment in a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An empty segment left by a leading, trailing or doubled slash.
    Empty,
    /// A literal string segment.
    Literal(String),
    /// A placeholder segment (e.g., `:userId`).
    Placeholder(String),
}

/// A parsed route pattern.
///
/// Segments keep the positions they had in the pattern string so that index
/// `i` lines up with index `i` of a request path split the same way.
///
/// # Example
///
/// ```
/// use frontline_router::Pattern;
///
/// let pattern = Pattern::new("/user/:userId/:action/");
/// assert!(pattern.matches(&["", "user", "42"]));
/// assert!(!pattern.matches(&["", "user"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string.
    ///
    /// Pattern syntax:
    /// - `/admin` - Literal segment
    /// - `/:module` - Placeholder bound to the `module` parameter
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .map(|part| {
                if part.is_empty() {
                    Segment::Empty
                } else if let Some(name) = part.strip_prefix(':') {
                    Segment::Placeholder(name.to_string())
                } else {
                    Segment::Literal(part.to_string())
                }
            })
            .collect();

        Self {
            source: pattern.to_string(),
            segments,
        }
    }

    /// Parses a pattern string and rejects placeholders with unusable names.
    pub fn parse(pattern: &str) -> Result<Self> {
        let parsed = Self::new(pattern);
        for name in parsed.placeholders() {
            if !PLACEHOLDER_NAME.is_match(name) {
                return Err(RouterError::InvalidConfig(format!(
                    "invalid placeholder {name:?} in pattern {pattern:?}"
                )));
            }
        }
        Ok(parsed)
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the parsed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the placeholder names in pattern order.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Checks whether a split request path structurally fits this pattern.
    ///
    /// Core placeholders may be missing from the path. Any other placeholder
    /// needs a non-empty segment at its index, and literals must be equal.
    pub fn matches(&self, path: &[&str]) -> bool {
        self.segments
            .iter()
            .enumerate()
            .all(|(i, segment)| match segment {
                Segment::Empty => true,
                Segment::Placeholder(name) if is_core(name) => true,
                Segment::Placeholder(_) => path.get(i).is_some_and(|part| !part.is_empty()),
                Segment::Literal(literal) => path.get(i).is_some_and(|part| part == literal),
            })
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_keep_positions() {
        let pattern = Pattern::new("/admin/:module/");
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Empty,
                Segment::Literal("admin".to_string()),
                Segment::Placeholder("module".to_string()),
                Segment::Empty,
            ]
        );
    }

    #[test]
    fn test_core_placeholders_are_optional() {
        let pattern = Pattern::new("/:module/:controller/:action/");
        assert!(pattern.matches(&[""]));
        assert!(pattern.matches(&["", "users"]));
        assert!(pattern.matches(&["", "users", "list", "show", "extra"]));
    }

    #[test]
    fn test_required_placeholder() {
        let pattern = Pattern::new("/user/:userId");
        assert!(pattern.matches(&["", "user", "7"]));
        assert!(!pattern.matches(&["", "user"]));
        assert!(!pattern.matches(&["", "user", ""]));
    }

    #[test]
    fn test_literal_is_case_sensitive() {
        let pattern = Pattern::new("/admin/:module");
        assert!(pattern.matches(&["", "admin"]));
        assert!(!pattern.matches(&["", "Admin"]));
        assert!(!pattern.matches(&[""]));
    }

    #[test]
    fn test_placeholder_names() {
        let pattern = Pattern::new("/user/:userId/:userName/:action/");
        let names: Vec<_> = pattern.placeholders().collect();
        assert_eq!(names, vec!["userId", "userName", "action"]);
    }

    #[test]
    fn test_parse_rejects_bad_placeholder() {
        assert!(Pattern::parse("/user/:").is_err());
        assert!(Pattern::parse("/user/:user-id").is_err());
        assert!(Pattern::parse("/user/:user_id").is_ok());
    }
}
