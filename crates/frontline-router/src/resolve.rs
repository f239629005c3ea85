//! Parameter resolution for a matched route.

use crate::error::{Result, RouterError};
use crate::params::Params;
use crate::pattern::Segment;
use crate::table::RouteDef;

/// Builds the parameter mapping for a matched route.
///
/// Layers, lowest precedence first: framework defaults (with `format`), the
/// route's declared defaults, then values taken from the path. A placeholder
/// with no path segment falls back to the framework default, not the route
/// default.
pub fn resolve(route: &RouteDef, segments: &[&str], format: &str) -> Result<Params> {
    let mut params = Params::framework_defaults(format);
    params.extend_from(&route.defaults);

    for (i, segment) in route.pattern.segments().iter().enumerate() {
        let Segment::Placeholder(name) = segment else {
            continue;
        };

        let value = match segments.get(i).filter(|part| !part.is_empty()) {
            Some(part) => decode_segment(part)?,
            None => match Params::framework_default(name) {
                Some(fallback) => fallback.to_string(),
                None => continue,
            },
        };

        let value = match value.find('?') {
            Some(cut) => value[..cut].to_string(),
            None => value,
        };
        params.insert(name.as_str(), value);
    }

    Ok(params)
}

/// Percent-decodes a path segment, treating `+` as a space.
pub fn decode_segment(segment: &str) -> Result<String> {
    let bytes = segment.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(RouterError::PathDecoding {
                    segment: segment.to_string(),
                    reason: format!("malformed escape at byte {i}"),
                });
            }
        }
    }

    let spaced = segment.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| RouterError::PathDecoding {
            segment: segment.to_string(),
            reason: e.to_string(),
        })
}
