//! URL generation, the inverse of matching.

use tracing::debug;

use crate::error::{Result, RouterError};
use crate::params::{is_core, Params, DEFAULT_FORMAT, INDEX, STRUCTURAL_PARAMS};
use crate::pattern::Segment;
use crate::table::RouteDef;

/// Builds a URL for `route` from a fully merged parameter set.
///
/// The pattern is walked from its last segment to its first. Core
/// placeholders holding `index` are dropped until the first concrete segment
/// has been emitted; after that every segment is kept so positions stay
/// meaningful.
///
/// An empty or missing core placeholder is treated as `index`, so an empty
/// `module` collapses like an explicit one.
///
/// Placeholder values are percent-encoded, dots included, so a value never
/// reads back as a format extension.
///
/// Parameters not consumed by the pattern, other than the structural ones,
/// become the query string.
pub fn build_url(route: &RouteDef, url_prefix: &str, mut params: Params) -> Result<String> {
    let mut reversed: Vec<String> = Vec::new();
    let mut dont_ignore = false;

    for segment in route.pattern.segments().iter().rev() {
        match segment {
            Segment::Empty => {}
            Segment::Literal(literal) => {
                reversed.push(urlencoding::encode(literal).into_owned());
                dont_ignore = true;
            }
            Segment::Placeholder(name) => {
                let value = match params.remove(name).filter(|v| !v.is_empty()) {
                    Some(value) => value,
                    None if is_core(name) => INDEX.to_string(),
                    None => return Err(RouterError::MissingParameter(name.clone())),
                };

                if value != INDEX || dont_ignore || !is_core(name) {
                    reversed.push(encode_value(&value));
                    dont_ignore = true;
                }
            }
        }
    }

    let format = params
        .get("format")
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_FORMAT)
        .to_string();

    let path = if reversed.is_empty() {
        INDEX.to_string()
    } else {
        reversed.reverse();
        reversed.join("/")
    };
    let mut url = format!("{url_prefix}/{path}.{format}");

    for key in STRUCTURAL_PARAMS {
        params.remove(key);
    }
    if !params.is_empty() {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter())
            .finish();
        url.push('?');
        url.push_str(&query);
    }

    debug!(route = %route.name, %url, "generated url");
    Ok(url)
}

fn encode_value(value: &str) -> String {
    urlencoding::encode(value).replace('.', "%2E")
}
