//! First-match-wins route selection.

use tracing::{debug, trace};

use crate::table::{RouteDef, RouteTable};

/// Finds the first route, in table order, whose pattern fits the split path.
///
/// Specificity plays no part: an earlier, looser route shadows a later,
/// stricter one.
pub fn match_route<'t>(table: &'t RouteTable, segments: &[&str]) -> Option<&'t RouteDef> {
    let found = table.iter().find(|route| {
        let hit = route.pattern.matches(segments);
        trace!(route = %route.name, pattern = %route.pattern, hit, "checked route");
        hit
    });

    if let Some(route) = found {
        debug!(route = %route.name, "matched route");
    }
    found
}
