#![allow(dead_code)]

use std::sync::Arc;

use frontline_router::{Params, RouteTable, Router};

/// The admin/user/default table used across the integration tests.
pub fn demo_table() -> Arc<RouteTable> {
    Arc::new(
        RouteTable::new()
            .route(
                "admin",
                "/admin/:module/:controller/:action/",
                Params::new().set("prefix", "admin"),
            )
            .route(
                "user",
                "/user/:userId/:userName/:action/",
                Params::new().set("module", "users").set("controller", "details"),
            )
            .route("default", "/:module/:controller/:action", Params::new()),
    )
}

pub fn route(path: &str) -> Router {
    Router::for_request(demo_table(), "", path)
        .unwrap_or_else(|e| panic!("Failed to route: {path}\nError: {e:?}"))
}

pub fn route_with_prefix(prefix: &str, path: &str) -> Router {
    Router::for_request(demo_table(), prefix, path)
        .unwrap_or_else(|e| panic!("Failed to route: {path}\nError: {e:?}"))
}

pub fn params(pairs: &[(&str, &str)]) -> Params {
    pairs.iter().copied().collect()
}
