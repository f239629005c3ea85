//! Per-request routing state.

use std::sync::Arc;

use tracing::{debug, error};

use crate::error::{Result, RouterError};
use crate::matcher::match_route;
use crate::normalize::{normalize, NormalizedPath};
use crate::params::{Params, DEFAULT_FORMAT};
use crate::resolve::resolve;
use crate::table::{RouteTable, DEFAULT_ROUTE};
use crate::url::build_url;

/// Resolves one request against a shared route table and builds URLs
/// relative to that request.
///
/// A router is cheap to create: construct one per request from the
/// application's `Arc<RouteTable>` and drop it with the request.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use frontline_router::{Params, RouteTable, Router};
///
/// let table = Arc::new(RouteTable::new().route(
///     "user",
///     "/user/:userId/:action/",
///     Params::new().set("module", "users"),
/// ));
///
/// let router = Router::for_request(table, "", "/user/42/edit.html").unwrap();
/// assert_eq!(router.current_route(), "user");
/// assert_eq!(router.get("userId"), Some("42"));
///
/// let url = router.url(&Params::new().set("userId", "7"), None, None).unwrap();
/// assert_eq!(url, "/user/7/edit.html");
/// ```
#[derive(Debug, Clone)]
pub struct Router {
    table: Arc<RouteTable>,
    url_prefix: String,
    current_route: String,
    params: Params,
    path: Option<NormalizedPath>,
}

impl Router {
    /// Creates a router that has not resolved any request yet.
    ///
    /// The current route is `default` and no parameters are set, so URLs
    /// built from it start from the framework defaults.
    pub fn new(table: Arc<RouteTable>, url_prefix: impl Into<String>) -> Self {
        Self {
            table,
            url_prefix: url_prefix.into(),
            current_route: DEFAULT_ROUTE.to_string(),
            params: Params::new(),
            path: None,
        }
    }

    /// Creates a router and resolves `request_path` with it.
    pub fn for_request(
        table: Arc<RouteTable>,
        url_prefix: impl Into<String>,
        request_path: &str,
    ) -> Result<Self> {
        let mut router = Self::new(table, url_prefix);
        router.resolve(request_path)?;
        Ok(router)
    }

    /// Matches a raw request path and stores the resolved parameters.
    pub fn resolve(&mut self, request_path: &str) -> Result<&Params> {
        let normalized = normalize(request_path, &self.url_prefix);
        let segments = normalized.segments();

        let Some(route) = match_route(&self.table, &segments) else {
            error!(path = %normalized.path, "route table has no matching route");
            return Err(RouterError::RouteNotFound {
                path: normalized.path,
            });
        };

        let params = resolve(route, &segments, &normalized.format)?;
        debug!(route = %route.name, path = %normalized.path, format = %normalized.format, "resolved request");

        self.current_route = route.name.clone();
        self.params = params;
        self.path = Some(normalized);
        Ok(&self.params)
    }

    /// Gets a resolved parameter.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// Returns all resolved parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the name of the matched route.
    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    /// Returns the normalized request path, if a request was resolved.
    pub fn normalized_path(&self) -> Option<&NormalizedPath> {
        self.path.as_ref()
    }

    /// Returns the URL prefix the application is mounted under.
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Returns the shared route table.
    pub fn table(&self) -> &Arc<RouteTable> {
        &self.table
    }

    /// Builds a URL.
    ///
    /// - `params` override the base parameters.
    /// - `route` defaults to the current route.
    /// - `reset` discards the current request's parameters. When `route`
    ///   names a different route and `reset` is `None`, it is treated as
    ///   `true` so parameters of the old route do not leak into the new one.
    pub fn url(&self, params: &Params, route: Option<&str>, reset: Option<bool>) -> Result<String> {
        let route_name = route.unwrap_or(self.current_route.as_str());
        let reset = reset.unwrap_or(route_name != self.current_route);

        let target = self
            .table
            .get(route_name)
            .ok_or_else(|| RouterError::UnknownRoute(route_name.to_string()))?;

        let mut merged = Params::framework_defaults(DEFAULT_FORMAT);
        if !reset {
            merged.extend_from(&self.params);
        }
        merged.extend_from(params);

        build_url(target, &self.url_prefix, merged)
    }
}
