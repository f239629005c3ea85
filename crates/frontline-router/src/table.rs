//! Ordered route tables.

use serde::{Deserialize, Deserializer};

use crate::error::{Result, RouterError};
use crate::params::Params;
use crate::pattern::Pattern;

/// Name of the catch-all route.
pub const DEFAULT_ROUTE: &str = "default";

/// Pattern of the catch-all route.
pub const DEFAULT_PATTERN: &str = "/:module/:controller/:action/";

/// A single named route definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDef {
    /// Route name, used for URL generation.
    pub name: String,
    /// Path pattern.
    pub pattern: Pattern,
    /// Defaults declared by the route author.
    pub defaults: Params,
}

impl RouteDef {
    /// Creates a route definition.
    pub fn new(name: impl Into<String>, pattern: &str, defaults: Params) -> Self {
        Self {
            name: name.into(),
            pattern: Pattern::new(pattern),
            defaults,
        }
    }
}

/// An ordered collection of routes. Order is match priority.
///
/// Unless disabled, a route named `default` with pattern
/// `/:module/:controller/:action/` is consulted after every configured route
/// whenever the table does not define one itself.
///
/// # Example
///
/// ```
/// use frontline_router::{Params, RouteTable};
///
/// let table = RouteTable::new()
///     .route("admin", "/admin/:module/:controller/:action/", Params::new().set("prefix", "admin"));
///
/// let names: Vec<_> = table.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, vec!["admin", "default"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
    implicit_default: Option<RouteDef>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Creates a table holding only the implicit default route.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            implicit_default: Some(RouteDef::new(DEFAULT_ROUTE, DEFAULT_PATTERN, Params::new())),
        }
    }

    /// Disables the implicit default route.
    #[must_use]
    pub fn without_default_route(mut self) -> Self {
        self.implicit_default = None;
        self
    }

    /// Adds a route. A route with the same name is replaced in place.
    #[must_use]
    pub fn route(mut self, name: &str, pattern: &str, defaults: Params) -> Self {
        self.push(RouteDef::new(name, pattern, defaults));
        self
    }

    /// Adds a route after checking its name and placeholders.
    pub fn try_route(self, name: &str, pattern: &str, defaults: Params) -> Result<Self> {
        if name.is_empty() {
            return Err(RouterError::InvalidConfig(format!(
                "route with pattern {pattern:?} has an empty name"
            )));
        }
        Pattern::parse(pattern)?;
        Ok(self.route(name, pattern, defaults))
    }

    fn push(&mut self, route: RouteDef) {
        match self.routes.iter_mut().find(|r| r.name == route.name) {
            Some(existing) => *existing = route,
            None => self.routes.push(route),
        }
    }

    /// Looks up a route by name.
    pub fn get(&self, name: &str) -> Option<&RouteDef> {
        self.iter().find(|route| route.name == name)
    }

    /// Returns whether a route with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates the routes in match order, the implicit default last.
    pub fn iter(&self) -> impl Iterator<Item = &RouteDef> {
        let fallback = self
            .implicit_default
            .as_ref()
            .filter(|_| !self.routes.iter().any(|r| r.name == DEFAULT_ROUTE));
        self.routes.iter().chain(fallback)
    }

    /// Returns the number of routes, including the implicit default.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether no route can ever match.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RouteEntry {
    pattern: String,
    #[serde(default)]
    defaults: Params,
}

impl<'de> Deserialize<'de> for RouteTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> serde::de::Visitor<'de> for TableVisitor {
            type Value = RouteTable;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of route names to route definitions")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<RouteTable, A::Error>
            where
                A: serde::de::MapAccess<'de>,
            {
                let mut table = RouteTable::new();
                while let Some((name, entry)) = access.next_entry::<String, RouteEntry>()? {
                    table = table
                        .try_route(&name, &entry.pattern, entry.defaults)
                        .map_err(serde::de::Error::custom)?;
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}
