//! Route configuration files.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::table::RouteTable;

/// Router configuration loaded at startup.
///
/// ```json
/// {
///     "url_prefix": "/app",
///     "routes": {
///         "admin": {
///             "pattern": "/admin/:module/:controller/:action/",
///             "defaults": { "prefix": "admin" }
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouterConfig {
    /// Mount point the application is served under.
    pub url_prefix: String,
    /// Routes in match order.
    pub routes: RouteTable,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    url_prefix: String,
    #[serde(default)]
    routes: RouteTable,
    #[serde(default = "default_true")]
    default_route: bool,
}

const fn default_true() -> bool {
    true
}

impl<'de> Deserialize<'de> for RouterConfig {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawConfig::deserialize(deserializer)?;
        let routes = if raw.default_route {
            raw.routes
        } else {
            raw.routes.without_default_route()
        };
        Ok(Self {
            url_prefix: raw.url_prefix.trim_end_matches('/').to_string(),
            routes,
        })
    }
}

impl RouterConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_json_str(&std::fs::read_to_string(path)?)?;
        info!(
            path = %path.display(),
            routes = config.routes.len(),
            url_prefix = %config.url_prefix,
            "loaded route configuration"
        );
        Ok(config)
    }

    /// Overrides the URL prefix.
    #[must_use]
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.url_prefix = url_prefix.into().trim_end_matches('/').to_string();
        self
    }

    /// Splits the configuration into the shared table and the prefix.
    pub fn into_parts(self) -> (Arc<RouteTable>, String) {
        (Arc::new(self.routes), self.url_prefix)
    }
}
