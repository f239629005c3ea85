//! # frontline-router
//!
//! Maps request paths to controller parameters through an ordered table of
//! named routes, and builds URLs back from parameters.
//!
//! This crate provides:
//! - Route patterns with literal and `:placeholder` segments
//! - First-match-wins matching in table order
//! - Layered defaults (framework, route, path)
//! - Output format inference from the path extension
//! - Reverse URL generation that collapses trailing `index` segments
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use frontline_router::{Params, RouteTable, Router};
//!
//! let table = Arc::new(
//!     RouteTable::new()
//!         .route(
//!             "admin",
//!             "/admin/:module/:controller/:action/",
//!             Params::new().set("prefix", "admin"),
//!         )
//!         .route(
//!             "user",
//!             "/user/:userId/:userName/:action/",
//!             Params::new().set("module", "users").set("controller", "details"),
//!         ),
//! );
//!
//! let router = Router::for_request(table, "", "/user/42/alice/details.html").unwrap();
//! assert_eq!(router.current_route(), "user");
//! assert_eq!(router.get("module"), Some("users"));
//! assert_eq!(router.get("userName"), Some("alice"));
//!
//! let url = router
//!     .url(&Params::new().set("userId", "7").set("userName", "bob"), Some("user"), None)
//!     .unwrap();
//! assert_eq!(url, "/user/7/bob/details.html");
//! ```
//!
//! ## Patterns
//!
//! Patterns are split on `/`. A segment starting with `:` binds a parameter;
//! anything else must appear verbatim. `module`, `controller` and `action`
//! may be missing from a path and default to `index`; every other
//! placeholder is required.
//!
//! A route named `default` with pattern `/:module/:controller/:action/` is
//! always consulted last unless the table defines its own.
//!
//! ## Formats
//!
//! A trailing extension selects the output format: `.html`, `.htm` and
//! `.php` map to `html`, anything else is passed through, and no extension
//! means `html`.
//!
//! ## Configuration
//!
//! ```
//! use frontline_router::RouterConfig;
//!
//! let config = RouterConfig::from_json_str(r#"{
//!     "url_prefix": "/app",
//!     "routes": { "blog": { "pattern": "/blog/:slug" } }
//! }"#).unwrap();
//! let (table, prefix) = config.into_parts();
//! assert_eq!(prefix, "/app");
//! assert!(table.contains("blog"));
//! ```

mod config;
mod error;
mod matcher;
mod normalize;
mod params;
mod pattern;
mod resolve;
mod router;
mod table;
mod url;

pub use config::RouterConfig;
pub use error::{Result, RouterError};
pub use matcher::match_route;
pub use normalize::{normalize, NormalizedPath};
pub use params::{is_core, Params, CORE_PARAMS, DEFAULT_FORMAT, INDEX, STRUCTURAL_PARAMS};
pub use pattern::{Pattern, Segment};
pub use resolve::{decode_segment, resolve};
pub use router::Router;
pub use table::{RouteDef, RouteTable, DEFAULT_PATTERN, DEFAULT_ROUTE};
pub use url::build_url;
