//! Error types for routing and URL generation.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route in the table matched the path.
    ///
    /// With the implicit `default` route in place this cannot happen, so it
    /// points at a broken route table rather than a bad request.
    #[error("no route matched path: {path:?}")]
    RouteNotFound { path: String },

    /// A URL was requested for a route name that is not in the table.
    #[error("there is no route {0:?}")]
    UnknownRoute(String),

    /// A required placeholder had no value during URL generation.
    #[error("missing parameter for url: {0}")]
    MissingParameter(String),

    /// A path segment could not be percent-decoded.
    #[error("cannot decode path segment {segment:?}: {reason}")]
    PathDecoding { segment: String, reason: String },

    /// The route configuration is malformed.
    #[error("invalid route configuration: {0}")]
    InvalidConfig(String),

    /// Route configuration could not be parsed.
    #[error("failed to parse route configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// Route configuration could not be read.
    #[error("failed to read route configuration: {0}")]
    Io(#[from] std::io::Error),
}

impl RouterError {
    /// Returns whether the error was caused by the client's request rather
    /// than by the application's configuration.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::PathDecoding { .. })
    }
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
