//! Error types for dispatching.

use frontline_router::RouterError;
use thiserror::Error;

use crate::controller::ControllerKey;
use crate::response::Response;

/// Errors raised while routing a request to an action or running it.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Routing or URL generation failed.
    #[error(transparent)]
    Routing(#[from] RouterError),

    /// No controller is registered for the resolved parameters.
    #[error("controller not found: {0}")]
    ControllerNotFound(ControllerKey),

    /// The controller has no action for the resolved name and format.
    #[error("action not found: {action} ({format}) on {controller}")]
    ActionNotFound {
        controller: ControllerKey,
        action: String,
        format: String,
    },

    /// The action itself failed.
    #[error("action failed: {0}")]
    Handler(String),
}

impl DispatchError {
    /// Returns the HTTP status this error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            Self::Routing(e) if e.is_client_error() => 400,
            Self::ControllerNotFound(_) | Self::ActionNotFound { .. } => 404,
            Self::Routing(_) | Self::Handler(_) => 500,
        }
    }

    /// Converts the error into the response sent to the client.
    pub fn into_response(self) -> Response {
        match self.status() {
            400 => Response::bad_request(),
            404 => Response::not_found(),
            _ => Response::internal_server_error(),
        }
    }
}

/// Result type alias for dispatch operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
