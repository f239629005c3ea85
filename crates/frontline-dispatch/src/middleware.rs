//! Middleware support for request/response processing.

use tracing::info;

use crate::request::Request;
use crate::response::Response;

/// A boxed future for async middleware and action operations.
pub use futures::future::BoxFuture;

/// Result of middleware processing.
pub enum MiddlewareResult {
    /// Continue to the next middleware/handler.
    Continue(Request),
    /// Stop processing and return this response.
    Response(Response),
}

/// Trait for middleware that wraps dispatching.
///
/// Middleware can:
/// - Modify the request before it is routed
/// - Short-circuit processing and return a response
/// - Modify the response after the action runs
///
/// `before` hooks run in registration order, `after` hooks in reverse.
pub trait Middleware: Send + Sync {
    /// Called before the request is routed.
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult>;

    /// Called after the action has produced a response.
    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response>;
}

/// Middleware that logs requests.
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn before<'a>(&'a self, req: &'a Request) -> BoxFuture<'a, MiddlewareResult> {
        Box::pin(async move {
            info!(method = %req.method, path = %req.path, "request");
            MiddlewareResult::Continue(req.clone())
        })
    }

    fn after<'a>(&'a self, res: Response) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            info!(status = res.status, "response");
            res
        })
    }
}
