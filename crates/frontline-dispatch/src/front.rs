//! The front controller: routes every request to a controller action.

use std::collections::HashMap;
use std::sync::Arc;

use frontline_router::{RouteTable, Router, RouterConfig};
use tracing::{debug, error, warn};

use crate::controller::{ActionContext, Controller, ControllerKey};
use crate::error::{DispatchError, Result};
use crate::middleware::{BoxFuture, Middleware, MiddlewareResult};
use crate::request::Request;
use crate::response::Response;

/// Owns the route table and the controllers, and turns requests into
/// responses.
///
/// Construct it once at startup; it can then serve requests concurrently.
pub struct FrontController {
    routes: Arc<RouteTable>,
    url_prefix: String,
    controllers: HashMap<ControllerKey, Controller>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl FrontController {
    /// Creates a front controller over a shared route table.
    pub fn new(routes: Arc<RouteTable>, url_prefix: impl Into<String>) -> Self {
        Self {
            routes,
            url_prefix: url_prefix.into(),
            controllers: HashMap::new(),
            middleware: Vec::new(),
        }
    }

    /// Creates a front controller from a loaded route configuration.
    pub fn from_config(config: RouterConfig) -> Self {
        let (routes, url_prefix) = config.into_parts();
        Self::new(routes, url_prefix)
    }

    /// Registers a controller.
    #[must_use]
    pub fn controller(mut self, key: ControllerKey, controller: Controller) -> Self {
        self.controllers.insert(key, controller);
        self
    }

    /// Adds middleware.
    #[must_use]
    pub fn middleware(mut self, mw: impl Middleware + 'static) -> Self {
        self.middleware.push(Arc::new(mw));
        self
    }

    /// Returns a router that has not resolved a request, for building URLs
    /// outside of a request.
    pub fn router(&self) -> Router {
        Router::new(Arc::clone(&self.routes), self.url_prefix.clone())
    }

    /// Handles an incoming request.
    pub fn handle(&self, mut request: Request) -> BoxFuture<'_, Response> {
        Box::pin(async move {
            // Run before middleware
            for mw in &self.middleware {
                match mw.before(&request).await {
                    MiddlewareResult::Continue(req) => request = req,
                    MiddlewareResult::Response(res) => {
                        // Run after middleware even on early return
                        let mut response = res;
                        for mw in self.middleware.iter().rev() {
                            response = mw.after(response).await;
                        }
                        return response;
                    }
                }
            }

            let path = request.path.clone();
            let mut response = match self.dispatch(request).await {
                Ok(response) => response,
                Err(e) => {
                    if e.status() >= 500 {
                        error!(%path, error = %e, "request failed");
                    } else {
                        warn!(%path, error = %e, "request rejected");
                    }
                    e.into_response()
                }
            };

            // Run after middleware
            for mw in self.middleware.iter().rev() {
                response = mw.after(response).await;
            }

            response
        })
    }

    /// Routes a request and runs the selected action.
    pub async fn dispatch(&self, request: Request) -> Result<Response> {
        let router = Router::for_request(
            Arc::clone(&self.routes),
            self.url_prefix.clone(),
            &request.path,
        )?;

        let key = ControllerKey::from_params(router.params());
        let controller = self
            .controllers
            .get(&key)
            .ok_or_else(|| DispatchError::ControllerNotFound(key.clone()))?;

        let ctx = ActionContext { request, router };
        let (action_name, format) = (ctx.action().to_string(), ctx.format().to_string());
        let action = controller
            .find_action(&action_name, &format)
            .ok_or_else(|| DispatchError::ActionNotFound {
                controller: key.clone(),
                action: action_name.clone(),
                format: format.clone(),
            })?;

        if let Some(response) = controller.run_init(&ctx) {
            debug!(controller = %key, "init hook answered request");
            return Ok(response);
        }

        debug!(controller = %key, action = %action_name, %format, "dispatching");
        action(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontline_router::Params;

    fn routes() -> Arc<RouteTable> {
        Arc::new(RouteTable::new().route(
            "admin",
            "/admin/:module/:controller/:action/",
            Params::new().set("prefix", "admin"),
        ))
    }

    #[tokio::test]
    async fn test_index_dispatch() {
        let front = FrontController::new(routes(), "").controller(
            ControllerKey::new("index", "index"),
            Controller::new().action("index", |_| async { Ok(Response::html("home")) }),
        );

        let res = front.handle(Request::get("/")).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body_string(), Some("home".to_string()));
    }

    #[tokio::test]
    async fn test_prefixed_controller() {
        let front = FrontController::new(routes(), "").controller(
            ControllerKey::with_prefix("admin", "users", "list"),
            Controller::new().action("index", |ctx| async move {
                Ok(Response::text(format!("admin {}", ctx.param("module").unwrap_or("?"))))
            }),
        );

        let res = front.handle(Request::get("/admin/users/list")).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body_string(), Some("admin users".to_string()));

        let res = front.handle(Request::get("/users/list")).await;
        assert_eq!(res.status, 404);
    }

    #[tokio::test]
    async fn test_missing_action() {
        let front = FrontController::new(routes(), "").controller(
            ControllerKey::new("index", "index"),
            Controller::new(),
        );

        let err = front.dispatch(Request::get("/index/index/nope")).await.unwrap_err();
        assert!(matches!(err, DispatchError::ActionNotFound { ref action, .. } if action == "nope"));
        assert_eq!(err.status(), 404);
    }

    #[tokio::test]
    async fn test_bad_encoding() {
        let front = FrontController::new(routes(), "");
        let res = front.handle(Request::get("/users/%zz")).await;
        assert_eq!(res.status, 400);
    }
}
