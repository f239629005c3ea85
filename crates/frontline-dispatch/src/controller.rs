//! Controllers, actions and the per-request action context.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use frontline_router::{Params, Router};

use crate::error::Result;
use crate::middleware::BoxFuture;
use crate::request::Request;
use crate::response::Response;

/// A boxed async action.
pub type Action = Arc<dyn Fn(ActionContext) -> BoxFuture<'static, Result<Response>> + Send + Sync>;

/// A hook run before every action of a controller. Returning a response
/// skips the action.
pub type InitHook = Arc<dyn Fn(&ActionContext) -> Option<Response> + Send + Sync>;

/// Identifies a controller by the routed `prefix`, `module` and `controller`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ControllerKey {
    /// Folder-like prefix, empty for the main site.
    pub prefix: String,
    /// Module name.
    pub module: String,
    /// Controller name.
    pub controller: String,
}

impl ControllerKey {
    /// Creates a key without a prefix.
    pub fn new(module: impl Into<String>, controller: impl Into<String>) -> Self {
        Self::with_prefix("", module, controller)
    }

    /// Creates a key under a prefix.
    pub fn with_prefix(
        prefix: impl Into<String>,
        module: impl Into<String>,
        controller: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            module: module.into(),
            controller: controller.into(),
        }
    }

    /// Builds the key from resolved routing parameters.
    pub fn from_params(params: &Params) -> Self {
        Self::with_prefix(
            params.get("prefix").unwrap_or_default(),
            params.get("module").unwrap_or_default(),
            params.get("controller").unwrap_or_default(),
        )
    }
}

impl std::fmt::Display for ControllerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.prefix.is_empty() {
            write!(f, "{}/{}", self.module, self.controller)
        } else {
            write!(f, "{}/{}/{}", self.prefix, self.module, self.controller)
        }
    }
}

/// Everything an action gets to see about its request.
///
/// The router is owned by the context, so URLs built inside an action are
/// relative to the request being served.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// The incoming request.
    pub request: Request,
    /// The router that resolved the request.
    pub router: Router,
}

impl ActionContext {
    /// Gets a routing parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.router.get(name)
    }

    /// Returns the resolved action name.
    pub fn action(&self) -> &str {
        self.param("action").unwrap_or_default()
    }

    /// Returns the resolved output format.
    pub fn format(&self) -> &str {
        self.param("format").unwrap_or_default()
    }

    /// Builds a URL relative to the current request.
    pub fn url(&self, params: &Params, route: Option<&str>, reset: Option<bool>) -> Result<String> {
        Ok(self.router.url(params, route, reset)?)
    }

    /// Builds a redirect to a generated URL.
    pub fn redirect(&self, params: &Params, route: Option<&str>) -> Result<Response> {
        Ok(Response::redirect(self.url(params, route, None)?))
    }
}

/// A named set of actions sharing an optional init hook.
///
/// An action may be registered for one output format or for all of them.
/// Lookup prefers the format-specific action.
#[derive(Clone, Default)]
pub struct Controller {
    actions: HashMap<(String, Option<String>), Action>,
    init: Option<InitHook>,
}

impl Controller {
    /// Creates a controller without actions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action served for every format.
    #[must_use]
    pub fn action<F, Fut>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(ActionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        self.actions
            .insert((name.to_string(), None), boxed(handler));
        self
    }

    /// Adds an action served only for one format.
    #[must_use]
    pub fn format_action<F, Fut>(mut self, name: &str, format: &str, handler: F) -> Self
    where
        F: Fn(ActionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response>> + Send + 'static,
    {
        self.actions
            .insert((name.to_string(), Some(format.to_string())), boxed(handler));
        self
    }

    /// Sets the hook run before every action.
    #[must_use]
    pub fn init<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ActionContext) -> Option<Response> + Send + Sync + 'static,
    {
        self.init = Some(Arc::new(hook));
        self
    }

    /// Finds the action for a name and format.
    pub fn find_action(&self, action: &str, format: &str) -> Option<&Action> {
        self.actions
            .get(&(action.to_string(), Some(format.to_string())))
            .or_else(|| self.actions.get(&(action.to_string(), None)))
    }

    /// Runs the init hook, if any.
    pub fn run_init(&self, ctx: &ActionContext) -> Option<Response> {
        self.init.as_ref().and_then(|hook| hook(ctx))
    }
}

fn boxed<F, Fut>(handler: F) -> Action
where
    F: Fn(ActionContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response>> + Send + 'static,
{
    Arc::new(move |ctx: ActionContext| -> BoxFuture<'static, Result<Response>> {
        Box::pin(handler(ctx))
    })
}
