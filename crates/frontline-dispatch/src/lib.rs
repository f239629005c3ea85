//! # frontline-dispatch
//!
//! A front controller on top of `frontline-router`: every request is routed
//! to `prefix`/`module`/`controller` and an action, which receives the
//! request together with its router.
//!
//! This crate provides:
//! - Request and response types
//! - Controllers with format-specific actions and init hooks
//! - Middleware support (before/after hooks)
//! - Error-to-status mapping
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use frontline_dispatch::{Controller, ControllerKey, FrontController, Request, Response};
//! use frontline_router::{Params, RouteTable};
//!
//! let routes = Arc::new(RouteTable::new().route(
//!     "user",
//!     "/user/:userId/:userName/:action/",
//!     Params::new().set("module", "users").set("controller", "details"),
//! ));
//!
//! let users = Controller::new()
//!     .action("details", |ctx| async move {
//!         let id = ctx.param("userId").unwrap_or_default();
//!         Ok(Response::html(format!("user {id}")))
//!     })
//!     .format_action("details", "json", |ctx| async move {
//!         Ok(Response::json(ctx.router.params()))
//!     });
//!
//! let front = FrontController::new(routes, "")
//!     .controller(ControllerKey::new("users", "details"), users);
//!
//! let response = front.handle(Request::get("/user/42/alice/details.json")).await;
//! ```
//!
//! ## Building links
//!
//! Actions build URLs through their context, relative to the current
//! request:
//!
//! ```ignore
//! let href = ctx.url(&Params::new().set("userId", "7").set("userName", "bob"), Some("user"), None)?;
//! ```

mod controller;
mod error;
mod front;
mod middleware;
mod request;
mod response;

pub use controller::{Action, ActionContext, Controller, ControllerKey, InitHook};
pub use error::{DispatchError, Result};
pub use front::FrontController;
pub use middleware::{BoxFuture, LoggingMiddleware, Middleware, MiddlewareResult};
pub use request::{Method, Request};
pub use response::Response;
