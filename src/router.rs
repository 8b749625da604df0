//! Radix-tree request router and middleware attachment point.
//!
//! One tree per HTTP method, O(path-length) lookup via [`matchit`].
//! Middleware stages registered with [`Router::wrap`] run ahead of route
//! matching on every request, in registration order.

use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use matchit::Router as MatchitRouter;

use crate::error::Error;
use crate::handler::{BoxedHandler, Handler};
use crate::middleware::{Middleware, Next};
use crate::request::Request;
use crate::response::{IntoResponse, Response};

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each registration call returns `self` so routes chain naturally:
///
/// ```rust,no_run
/// # use remark::{Request, Response, Router};
/// # async fn list(_: Request) -> Response { Response::text("") }
/// # async fn create(_: Request) -> Response { Response::text("") }
/// # async fn get(_: Request) -> Response { Response::text("") }
/// let app = Router::new()
///     .get("/comments", list)
///     .post("/comments", create)
///     .get("/comments/{id}", get);
/// ```
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), middleware: Vec::new() }
    }

    /// Register a handler for a method + path pair. Returns `self` for
    /// chaining. Path parameters use `{name}` syntax and are retrieved
    /// with [`Request::param`].
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route pattern; routes are static
    /// configuration, so this is a programming error caught at startup.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::GET, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::POST, path, handler)
    }

    pub fn patch(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::PATCH, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::DELETE, path, handler)
    }

    /// Appends a middleware stage. Stages run in registration order,
    /// each deciding whether and how to continue via [`Next`].
    pub fn wrap(mut self, middleware: impl Middleware) -> Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Runs one request through the full pipeline — middleware, routing,
    /// handler — and returns the response.
    ///
    /// This is the in-process entry point the server calls for every
    /// request; tests use it to exercise an application without a socket.
    pub async fn respond(&self, req: Request) -> Response {
        let method = req.method().clone();
        let path = req.path().to_owned();
        let response = Next::new(&self.middleware, self).run(req).await;
        tracing::debug!(method = %method, path = %path, status = %response.status_code(), "request completed");
        response
    }

    /// Routes a request to its handler. Reached after every middleware
    /// stage has passed the request along.
    pub(crate) async fn dispatch(&self, mut req: Request) -> Response {
        let method = req.method().clone();
        let path = req.route_path().to_owned();
        match self.lookup(&method, &path) {
            Some((handler, params)) => {
                req.set_params(params);
                handler.call(req).await
            }
            None => {
                Error::NotFound(format!("no route for {method} {path}")).into_response()
            }
        }
    }

    fn lookup(
        &self,
        method: &Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    async fn echo_id(req: Request) -> Response {
        Response::text(req.param("id").unwrap_or("missing").to_owned())
    }

    #[tokio::test]
    async fn routes_by_method_and_path() {
        let app = Router::new()
            .get("/comments/{id}", echo_id)
            .post("/comments", |_req| async { Response::status(StatusCode::CREATED) });

        let res = app.respond(Request::new(Method::GET, "/comments/42")).await;
        assert_eq!(res.body(), b"42");

        let res = app.respond(Request::new(Method::POST, "/comments")).await;
        assert_eq!(res.status_code(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn unknown_route_is_a_404_with_json_error() {
        let app = Router::new().get("/comments", |_req| async { Response::text("ok") });

        let res = app.respond(Request::new(Method::GET, "/nope")).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert!(body["error"].as_str().unwrap().contains("/nope"));
    }

    #[tokio::test]
    async fn method_mismatch_is_a_404() {
        let app = Router::new().get("/comments", |_req| async { Response::text("ok") });

        let res = app.respond(Request::new(Method::DELETE, "/comments")).await;
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }
}
