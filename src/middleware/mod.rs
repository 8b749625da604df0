//! Middleware layer.
//!
//! Middleware runs once per inbound request, before route matching, and is
//! the place for cross-cutting concerns: rewriting the effective routing
//! path, defaulting cookies, injecting headers. A stage receives the
//! request and a [`Next`] continuation; it may mutate the request, decorate
//! the response on the way back out, or short-circuit by not calling
//! `next` at all.
//!
//! Built-in stages:
//! - [`PathRewrite`] — serve a fallback path's handler for a restricted
//!   path, without changing the visible path (rewrite, not redirect).
//! - [`DefaultCookie`] — set a preference cookie on the response whenever
//!   the request arrived without one.
//!
//! ```rust,no_run
//! use remark::middleware::{DefaultCookie, PathRewrite};
//! use remark::Router;
//!
//! let app = Router::new()
//!     // ...routes...
//!     .wrap(DefaultCookie::new("theme", "dark"))
//!     .wrap(PathRewrite::new("/profile", "/time"));
//! ```

mod cookie;
mod rewrite;

pub use cookie::DefaultCookie;
pub use rewrite::PathRewrite;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// A boxed future that borrows the middleware stage invoking it.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A request-interception stage.
///
/// Stages MUST call `next.run()` exactly once unless short-circuiting,
/// and must not suppress a downstream response.
pub trait Middleware: Send + Sync + 'static {
    /// Stage name, used in logs.
    fn name(&self) -> &'static str;

    /// Process one request, forwarding downstream via `next`.
    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a, Response>;
}

/// Continuation to the rest of the pipeline: the remaining middleware
/// stages, then the router itself.
pub struct Next<'a> {
    stack: &'a [Arc<dyn Middleware>],
    router: &'a Router,
}

impl<'a> Next<'a> {
    pub(crate) fn new(stack: &'a [Arc<dyn Middleware>], router: &'a Router) -> Self {
        Self { stack, router }
    }

    /// Forwards the request to the next stage, or to the router once the
    /// stack is exhausted.
    pub async fn run(self, req: Request) -> Response {
        match self.stack.split_first() {
            Some((stage, rest)) => {
                tracing::trace!(stage = stage.name(), "entering middleware stage");
                stage.handle(req, Next { stack: rest, router: self.router }).await
            }
            None => self.router.dispatch(req).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    /// A stage that tags every response so tests can observe ordering.
    struct Tag(&'static str);

    impl Middleware for Tag {
        fn name(&self) -> &'static str {
            "tag"
        }

        fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a, Response> {
            Box::pin(async move {
                let mut res = next.run(req).await;
                res.append_header("x-tag", self.0);
                res
            })
        }
    }

    #[tokio::test]
    async fn stages_compose_around_the_handler() {
        let app = Router::new()
            .get("/", |_req| async { Response::text("hello") })
            .wrap(Tag("outer"))
            .wrap(Tag("inner"));

        let res = app.respond(Request::new(Method::GET, "/")).await;
        assert_eq!(res.body(), b"hello");
        // Both stages decorated the single outgoing response.
        assert_eq!(res.header("x-tag"), Some("inner"));
    }

    #[tokio::test]
    async fn short_circuiting_stage_skips_the_router() {
        struct Deny;

        impl Middleware for Deny {
            fn name(&self) -> &'static str {
                "deny"
            }

            fn handle<'a>(&'a self, _req: Request, _next: Next<'a>) -> BoxFuture<'a, Response> {
                Box::pin(async { Response::status(http::StatusCode::FORBIDDEN) })
            }
        }

        let app = Router::new()
            .get("/", |_req| async { Response::text("unreachable") })
            .wrap(Deny);

        let res = app.respond(Request::new(Method::GET, "/")).await;
        assert_eq!(res.status_code(), http::StatusCode::FORBIDDEN);
        assert!(res.body().is_empty());
    }
}
