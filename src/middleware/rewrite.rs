//! Internal path rewriting.

use crate::middleware::{BoxFuture, Middleware, Next};
use crate::request::Request;
use crate::response::Response;

/// Serves a fallback path's handler whenever the incoming path exactly
/// matches a restricted path.
///
/// This is a rewrite, not a redirect: the client keeps the address it
/// asked for and receives different content. [`Request::path`] still
/// reports the original path; only the routing decision changes.
pub struct PathRewrite {
    from: String,
    to: String,
}

impl PathRewrite {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

impl Middleware for PathRewrite {
    fn name(&self) -> &'static str {
        "path-rewrite"
    }

    fn handle<'a>(&'a self, mut req: Request, next: Next<'a>) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            if req.path() == self.from {
                tracing::debug!(from = %self.from, to = %self.to, "rewriting request path");
                req.rewrite_to(&self.to);
            }
            next.run(req).await
        })
    }
}
