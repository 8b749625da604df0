//! Default-cookie assignment.

use crate::middleware::{BoxFuture, Middleware, Next};
use crate::request::Request;
use crate::response::Response;

/// Sets a cookie on the outgoing response whenever the request arrived
/// without it.
///
/// The downstream handler always runs; its response is decorated with one
/// `Set-Cookie` header. A request that already carries the cookie passes
/// through unmodified — an existing value is never overwritten.
pub struct DefaultCookie {
    name: String,
    value: String,
}

impl DefaultCookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

impl Middleware for DefaultCookie {
    fn name(&self) -> &'static str {
        "default-cookie"
    }

    fn handle<'a>(&'a self, req: Request, next: Next<'a>) -> BoxFuture<'a, Response> {
        Box::pin(async move {
            let missing = req.cookie(&self.name).is_none();
            let mut res = next.run(req).await;
            if missing {
                tracing::debug!(cookie = %self.name, "assigning default cookie");
                res.append_header(
                    "set-cookie",
                    &format!("{}={}; Path=/", self.name, self.value),
                );
            }
            res
        })
    }
}
