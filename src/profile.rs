//! Header and cookie I/O demo.

use crate::request::Request;
use crate::response::{ContentType, Response};

/// GET `/profile` — reads the `authorization` header and the `theme`
/// cookie, answers with an HTML body and an explicit `Set-Cookie`.
///
/// With the default application wiring this route is shadowed by the
/// `/profile` → `/time` rewrite stage; the handler stays registered and
/// is reachable once the rewrite is removed.
pub async fn show(req: Request) -> Response {
    if let Some(auth) = req.header("authorization") {
        tracing::debug!(authorization = auth, "profile request credentials");
    }
    let theme = req.cookie("theme");
    tracing::debug!(theme = theme.as_deref(), "profile theme cookie");

    Response::builder()
        .header("set-cookie", "theme=dark")
        .bytes(ContentType::Html, b"<h1>Profile API data</h1>".to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[tokio::test]
    async fn answers_html_and_sets_the_theme_cookie() {
        let req = Request::new(Method::GET, "/profile")
            .with_header("authorization", "Bearer token")
            .with_header("cookie", "theme=light");
        let res = show(req).await;

        assert_eq!(res.header("content-type"), Some("text/html; charset=utf-8"));
        assert_eq!(res.header("set-cookie"), Some("theme=dark"));
        assert!(res.body().starts_with(b"<h1>"));
    }
}
