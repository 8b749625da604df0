//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::Method;
use serde::de::DeserializeOwned;

use crate::error::Error;

/// An incoming HTTP request.
///
/// Owns everything a handler needs: method, path, raw query string,
/// headers, the fully-read body, and any path parameters bound by the
/// router. Middleware may additionally rewrite the *routing* path — the
/// visible [`path`](Request::path) stays what the client sent.
pub struct Request {
    method: Method,
    path: String,
    query: Option<String>,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
    rewritten: Option<String>,
}

impl Request {
    /// Builds a request by hand — the entry point for tests and for
    /// exercising an application through [`Router::respond`](crate::Router::respond)
    /// without a socket.
    ///
    /// `target` is the request target as it would appear on the wire:
    /// a path with an optional query string (`/comments?query=first`).
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_owned(), Some(query.to_owned())),
            None => (target.to_owned(), None),
        };
        Self {
            method,
            path,
            query,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            params: HashMap::new(),
            rewritten: None,
        }
    }

    pub(crate) fn from_parts(parts: http::request::Parts, body: Bytes) -> Self {
        Self {
            method: parts.method,
            path: parts.uri.path().to_owned(),
            query: parts.uri.query().map(str::to_owned),
            headers: parts.headers,
            body,
            params: HashMap::new(),
            rewritten: None,
        }
    }

    /// Adds a header. Returns `self` so test requests chain naturally.
    ///
    /// # Panics
    ///
    /// Panics if `name` or `value` is not a valid HTTP header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        let name = HeaderName::try_from(name).expect("invalid header name");
        let value = HeaderValue::try_from(value).expect("invalid header value");
        self.headers.append(name, value);
        self
    }

    /// Replaces the body. Returns `self` for chaining.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path as the client sent it, untouched by middleware rewrites.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path the router matches against: the rewritten path if a
    /// middleware stage set one, otherwise the visible path.
    pub fn route_path(&self) -> &str {
        self.rewritten.as_deref().unwrap_or(&self.path)
    }

    /// Redirects routing to `path` without changing the visible path.
    pub fn rewrite_to(&mut self, path: &str) {
        self.rewritten = Some(path.to_owned());
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Case-insensitive header lookup; non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/comments/{id}`, `req.param("id")` on `/comments/42`
    /// returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }

    /// Returns a percent-decoded query parameter, if present.
    pub fn query(&self, key: &str) -> Option<String> {
        let raw = self.query.as_deref()?;
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(raw).ok()?;
        pairs.into_iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value of a request cookie by name.
    ///
    /// Parses the `Cookie` header on demand: pairs separated by `;`,
    /// surrounding quotes stripped from values.
    pub fn cookie(&self, name: &str) -> Option<String> {
        let header = self.header("cookie")?;
        for pair in header.split(';') {
            if let Some((key, value)) = pair.trim().split_once('=') {
                if key.trim() == name {
                    return Some(value.trim().trim_matches('"').to_owned());
                }
            }
        }
        None
    }

    /// Deserializes the body as JSON. A malformed body is a
    /// [`Error::BadRequest`], which the response layer turns into a 400.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body)
            .map_err(|e| Error::BadRequest(format!("invalid JSON body: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameters_are_decoded() {
        let req = Request::new(Method::GET, "/comments?query=first%20comment&page=2");
        assert_eq!(req.query("query").as_deref(), Some("first comment"));
        assert_eq!(req.query("page").as_deref(), Some("2"));
        assert_eq!(req.query("missing"), None);
    }

    #[test]
    fn target_without_query_has_no_parameters() {
        let req = Request::new(Method::GET, "/comments");
        assert_eq!(req.path(), "/comments");
        assert_eq!(req.query("query"), None);
    }

    #[test]
    fn cookies_parse_pairs_and_strip_quotes() {
        let req = Request::new(Method::GET, "/profile")
            .with_header("cookie", r#"session=abc123; theme="dark""#);
        assert_eq!(req.cookie("session").as_deref(), Some("abc123"));
        assert_eq!(req.cookie("theme").as_deref(), Some("dark"));
        assert_eq!(req.cookie("absent"), None);
    }

    #[test]
    fn rewrite_changes_routing_but_not_the_visible_path() {
        let mut req = Request::new(Method::GET, "/profile");
        req.rewrite_to("/time");
        assert_eq!(req.path(), "/profile");
        assert_eq!(req.route_path(), "/time");
    }

    #[test]
    fn malformed_json_body_is_a_bad_request() {
        let req = Request::new(Method::POST, "/comments").with_body("{not json");
        let err = req.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, Error::BadRequest(_)));
    }
}
