//! End-to-end tests for the assembled application, driven through the
//! in-process `Router::respond` entry point — no sockets involved.

use std::sync::Arc;

use remark::{app, Comment, CommentStore, Method, Request, Router, StatusCode};

fn fresh_app() -> Router {
    app(Arc::new(CommentStore::new()))
}

fn seeded_app() -> Router {
    app(Arc::new(CommentStore::seeded()))
}

fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).expect("response body is valid JSON")
}

#[tokio::test]
async fn comment_lifecycle_roundtrip() {
    let app = fresh_app();

    // POST {text:"hello"} -> 201 {id, text:"hello"}
    let res = app
        .respond(Request::new(Method::POST, "/comments").with_body(r#"{"text":"hello"}"#))
        .await;
    assert_eq!(res.status_code(), StatusCode::CREATED);
    let created: Comment = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(created.text, "hello");

    // GET /comments/{id} -> 200, identical body
    let res = app
        .respond(Request::new(Method::GET, &format!("/comments/{}", created.id)))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let fetched: Comment = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(fetched, created);

    // DELETE -> 200 with the same comment
    let res = app
        .respond(Request::new(Method::DELETE, &format!("/comments/{}", created.id)))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let deleted: Comment = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(deleted, created);

    // Subsequent GET -> 200 null, not a 404
    let res = app
        .respond(Request::new(Method::GET, &format!("/comments/{}", created.id)))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(json(res.body()), serde_json::Value::Null);
}

#[tokio::test]
async fn search_with_no_match_returns_an_empty_array() {
    let app = seeded_app();
    let res = app
        .respond(Request::new(Method::GET, "/comments?query=xyz"))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(json(res.body()), serde_json::json!([]));
}

#[tokio::test]
async fn patch_and_delete_unknown_ids_are_404s() {
    let app = fresh_app();

    let res = app
        .respond(Request::new(Method::PATCH, "/comments/99").with_body(r#"{"text":"x"}"#))
        .await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);

    let res = app.respond(Request::new(Method::DELETE, "/comments/99")).await;
    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_is_a_400() {
    let app = seeded_app();
    let res = app.respond(Request::new(Method::GET, "/comments/abc")).await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
    assert!(json(res.body())["error"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn malformed_body_is_a_400() {
    let app = fresh_app();
    let res = app
        .respond(Request::new(Method::POST, "/comments").with_body("{broken"))
        .await;
    assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn requests_without_the_theme_cookie_receive_the_default() {
    let app = seeded_app();

    let res = app.respond(Request::new(Method::GET, "/comments")).await;
    assert_eq!(res.header("set-cookie"), Some("theme=dark; Path=/"));

    let res = app
        .respond(Request::new(Method::GET, "/comments").with_header("cookie", "theme=light"))
        .await;
    assert_eq!(res.header("set-cookie"), None);
}

#[tokio::test]
async fn profile_is_internally_rewritten_to_time() {
    let app = seeded_app();
    let res = app.respond(Request::new(Method::GET, "/profile")).await;

    // Time content on the profile address: JSON payload, not the HTML
    // body the profile handler would produce.
    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(res.header("content-type"), Some("application/json"));
    assert!(json(res.body())["time"].is_string());
}

#[tokio::test]
async fn update_changes_only_the_target_record() {
    let app = seeded_app();

    let res = app
        .respond(Request::new(Method::PATCH, "/comments/2").with_body(r#"{"text":"edited"}"#))
        .await;
    assert_eq!(res.status_code(), StatusCode::OK);
    let updated: Comment = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.text, "edited");

    let res = app.respond(Request::new(Method::GET, "/comments")).await;
    let all: Vec<Comment> = serde_json::from_slice(res.body()).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].text, "This is the first comment");
    assert_eq!(all[1].text, "edited");
    assert_eq!(all[2].text, "This is the third comment");
}

#[tokio::test]
async fn health_probes_answer() {
    let app = seeded_app();
    let res = app.respond(Request::new(Method::GET, "/healthz")).await;
    assert_eq!(res.body(), b"ok");
    let res = app.respond(Request::new(Method::GET, "/readyz")).await;
    assert_eq!(res.body(), b"ready");
}
