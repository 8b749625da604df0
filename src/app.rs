//! Application assembly.
//!
//! One function builds the whole routing table and middleware pipeline
//! around a shared [`CommentStore`]. The binary calls it with a seeded
//! store; tests call it with a fresh one for isolation.

use std::sync::Arc;

use crate::middleware::{DefaultCookie, PathRewrite};
use crate::router::Router;
use crate::store::CommentStore;
use crate::{categories, clock, comments, health, profile};

/// Builds the remark application around `store`.
///
/// Routes:
/// - `/comments` CRUD backed by the store
/// - `/categories`, `/time`, `/time/cached`, `/profile` demos
/// - `/healthz`, `/readyz` probes
///
/// Middleware: every request gets a default `theme=dark` cookie when it
/// arrives without one, and `/profile` is internally rewritten to `/time`.
pub fn app(store: Arc<CommentStore>) -> Router {
    Router::new()
        .get("/comments", {
            let store = Arc::clone(&store);
            move |req| comments::list(Arc::clone(&store), req)
        })
        .post("/comments", {
            let store = Arc::clone(&store);
            move |req| comments::create(Arc::clone(&store), req)
        })
        .get("/comments/{id}", {
            let store = Arc::clone(&store);
            move |req| comments::get(Arc::clone(&store), req)
        })
        .patch("/comments/{id}", {
            let store = Arc::clone(&store);
            move |req| comments::update(Arc::clone(&store), req)
        })
        .delete("/comments/{id}", {
            let store = Arc::clone(&store);
            move |req| comments::delete(Arc::clone(&store), req)
        })
        .get("/categories", categories::list)
        .get("/time", clock::now)
        .get("/time/cached", clock::cached)
        .get("/profile", profile::show)
        .get("/healthz", health::liveness)
        .get("/readyz", health::readiness)
        .wrap(DefaultCookie::new("theme", "dark"))
        .wrap(PathRewrite::new("/profile", "/time"))
}
