//! # remark
//!
//! An in-memory comments API demonstrating the request-handling
//! primitives of a small HTTP service: route handlers, query parameters,
//! JSON bodies, cookies, cache directives, and a request-interception
//! (middleware) layer.
//!
//! ## Pieces
//!
//! - [`CommentStore`] — the ordered, mutex-guarded comment collection.
//!   All comment state lives here; handlers share it through an `Arc`.
//! - [`comments`] — the CRUD resource handlers over the store.
//! - [`middleware`] — stages that run ahead of routing: an internal
//!   `/profile` → `/time` path rewrite and a default `theme` cookie.
//! - [`Router`] / [`Server`] — matchit-based routing over a hyper serve
//!   loop with graceful shutdown.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use remark::{app, CommentStore, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = Arc::new(CommentStore::seeded());
//!     Server::bind("0.0.0.0:3000")
//!         .serve(app(store))
//!         .await
//!         .expect("server error");
//! }
//! ```
//!
//! Applications are testable without a socket: build a [`Request`] by
//! hand and feed it to [`Router::respond`].
//!
//! ```rust
//! # use std::sync::Arc;
//! # use remark::{app, CommentStore, Method, Request};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let app = app(Arc::new(CommentStore::seeded()));
//! let res = app.respond(Request::new(Method::GET, "/comments")).await;
//! assert_eq!(res.status_code(), remark::StatusCode::OK);
//! # }
//! ```

mod app;
mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;
mod store;

pub mod categories;
pub mod clock;
pub mod comments;
pub mod health;
pub mod middleware;
pub mod profile;

pub use app::app;
pub use error::Error;
pub use handler::Handler;
pub use http::{Method, StatusCode};
pub use request::Request;
pub use response::{ContentType, IntoResponse, Response};
pub use router::Router;
pub use server::Server;
pub use store::{Comment, CommentStore};
