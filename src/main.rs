//! remark — in-memory comments API.
//!
//! Run with:
//!   RUST_LOG=debug cargo run
//!
//! Try:
//!   curl http://localhost:3000/comments
//!   curl 'http://localhost:3000/comments?query=first'
//!   curl -X POST http://localhost:3000/comments \
//!        -H 'content-type: application/json' \
//!        -d '{"text":"hello"}'
//!   curl -X PATCH http://localhost:3000/comments/1 \
//!        -H 'content-type: application/json' \
//!        -d '{"text":"edited"}'
//!   curl -X DELETE http://localhost:3000/comments/1
//!   curl -i http://localhost:3000/profile   # rewritten to /time, sets theme cookie

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use remark::{app, CommentStore, Server};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(CommentStore::seeded());
    let addr = std::env::var("REMARK_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());

    Server::bind(&addr).serve(app(store)).await.expect("server error");
}
