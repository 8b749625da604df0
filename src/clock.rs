//! Wall-clock time endpoints demonstrating two caching policies.
//!
//! Same payload, different `cache-control` declarations: [`now`] is never
//! cached, [`cached`] may be reused by clients for ten seconds before
//! refreshing. The policies live entirely in the header values.

use crate::request::Request;
use crate::response::Response;

/// GET `/time` — always fresh; every request sees a new reading.
pub async fn now(_req: Request) -> Response {
    Response::builder()
        .header("cache-control", "no-store")
        .json(time_body())
}

/// GET `/time/cached` — periodic refresh, at most every ten seconds.
pub async fn cached(_req: Request) -> Response {
    Response::builder()
        .header("cache-control", "public, max-age=10")
        .json(time_body())
}

fn time_body() -> Vec<u8> {
    let time = chrono::Local::now().format("%H:%M:%S").to_string();
    serde_json::json!({ "time": time }).to_string().into_bytes()
}
