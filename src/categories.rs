//! Static category listing.
//!
//! The list never changes at runtime, so the response carries an immutable
//! long-lived `cache-control` directive — caching is declared, not coded.

use crate::request::Request;
use crate::response::Response;

const CACHE_FOREVER: &str = "public, max-age=31536000, immutable";

/// GET `/categories` — fixed JSON array, cacheable indefinitely.
pub async fn list(_req: Request) -> Response {
    let body = serde_json::json!([
        { "id": 1, "name": "Electronics" },
        { "id": 2, "name": "Books" },
        { "id": 3, "name": "Clothing" },
        { "id": 4, "name": "Home & Kitchen" }
    ]);
    Response::builder()
        .header("cache-control", CACHE_FOREVER)
        .json(body.to_string().into_bytes())
}
