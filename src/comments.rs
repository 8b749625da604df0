//! The comment resource: HTTP handlers over [`CommentStore`].
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/comments` | 200, array (optional `query` substring filter) |
//! | POST | `/comments` | 201, created comment |
//! | GET | `/comments/{id}` | 200, comment — or 200 `null` when absent |
//! | PATCH | `/comments/{id}` | 200, updated comment; 404 unknown id |
//! | DELETE | `/comments/{id}` | 200, deleted comment; 404 unknown id |
//!
//! A non-numeric `{id}` and a malformed JSON body are both 400s with a
//! JSON error body.
//!
//! Each handler takes the shared store as its first argument; route
//! registration closes over an `Arc<CommentStore>` (see [`crate::app`]).

use std::sync::Arc;

use http::StatusCode;

use crate::error::Error;
use crate::request::Request;
use crate::response::Response;
use crate::store::CommentStore;

/// GET `/comments` — all comments, or those matching the `query` substring.
///
/// An empty `query` parameter means no filter, same as omitting it.
pub async fn list(store: Arc<CommentStore>, req: Request) -> Result<Response, Error> {
    let query = req.query("query");
    let filter = query.as_deref().filter(|q| !q.is_empty());
    let comments = store.list(filter);
    Ok(Response::json(serde_json::to_vec(&comments)?))
}

/// POST `/comments` — create from a JSON body.
pub async fn create(store: Arc<CommentStore>, req: Request) -> Result<Response, Error> {
    let payload: serde_json::Value = req.json()?;
    let comment = store.create(text_field(&payload));
    Ok(Response::builder()
        .status(StatusCode::CREATED)
        .json(serde_json::to_vec(&comment)?))
}

/// GET `/comments/{id}`.
///
/// Absence is a successful `null` payload, not a 404 — the collection
/// endpoint's deliberate contract for reads.
pub async fn get(store: Arc<CommentStore>, req: Request) -> Result<Response, Error> {
    let id = parse_id(&req)?;
    match store.get(id) {
        Some(comment) => Ok(Response::json(serde_json::to_vec(&comment)?)),
        None => Ok(Response::json(b"null".to_vec())),
    }
}

/// PATCH `/comments/{id}` — replace the comment's text.
pub async fn update(store: Arc<CommentStore>, req: Request) -> Result<Response, Error> {
    let id = parse_id(&req)?;
    let payload: serde_json::Value = req.json()?;
    let comment = store.update_text(id, text_field(&payload))?;
    Ok(Response::json(serde_json::to_vec(&comment)?))
}

/// DELETE `/comments/{id}` — remove and echo the deleted comment.
pub async fn delete(store: Arc<CommentStore>, req: Request) -> Result<Response, Error> {
    let id = parse_id(&req)?;
    let comment = store.delete(id)?;
    Ok(Response::json(serde_json::to_vec(&comment)?))
}

fn parse_id(req: &Request) -> Result<u64, Error> {
    let raw = req
        .param("id")
        .ok_or_else(|| Error::BadRequest("missing comment id".into()))?;
    raw.parse()
        .map_err(|_| Error::BadRequest(format!("invalid comment id `{raw}`")))
}

/// Loose `text` extraction: strings pass through, other JSON values are
/// stringified, and a missing field becomes a placeholder rather than an
/// error. The payload shape is deliberately not validated.
fn text_field(payload: &serde_json::Value) -> String {
    match payload.get("text") {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "undefined".to_owned(),
    }
}
