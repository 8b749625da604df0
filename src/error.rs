//! Unified error type.

use http::StatusCode;

use crate::response::{IntoResponse, Response};

/// The error type returned by remark's fallible operations.
///
/// The first two variants form the API taxonomy: handlers return them and
/// the response layer translates them to `400` / `404` with a JSON body of
/// the shape `{"error": "..."}`. The remaining variants surface
/// serialization and infrastructure failures as `500`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request itself is unusable: non-numeric path id, malformed body.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The operation targets a record that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A response body failed to serialize.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binding a port or accepting a connection failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Json(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Return `Err(Error::NotFound(..))` from a handler and the client sees
/// `404` with `{"error":"not found: ..."}`.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        Response::builder()
            .status(self.status())
            .json(body.to_string().into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400_with_json_body() {
        let res = Error::BadRequest("invalid comment id `abc`".into()).into_response();
        assert_eq!(res.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = serde_json::from_slice(res.body()).unwrap();
        assert_eq!(body["error"], "bad request: invalid comment id `abc`");
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = Error::NotFound("comment 7".into()).into_response();
        assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    }
}
