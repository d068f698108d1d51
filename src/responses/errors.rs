use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper JSON error response
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound(msg) => json_error_response(404, &msg),
        ServerError::BadRequest(msg) => json_error_response(400, &msg),
        ServerError::ConfigError(msg) => json_error_response(500, &msg),
        ServerError::InternalError => json_error_response(500, "Internal Server Error"),
    }
}

/// Build a `{"detail": "..."}` error body, the shape API clients expect.
pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = serde_json::json!({ "detail": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}
