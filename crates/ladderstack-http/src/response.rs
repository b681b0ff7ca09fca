//! JSON response serialization and error formatting.

use ladderstack_model::error::{LadderError, LadderErrorCode};
use ladderstack_model::output::ErrorBody;

use crate::body::LadderResponseBody;

/// Content type for all game service responses.
pub const CONTENT_TYPE: &str = "application/json";

/// Serialize a ladder error into a JSON error body.
///
/// Client errors produce `{"error": message}`. Internal errors hide the
/// message behind a generic line and surface the diagnostic in `details`:
///
/// ```json
/// {"error": "internal server error", "details": "..."}
/// ```
#[must_use]
pub fn error_to_json(error: &LadderError) -> Vec<u8> {
    let body = if error.code == LadderErrorCode::Internal {
        ErrorBody {
            error: "internal server error".to_owned(),
            details: Some(error.message.clone()),
        }
    } else {
        ErrorBody {
            error: error.message.clone(),
            details: None,
        }
    };
    serde_json::to_vec(&body).expect("JSON serialization of error cannot fail")
}

/// Convert a `LadderError` into a complete HTTP error response.
#[must_use]
pub fn error_to_response(
    error: &LadderError,
    request_id: &str,
) -> http::Response<LadderResponseBody> {
    let json = error_to_json(error);
    let body = LadderResponseBody::from_json(json);

    http::Response::builder()
        .status(error.status_code)
        .header("content-type", CONTENT_TYPE)
        .header("x-request-id", request_id)
        .body(body)
        .expect("valid error response")
}

/// Build a success response from JSON bytes.
#[must_use]
pub fn json_response(json: Vec<u8>, request_id: &str) -> http::Response<LadderResponseBody> {
    let body = LadderResponseBody::from_json(json);

    http::Response::builder()
        .status(http::StatusCode::OK)
        .header("content-type", CONTENT_TYPE)
        .header("x-request-id", request_id)
        .body(body)
        .expect("valid JSON response")
}
