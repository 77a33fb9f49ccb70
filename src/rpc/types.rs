// HTTP-facing error type
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Opaque failure returned to the grid. Details go to the log, not the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError;

pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::SERVICE_UNAVAILABLE, INTERNAL_ERROR_BODY).into_response()
    }
}
