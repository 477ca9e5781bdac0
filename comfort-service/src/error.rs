//! API error type and its HTTP mapping

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use comfort_core::ComfortError;
use comfort_schemas::SchemaError;

/// Errors returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected by the core
    #[error(transparent)]
    Comfort(#[from] ComfortError),

    /// Wire record could not be converted
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Request body, path or query did not parse
    #[error("Malformed request: {0}")]
    BadRequest(String),

    /// Well-formed request for something that does not exist
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Comfort(e) => comfort_status(e),
            ApiError::Schema(SchemaError::Comfort(e)) => comfort_status(e),
            ApiError::Schema(SchemaError::Io { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Schema(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

fn comfort_status(error: &ComfortError) -> StatusCode {
    if error.is_unknown_resource() {
        StatusCode::NOT_FOUND
    } else if error.is_invalid_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status, self);
        }

        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
