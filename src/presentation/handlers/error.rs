use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::SummaryError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn internal_error() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

impl IntoResponse for SummaryError {
    fn into_response(self) -> Response {
        match &self {
            SummaryError::MissingFileUrl | SummaryError::InvalidFilename => {
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            SummaryError::FileNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "File not found")
            }
            SummaryError::Admission(e) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
            SummaryError::Extraction(_) => {
                error_response(StatusCode::BAD_REQUEST, "Failed to extract text from PDF")
            }
            SummaryError::Generation(e) => {
                tracing::error!(phase = "generation", error = %e, "Summary generation failed");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate summary",
                )
            }
            SummaryError::Storage(e) | SummaryError::Repository(e) => {
                tracing::error!(error = %e, "Summary request failed");
                internal_error()
            }
        }
    }
}
