use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use super::error::{error_response, internal_error};
use crate::application::ports::{BlobStoreError, LlmClient};
use crate::application::services::validate_filename;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state))]
pub async fn serve_file_handler<L>(
    State(state): State<AppState<L>>,
    Path(filename): Path<String>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    if let Err(e) = validate_filename(&filename) {
        return e.into_response();
    }

    let upload = match state.uploads.get_by_filename(&filename).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, "File not found"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to look up upload");
            return internal_error();
        }
    };

    match state.blob_store.fetch(&upload.storage_locator).await {
        Ok(data) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("inline; filename=\"{}\"", upload.filename),
                ),
            ],
            data,
        )
            .into_response(),
        Err(BlobStoreError::NotFound(_)) => {
            tracing::warn!(locator = %upload.storage_locator, "Upload record has no blob");
            error_response(StatusCode::NOT_FOUND, "File not found")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read blob");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch file")
        }
    }
}
