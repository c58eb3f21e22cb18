use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use serde::{Deserialize, Serialize};

use super::error::{error_response, internal_error};
use crate::application::ports::LlmClient;
use crate::application::services::{AdmissionPolicy, validate_filename};
use crate::domain::{SummaryRecord, UploadRecord};
use crate::presentation::state::AppState;

const PDF_MIME_TYPE: &str = "application/pdf";
const DEFAULT_PAGE_SIZE: i64 = 50;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub message: &'static str,
    pub filename: String,
    pub original_name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub path: String,
}

#[derive(Serialize)]
pub struct FileWithSummary {
    pub upload: UploadRecord,
    pub summary: Option<SummaryRecord>,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub files: Vec<FileWithSummary>,
    pub total: usize,
    pub limit: i64,
    pub skip: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: &'static str,
    pub upload_deleted: bool,
    pub summary_deleted: bool,
}

struct ReceivedFile {
    original_name: String,
    content_type: String,
    data: Bytes,
    size_bytes: u64,
}

// Past the size limit the rest of the field is only counted, so the
// rejection can report the real size.
async fn receive_pdf(
    mut field: Field<'_>,
    admission: AdmissionPolicy,
) -> Result<ReceivedFile, Response> {
    let content_type = field.content_type().unwrap_or_default().to_string();
    if content_type != PDF_MIME_TYPE {
        tracing::warn!(content_type = %content_type, "Rejected non-PDF upload");
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Only PDF files are allowed",
        ));
    }

    let original_name = field.file_name().unwrap_or("document.pdf").to_string();

    let mut buffer = BytesMut::new();
    let mut size_bytes: u64 = 0;
    loop {
        match field.chunk().await {
            Ok(Some(chunk)) => {
                size_bytes += chunk.len() as u64;
                if admission.check_file_size(size_bytes).is_ok() {
                    buffer.extend_from_slice(&chunk);
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read file bytes");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read file: {}", e),
                ));
            }
        }
    }

    if let Err(e) = admission.check_file_size(size_bytes) {
        tracing::warn!(phase = "admission", file_size_bytes = size_bytes, "PDF rejected");
        return Err(error_response(StatusCode::BAD_REQUEST, e.to_string()));
    }

    Ok(ReceivedFile {
        original_name,
        content_type,
        data: buffer.freeze(),
        size_bytes,
    })
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler<L>(
    State(state): State<AppState<L>>,
    mut multipart: Multipart,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let admission = state.summary_service.admission();

    let received = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                break receive_pdf(field, admission).await;
            }
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Upload request with no file");
                return error_response(StatusCode::BAD_REQUEST, "No file provided");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return error_response(
                    StatusCode::BAD_REQUEST,
                    format!("Failed to read multipart: {}", e),
                );
            }
        }
    };

    let file = match received {
        Ok(file) => file,
        Err(response) => return response,
    };

    let record = UploadRecord::new(
        file.original_name,
        file.size_bytes,
        file.content_type,
        &state.settings.storage.s3_prefix,
    );

    let data = file.data;
    let stream = futures::stream::once(async move { Ok::<_, std::io::Error>(data) }).boxed();
    if let Err(e) = state.blob_store.store(&record.storage_locator, stream).await {
        tracing::error!(error = %e, "Failed to store upload");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to upload file");
    }

    if let Err(e) = state.uploads.create(&record).await {
        tracing::error!(error = %e, "Failed to record upload");
        if let Err(cleanup) = state.blob_store.delete(&record.storage_locator).await {
            tracing::warn!(error = %cleanup, "Failed to remove orphaned blob");
        }
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to upload file");
    }

    tracing::info!(
        filename = %record.filename,
        original_name = %record.original_name,
        file_size_bytes = record.size_bytes,
        "File uploaded"
    );

    (
        StatusCode::OK,
        Json(UploadResponse {
            message: "File uploaded successfully",
            path: record.file_path(),
            filename: record.filename,
            original_name: record.original_name,
            size: record.size_bytes,
            mime_type: record.mime_type,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, params))]
pub async fn list_uploads_handler<L>(
    State(state): State<AppState<L>>,
    Query(params): Query<ListParams>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(0);
    let skip = params.skip.unwrap_or(0).max(0);

    let uploads = match state.uploads.list(limit, skip).await {
        Ok(uploads) => uploads,
        Err(e) => {
            tracing::error!(error = %e, "Failed to list uploads");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch uploads");
        }
    };

    let mut files = Vec::with_capacity(uploads.len());
    for upload in uploads {
        let summary = match state.summaries.find_by_filename(&upload.filename).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch summary for upload");
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch uploads",
                );
            }
        };
        files.push(FileWithSummary { upload, summary });
    }

    (
        StatusCode::OK,
        Json(ListResponse {
            total: files.len(),
            files,
            limit,
            skip,
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn get_upload_handler<L>(
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
            tracing::error!(error = %e, "Failed to fetch upload");
            return internal_error();
        }
    };

    match state.summaries.find_by_filename(&filename).await {
        Ok(summary) => (StatusCode::OK, Json(FileWithSummary { upload, summary })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch summary for upload");
            internal_error()
        }
    }
}

/// Removes the upload, its cached summary and the stored PDF. A blob that
/// cannot be deleted is logged and left behind.
#[tracing::instrument(skip(state))]
pub async fn delete_upload_handler<L>(
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
        Ok(upload) => upload,
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch upload");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete file");
        }
    };

    let (upload_deleted, summary_deleted) = match tokio::try_join!(
        state.uploads.delete_by_filename(&filename),
        state.summaries.delete_by_filename(&filename),
    ) {
        Ok(deleted) => deleted,
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete records");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete file");
        }
    };

    if let Some(upload) = upload {
        if let Err(e) = state.blob_store.delete(&upload.storage_locator).await {
            tracing::warn!(error = %e, locator = %upload.storage_locator, "Failed to delete blob");
        }
    }

    tracing::info!(upload_deleted, summary_deleted, "File deleted");

    (
        StatusCode::OK,
        Json(DeleteResponse {
            message: "File deleted successfully",
            upload_deleted,
            summary_deleted,
        }),
    )
        .into_response()
}
