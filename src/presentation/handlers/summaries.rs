use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use super::error::{error_response, internal_error};
use crate::application::ports::LlmClient;
use crate::application::services::validate_filename;
use crate::domain::{SummaryRecord, SummarySections};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct SummaryDetailResponse {
    #[serde(flatten)]
    pub record: SummaryRecord,
    pub sections: SummarySections,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[tracing::instrument(skip(state))]
pub async fn get_summary_handler<L>(
    State(state): State<AppState<L>>,
    Path(filename): Path<String>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    if let Err(e) = validate_filename(&filename) {
        return e.into_response();
    }

    match state.summaries.find_by_filename(&filename).await {
        Ok(Some(record)) => {
            let sections = SummarySections::parse(&record.summary_text);
            (StatusCode::OK, Json(SummaryDetailResponse { record, sections })).into_response()
        }
        Ok(None) => error_response(StatusCode::NOT_FOUND, "Summary not found"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch summary");
            internal_error()
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn delete_summary_handler<L>(
    State(state): State<AppState<L>>,
    Path(filename): Path<String>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    if let Err(e) = validate_filename(&filename) {
        return e.into_response();
    }

    match state.summaries.delete_by_filename(&filename).await {
        Ok(removed) => {
            tracing::info!(removed, "Summary delete requested");
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Summary deleted successfully",
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete summary");
            internal_error()
        }
    }
}
