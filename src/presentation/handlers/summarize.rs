use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::error_response;
use crate::application::ports::LlmClient;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    #[serde(default)]
    pub file_url: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub processing_time: Option<u64>,
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<L>(
    State(state): State<AppState<L>>,
    request: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response
where
    L: LlmClient + ?Sized + 'static,
{
    // Malformed JSON, a non-string fileUrl or a missing content type all
    // leave us without a usable file URL.
    let file_url = match request {
        Ok(Json(request)) => request.file_url.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected summarize request body");
            return error_response(StatusCode::BAD_REQUEST, "File URL is required");
        }
    };

    match state.summary_service.summarize(&file_url).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(SummarizeResponse {
                summary: outcome.summary,
                cached: outcome.cached,
                created_at: outcome.created_at,
                processing_time: outcome.processing_time_ms,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
