use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::LlmClient;
use crate::application::services::BYTES_PER_MB;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    delete_summary_handler, delete_upload_handler, get_summary_handler, get_upload_handler,
    health_handler, list_uploads_handler, serve_file_handler, summarize_handler, upload_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<L>(state: AppState<L>) -> Router
where
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Oversized uploads must reach the handler so it can answer with the
    // size message instead of a bare 413.
    let body_limit = (state.settings.summary.max_pdf_size_mb.max(1) * 2 + 1) * BYTES_PER_MB;

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/summarize", post(summarize_handler::<L>))
        .route(
            "/api/summaries/{filename}",
            get(get_summary_handler::<L>).delete(delete_summary_handler::<L>),
        )
        .route("/api/upload", post(upload_handler::<L>))
        .route("/api/uploads", get(list_uploads_handler::<L>))
        .route(
            "/api/uploads/{filename}",
            get(get_upload_handler::<L>).delete(delete_upload_handler::<L>),
        )
        .route("/api/files/{filename}", get(serve_file_handler::<L>))
        .layer(DefaultBodyLimit::max(body_limit as usize))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
