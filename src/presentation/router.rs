use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_session_handler, get_session_handler, health_handler, list_messages_handler,
    post_message_handler, upload_document_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<F, L>(state: AppState<F, L>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.extraction.max_file_size_bytes());

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/sessions", post(create_session_handler::<F, L>))
        .route(
            "/api/v1/sessions/{session_id}",
            get(get_session_handler::<F, L>),
        )
        .route(
            "/api/v1/sessions/{session_id}/document",
            post(upload_document_handler::<F, L>),
        )
        .route(
            "/api/v1/sessions/{session_id}/messages",
            get(list_messages_handler::<F, L>).post(post_message_handler::<F, L>),
        )
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
