use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{
    ArchiveWriter, ImageTranscoder, LengthExtensionClient, NameListParser, PageSplitter,
};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    convert_image_handler, health_handler, length_extension_handler, resize_image_handler,
    split_pdf_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<N, S, W, T, X>(state: AppState<N, S, W, T, X>) -> Router
where
    N: NameListParser + 'static,
    S: PageSplitter + 'static,
    W: ArchiveWriter + 'static,
    T: ImageTranscoder + 'static,
    X: LengthExtensionClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.limits.max_upload_bytes());

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/pdf/split", post(split_pdf_handler::<N, S, W, T, X>))
        .route(
            "/api/v1/images/convert",
            post(convert_image_handler::<N, S, W, T, X>),
        )
        .route(
            "/api/v1/images/resize",
            post(resize_image_handler::<N, S, W, T, X>),
        )
        .route(
            "/api/v1/crypto/lea",
            post(length_extension_handler::<N, S, W, T, X>),
        )
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
