use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    ArchiveWriter, ExtensionRequest, ImageTranscoder, LengthExtensionClient, LengthExtensionError,
    NameListParser, PageSplitter,
};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaRequest {
    pub signature: String,
    pub original_data: String,
    pub secret_length: u64,
    pub append_data: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn length_extension_handler<N, S, W, T, X>(
    State(state): State<AppState<N, S, W, T, X>>,
    request: Result<Json<LeaRequest>, JsonRejection>,
) -> impl IntoResponse
where
    N: NameListParser + 'static,
    S: PageSplitter + 'static,
    W: ArchiveWriter + 'static,
    T: ImageTranscoder + 'static,
    X: LengthExtensionClient + 'static,
{
    let Json(request) = match request {
        Ok(r) => r,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected lea request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    if request.signature.is_empty()
        || request.original_data.is_empty()
        || request.append_data.is_empty()
        || request.secret_length == 0
    {
        tracing::warn!("Lea request with missing fields");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "All fields must be provided".to_string(),
            }),
        )
            .into_response();
    }

    let forwarded = ExtensionRequest {
        signature: request.signature,
        original_data: request.original_data,
        secret_length: request.secret_length,
        append_data: request.append_data,
    };

    match state.lea_client.extend(&forwarded).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(e @ LengthExtensionError::Upstream { .. }) => {
            tracing::warn!(error = %e, "Upstream lea failure");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse { error: e.to_string() }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Lea proxy transport failure");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse { error: e.to_string() }),
            )
                .into_response()
        }
    }
}
