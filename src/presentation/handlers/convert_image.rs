use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    ArchiveWriter, ImageTranscoder, LengthExtensionClient, NameListParser, PageSplitter,
};
use crate::domain::ImageKind;
use crate::presentation::state::AppState;

use super::image_payload::{decode_image_payload, to_data_url, transcode_error_status};

#[derive(Deserialize)]
pub struct ConvertImageRequest {
    pub image: String,
    pub format: ImageKind,
}

#[derive(Serialize)]
pub struct ImageResponse {
    pub image: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn convert_image_handler<N, S, W, T, X>(
    State(state): State<AppState<N, S, W, T, X>>,
    request: Result<Json<ConvertImageRequest>, JsonRejection>,
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
            tracing::warn!(error = %rejection.body_text(), "Rejected convert request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    let data = match decode_image_payload(&request.image) {
        Ok(d) => d,
        Err(message) => {
            tracing::warn!(error = %message, "Undecodable image payload");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response();
        }
    };

    match state.image_transcoder.convert(&data, request.format).await {
        Ok(encoded) => (
            StatusCode::OK,
            Json(ImageResponse {
                image: to_data_url(&encoded),
            }),
        )
            .into_response(),
        Err(e) => {
            let status = transcode_error_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Image conversion failed");
            } else {
                tracing::warn!(error = %e, "Image conversion rejected");
            }
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}
