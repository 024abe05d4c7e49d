use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    ArchiveWriter, ImageTranscoder, LengthExtensionClient, NameListParser, PageSplitter,
};
use crate::presentation::state::AppState;

use super::image_payload::{decode_image_payload, to_data_url, transcode_error_status};

#[derive(Deserialize)]
pub struct ResizeImageRequest {
    pub image: String,
    pub width: u32,
    pub height: u32,
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
pub async fn resize_image_handler<N, S, W, T, X>(
    State(state): State<AppState<N, S, W, T, X>>,
    request: Result<Json<ResizeImageRequest>, JsonRejection>,
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
            tracing::warn!(error = %rejection.body_text(), "Rejected resize request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    if request.width == 0 || request.height == 0 {
        tracing::warn!(
            width = request.width,
            height = request.height,
            "Rejected zero-sized resize"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "width and height must be at least 1".to_string(),
            }),
        )
            .into_response();
    }

    let data = match decode_image_payload(&request.image) {
        Ok(d) => d,
        Err(message) => {
            tracing::warn!(error = %message, "Undecodable image payload");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
                .into_response();
        }
    };

    match state
        .image_transcoder
        .resize(&data, request.width, request.height)
        .await
    {
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
                tracing::error!(error = %e, "Image resize failed");
            } else {
                tracing::warn!(error = %e, "Image resize rejected");
            }
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}
