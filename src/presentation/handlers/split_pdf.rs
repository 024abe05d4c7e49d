use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{
    ArchiveWriter, ImageTranscoder, LengthExtensionClient, NameListParser, PageSplitter,
    PageSplitterError,
};
use crate::application::services::SplitError;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn split_pdf_handler<N, S, W, T, X>(
    State(state): State<AppState<N, S, W, T, X>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> impl IntoResponse
where
    N: NameListParser + 'static,
    S: PageSplitter + 'static,
    W: ArchiveWriter + 'static,
    T: ImageTranscoder + 'static,
    X: LengthExtensionClient + 'static,
{
    let mut multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Rejected multipart request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!(
                        "multipart boundary missing or malformed: {}",
                        rejection.body_text()
                    ),
                }),
            )
                .into_response();
        }
    };

    let mut pdf_bytes: Option<Vec<u8>> = None;
    let mut csv_bytes: Option<Vec<u8>> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let data = match field.bytes().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::warn!(error = %e, "Failed to read multipart part");
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(ErrorResponse {
                                error: format!("Failed to read multipart part: {}", e),
                            }),
                        )
                            .into_response();
                    }
                };

                tracing::debug!(content_type = %content_type, bytes = data.len(), "Multipart part received");

                if content_type.contains("application/pdf") && pdf_bytes.is_none() {
                    pdf_bytes = Some(data.to_vec());
                } else if content_type.contains("text/csv") && csv_bytes.is_none() {
                    csv_bytes = Some(data.to_vec());
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read multipart body");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart body: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    }

    let Some(pdf) = pdf_bytes else {
        tracing::warn!("Split request without an application/pdf part");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No application/pdf part in request".to_string(),
            }),
        )
            .into_response();
    };

    match state.split_service.split(&pdf, csv_bytes.as_deref()).await {
        Ok(archive) => {
            tracing::info!(entry_count = archive.entry_count, "Returning split archive");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/zip"),
                    (
                        header::CONTENT_DISPOSITION,
                        "attachment; filename=split_pdfs.zip",
                    ),
                ],
                archive.bytes,
            )
                .into_response()
        }
        Err(e) => {
            let status = split_error_status(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Split pipeline failed");
            } else {
                tracing::warn!(error = %e, "Split request rejected");
            }
            (status, Json(ErrorResponse { error: e.to_string() })).into_response()
        }
    }
}

fn split_error_status(error: &SplitError) -> StatusCode {
    match error {
        SplitError::NameParsing(_) | SplitError::Naming(_) => StatusCode::BAD_REQUEST,
        SplitError::Splitting(
            PageSplitterError::InvalidDocument(_) | PageSplitterError::TooManyPages(_, _),
        ) => StatusCode::BAD_REQUEST,
        SplitError::Splitting(_) | SplitError::Archiving(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
