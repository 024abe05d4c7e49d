use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::application::ports::{EncodedImage, ImageTranscoderError};

/// Accepts either a `data:` URL or bare base64 and returns the raw bytes.
pub(super) fn decode_image_payload(payload: &str) -> Result<Vec<u8>, String> {
    let encoded = match payload.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };

    BASE64
        .decode(encoded.trim())
        .map_err(|e| format!("invalid base64 image payload: {}", e))
}

pub(super) fn to_data_url(image: &EncodedImage) -> String {
    format!(
        "data:{};base64,{}",
        image.kind.as_mime(),
        BASE64.encode(&image.bytes)
    )
}

pub(super) fn transcode_error_status(error: &ImageTranscoderError) -> StatusCode {
    match error {
        ImageTranscoderError::UnknownFormat
        | ImageTranscoderError::UnsupportedFormat(_)
        | ImageTranscoderError::Decode(_) => StatusCode::BAD_REQUEST,
        ImageTranscoderError::Encode(_) | ImageTranscoderError::TaskJoin(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
