use std::io::Cursor;

use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};

use crate::application::ports::{EncodedImage, ImageTranscoder, ImageTranscoderError};
use crate::domain::ImageKind;

const JPEG_QUALITY: u8 = 80;

/// In-process raster codec backed by the `image` crate.
#[derive(Debug, Default)]
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }

    fn convert_blocking(
        data: &[u8],
        target: ImageKind,
    ) -> Result<EncodedImage, ImageTranscoderError> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| ImageTranscoderError::Decode(e.to_string()))?;
        encode(decoded, target)
    }

    fn resize_blocking(
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<EncodedImage, ImageTranscoderError> {
        let kind = detect_kind(data)?;
        let decoded = image::load_from_memory(data)
            .map_err(|e| ImageTranscoderError::Decode(e.to_string()))?;

        let resized = decoded.resize_exact(width, height, FilterType::Lanczos3);
        encode(resized, kind)
    }
}

#[async_trait]
impl ImageTranscoder for ImageCodec {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn convert(
        &self,
        data: &[u8],
        target: ImageKind,
    ) -> Result<EncodedImage, ImageTranscoderError> {
        let owned = data.to_vec();
        tokio::task::spawn_blocking(move || Self::convert_blocking(&owned, target))
            .await
            .map_err(|e| ImageTranscoderError::TaskJoin(e.to_string()))?
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn resize(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<EncodedImage, ImageTranscoderError> {
        let owned = data.to_vec();
        tokio::task::spawn_blocking(move || Self::resize_blocking(&owned, width, height))
            .await
            .map_err(|e| ImageTranscoderError::TaskJoin(e.to_string()))?
    }
}

fn detect_kind(data: &[u8]) -> Result<ImageKind, ImageTranscoderError> {
    let format = image::guess_format(data).map_err(|_| ImageTranscoderError::UnknownFormat)?;
    match format {
        ImageFormat::Png => Ok(ImageKind::Png),
        ImageFormat::Jpeg => Ok(ImageKind::Jpeg),
        other => Err(ImageTranscoderError::UnsupportedFormat(format!(
            "{other:?}"
        ))),
    }
}

fn encode(image: DynamicImage, kind: ImageKind) -> Result<EncodedImage, ImageTranscoderError> {
    let mut bytes = Vec::new();
    match kind {
        ImageKind::Png => {
            image
                .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
                .map_err(|e| ImageTranscoderError::Encode(e.to_string()))?;
        }
        ImageKind::Jpeg => {
            // JPEG carries no alpha channel
            let opaque = DynamicImage::ImageRgb8(image.to_rgb8());
            let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
            opaque
                .write_with_encoder(encoder)
                .map_err(|e| ImageTranscoderError::Encode(e.to_string()))?;
        }
    }

    Ok(EncodedImage { kind, bytes })
}
