use async_trait::async_trait;

use crate::domain::ImageKind;

/// Re-encoded raster output together with the format it was written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait ImageTranscoder: Send + Sync {
    /// Re-encode the image in the target format.
    async fn convert(
        &self,
        data: &[u8],
        target: ImageKind,
    ) -> Result<EncodedImage, ImageTranscoderError>;

    /// Resize to exactly `width` x `height`, keeping the detected source
    /// format.
    async fn resize(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<EncodedImage, ImageTranscoderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageTranscoderError {
    #[error("could not determine image format")]
    UnknownFormat,
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("image decoding failed: {0}")]
    Decode(String),
    #[error("image encoding failed: {0}")]
    Encode(String),
    #[error("transcoding task failed: {0}")]
    TaskJoin(String),
}
