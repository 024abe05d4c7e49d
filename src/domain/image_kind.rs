use serde::Deserialize;

/// Raster formats the image endpoints understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Png,
    #[serde(alias = "jpg")]
    Jpeg,
}

impl ImageKind {
    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}
