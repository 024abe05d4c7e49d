use async_trait::async_trait;
use serde::Serialize;

/// Payload forwarded verbatim to the upstream length-extension service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionRequest {
    pub signature: String,
    pub original_data: String,
    pub secret_length: u64,
    pub append_data: String,
}

#[async_trait]
pub trait LengthExtensionClient: Send + Sync {
    async fn extend(
        &self,
        request: &ExtensionRequest,
    ) -> Result<serde_json::Value, LengthExtensionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LengthExtensionError {
    #[error("upstream rejected the request ({status}): {message}")]
    Upstream { status: u16, message: String },
    #[error("upstream unreachable: {0}")]
    Transport(String),
}
