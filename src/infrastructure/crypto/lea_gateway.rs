use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{ExtensionRequest, LengthExtensionClient, LengthExtensionError};

/// Forwards length-extension requests to the remote service and relays its
/// JSON responses. No cryptography happens locally.
pub struct HttpLeaGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpLeaGateway {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, LengthExtensionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LengthExtensionError::Transport(e.to_string()))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl LengthExtensionClient for HttpLeaGateway {
    #[tracing::instrument(skip(self, request))]
    async fn extend(
        &self,
        request: &ExtensionRequest,
    ) -> Result<serde_json::Value, LengthExtensionError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| LengthExtensionError::Transport(e.to_string()))?;

        let status = response.status();
        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LengthExtensionError::Transport(format!("invalid upstream payload: {e}")))?;

        if !status.is_success() {
            let message = payload
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("upstream request failed")
                .to_string();
            tracing::warn!(status = status.as_u16(), "Upstream rejected lea request");
            return Err(LengthExtensionError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(payload)
    }
}
