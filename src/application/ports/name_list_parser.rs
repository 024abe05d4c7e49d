use async_trait::async_trait;

use crate::domain::NameList;

#[async_trait]
pub trait NameListParser: Send + Sync {
    async fn parse(&self, data: &[u8]) -> Result<NameList, NameListParseError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NameListParseError {
    #[error("malformed name list: {0}")]
    Malformed(String),
}
