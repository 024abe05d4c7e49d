use async_trait::async_trait;

use crate::domain::OutputEntry;

#[async_trait]
pub trait ArchiveWriter: Send + Sync {
    /// Serialize the entries into one archive, preserving their order.
    async fn write(&self, entries: &[OutputEntry]) -> Result<Vec<u8>, ArchiveWriterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveWriterError {
    #[error("archive entry {0}: {1}")]
    Entry(String, String),
    #[error("archive serialization failed: {0}")]
    Serialization(String),
}
