use async_trait::async_trait;

/// Result of exploding a source document: the title carried by its `/Info`
/// dictionary (when present) and one serialized single-page PDF per source
/// page, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    pub title: Option<String>,
    pub pages: Vec<Vec<u8>>,
}

#[async_trait]
pub trait PageSplitter: Send + Sync {
    async fn split_pages(&self, data: &[u8]) -> Result<SplitOutcome, PageSplitterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum PageSplitterError {
    #[error("invalid PDF document: {0}")]
    InvalidDocument(String),
    #[error("document has {0} pages, more than the allowed {1}")]
    TooManyPages(usize, usize),
    #[error("extraction of page {0} failed: {1}")]
    PageExtraction(u32, String),
    #[error("page splitting timed out")]
    Timeout,
    #[error("page splitting task failed: {0}")]
    TaskJoin(String),
}
