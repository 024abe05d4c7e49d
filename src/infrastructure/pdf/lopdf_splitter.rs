use std::time::Duration;

use async_trait::async_trait;
use lopdf::{Document, Object};

use crate::application::ports::{PageSplitter, PageSplitterError, SplitOutcome};

pub const DEFAULT_SPLIT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_PAGES: usize = 500;

/// Splits a PDF into single-page documents by structural copy: each output
/// clones the source and drops every other page, so page resources (fonts,
/// images, annotations) survive untouched.
pub struct LopdfSplitter {
    timeout: Duration,
    max_pages: usize,
}

impl LopdfSplitter {
    pub fn new(timeout: Duration, max_pages: usize) -> Self {
        Self { timeout, max_pages }
    }

    fn split_blocking(data: &[u8], max_pages: usize) -> Result<SplitOutcome, PageSplitterError> {
        let doc = Document::load_mem(data)
            .map_err(|e| PageSplitterError::InvalidDocument(e.to_string()))?;

        let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
        if page_numbers.len() > max_pages {
            return Err(PageSplitterError::TooManyPages(
                page_numbers.len(),
                max_pages,
            ));
        }

        let title = document_title(&doc);

        let mut pages = Vec::with_capacity(page_numbers.len());
        for &page_number in &page_numbers {
            pages.push(extract_single_page(&doc, page_number, &page_numbers)?);
        }

        Ok(SplitOutcome { title, pages })
    }
}

impl Default for LopdfSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_SPLIT_TIMEOUT, DEFAULT_MAX_PAGES)
    }
}

#[async_trait]
impl PageSplitter for LopdfSplitter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn split_pages(&self, data: &[u8]) -> Result<SplitOutcome, PageSplitterError> {
        let owned = data.to_vec();
        let max_pages = self.max_pages;

        let outcome = tokio::time::timeout(
            self.timeout,
            tokio::task::spawn_blocking(move || Self::split_blocking(&owned, max_pages)),
        )
        .await
        .map_err(|_| PageSplitterError::Timeout)?
        .map_err(|e| PageSplitterError::TaskJoin(e.to_string()))??;

        tracing::info!(page_count = outcome.pages.len(), "PDF split complete");

        Ok(outcome)
    }
}

fn extract_single_page(
    source: &Document,
    page_number: u32,
    all_pages: &[u32],
) -> Result<Vec<u8>, PageSplitterError> {
    let mut single = source.clone();

    let others: Vec<u32> = all_pages
        .iter()
        .copied()
        .filter(|&n| n != page_number)
        .collect();
    if !others.is_empty() {
        single.delete_pages(&others);
    }
    single.prune_objects();
    single.renumber_objects();

    let mut buffer = Vec::new();
    single
        .save_to(&mut buffer)
        .map_err(|e| PageSplitterError::PageExtraction(page_number, e.to_string()))?;

    Ok(buffer)
}

/// Title from the trailer `/Info` dictionary, when one is present.
fn document_title(doc: &Document) -> Option<String> {
    let info = match doc.trailer.get(b"Info").ok()? {
        Object::Reference(id) => doc.get_object(*id).ok()?.as_dict().ok()?,
        Object::Dictionary(dict) => dict,
        _ => return None,
    };

    match info.get(b"Title").ok()? {
        Object::String(bytes, _) => {
            let title = decode_pdf_string(bytes);
            let trimmed = title.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        _ => None,
    }
}

/// PDF text strings are UTF-16BE when they carry a BOM, otherwise treated
/// as UTF-8 with a Latin-1 fallback.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let units: Vec<u16> = bytes[2..]
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else {
        match std::str::from_utf8(bytes) {
            Ok(s) => s.to_string(),
            Err(_) => bytes.iter().map(|&b| b as char).collect(),
        }
    }
}
