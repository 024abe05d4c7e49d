use std::collections::HashSet;
use std::sync::Arc;

use crate::application::ports::{
    ArchiveWriter, ArchiveWriterError, NameListParseError, NameListParser, PageSplitter,
    PageSplitterError,
};
use crate::domain::{InvalidFilename, NameList, OutputEntry, page_filename};

/// Finished split: the serialized archive and the number of entries in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitArchive {
    pub bytes: Vec<u8>,
    pub entry_count: usize,
}

pub struct SplitService<N, S, W>
where
    N: NameListParser,
    S: PageSplitter,
    W: ArchiveWriter,
{
    name_parser: Arc<N>,
    splitter: Arc<S>,
    archive_writer: Arc<W>,
}

impl<N, S, W> SplitService<N, S, W>
where
    N: NameListParser,
    S: PageSplitter,
    W: ArchiveWriter,
{
    pub fn new(name_parser: Arc<N>, splitter: Arc<S>, archive_writer: Arc<W>) -> Self {
        Self {
            name_parser,
            splitter,
            archive_writer,
        }
    }

    /// Run the whole pipeline: parse names, split pages, name each page,
    /// assemble the archive. Any stage error aborts the request; no partial
    /// archive is ever produced.
    #[tracing::instrument(skip(self, pdf_bytes, csv_bytes), fields(pdf_bytes = pdf_bytes.len()))]
    pub async fn split(
        &self,
        pdf_bytes: &[u8],
        csv_bytes: Option<&[u8]>,
    ) -> Result<SplitArchive, SplitError> {
        let names = match csv_bytes {
            Some(data) => self
                .name_parser
                .parse(data)
                .await
                .map_err(SplitError::NameParsing)?,
            None => NameList::empty(),
        };

        let outcome = self
            .splitter
            .split_pages(pdf_bytes)
            .await
            .map_err(SplitError::Splitting)?;

        tracing::debug!(
            page_count = outcome.pages.len(),
            name_count = names.len(),
            title = outcome.title.as_deref().unwrap_or_default(),
            "Source document split"
        );

        let mut entries = Vec::with_capacity(outcome.pages.len());
        let mut seen = HashSet::new();
        for (index, bytes) in outcome.pages.into_iter().enumerate() {
            let filename = page_filename(&names, outcome.title.as_deref(), index)
                .map_err(SplitError::Naming)?;
            if !seen.insert(filename.clone()) {
                return Err(SplitError::Naming(InvalidFilename::Duplicate(filename)));
            }
            entries.push(OutputEntry { filename, bytes });
        }

        let archive = self
            .archive_writer
            .write(&entries)
            .await
            .map_err(SplitError::Archiving)?;

        tracing::info!(
            entry_count = entries.len(),
            archive_bytes = archive.len(),
            "Split archive assembled"
        );

        Ok(SplitArchive {
            bytes: archive,
            entry_count: entries.len(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("name list parsing: {0}")]
    NameParsing(#[from] NameListParseError),
    #[error("page splitting: {0}")]
    Splitting(#[from] PageSplitterError),
    #[error("output naming: {0}")]
    Naming(#[from] InvalidFilename),
    #[error("archive assembly: {0}")]
    Archiving(#[from] ArchiveWriterError),
}
