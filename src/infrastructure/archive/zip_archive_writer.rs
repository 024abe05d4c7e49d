use std::io::{Cursor, Write};

use async_trait::async_trait;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::application::ports::{ArchiveWriter, ArchiveWriterError};
use crate::domain::OutputEntry;

/// Serializes output entries into one Deflate-compressed zip, flat, in
/// entry order.
#[derive(Debug, Default)]
pub struct ZipArchiveWriter;

impl ZipArchiveWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArchiveWriter for ZipArchiveWriter {
    #[tracing::instrument(skip(self, entries), fields(entry_count = entries.len()))]
    async fn write(&self, entries: &[OutputEntry]) -> Result<Vec<u8>, ArchiveWriterError> {
        let mut buffer = Vec::new();
        {
            let mut archive = ZipWriter::new(Cursor::new(&mut buffer));
            let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

            for entry in entries {
                archive
                    .start_file(entry.filename.as_str(), options)
                    .map_err(|e| {
                        ArchiveWriterError::Entry(entry.filename.clone(), e.to_string())
                    })?;
                archive.write_all(&entry.bytes).map_err(|e| {
                    ArchiveWriterError::Entry(entry.filename.clone(), e.to_string())
                })?;
            }

            archive
                .finish()
                .map_err(|e| ArchiveWriterError::Serialization(e.to_string()))?;
        }

        Ok(buffer)
    }
}
