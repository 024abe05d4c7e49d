use async_trait::async_trait;
use csv::ReaderBuilder;

use crate::application::ports::{NameListParseError, NameListParser};
use crate::domain::NameList;

/// Reads the first column of a headerless CSV into an ordered name list.
///
/// Rows may carry extra columns; only the first is taken. Any parse error
/// (malformed quoting, invalid UTF-8) aborts the whole list.
#[derive(Debug, Default)]
pub struct CsvNameListParser;

impl CsvNameListParser {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NameListParser for CsvNameListParser {
    async fn parse(&self, data: &[u8]) -> Result<NameList, NameListParseError> {
        if data.is_empty() {
            return Ok(NameList::empty());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut names = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| NameListParseError::Malformed(e.to_string()))?;
            names.push(record.get(0).unwrap_or_default().to_string());
        }

        Ok(NameList::new(names))
    }
}
