use std::fs;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};

use crate::errors::TableError;
use crate::model::{CellValue, RawTable};
use crate::registry::TableReader;

use super::{header_name, parse_text_cell};

/// Comma-delimited text with a header row.
pub struct DelimitedReader;

impl Default for DelimitedReader {
    fn default() -> Self {
        Self
    }
}

impl DelimitedReader {
    const NAME: &'static str = "DELIMITED";

    pub fn parse_reader<R: Read>(&self, input: R) -> Result<RawTable, TableError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);

        let headers = reader.byte_headers().map_err(|source| TableError::Csv {
            reader: Self::NAME,
            source,
        })?;
        if headers.is_empty() {
            return Err(TableError::MissingHeader { reader: Self::NAME });
        }
        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .map(|(index, field)| header_name(&String::from_utf8_lossy(field), index))
            .collect();

        let mut rows = Vec::new();
        let mut record = ByteRecord::new();
        loop {
            let more = reader
                .read_byte_record(&mut record)
                .map_err(|source| TableError::Csv {
                    reader: Self::NAME,
                    source,
                })?;
            if !more {
                break;
            }
            // Short rows are padded later; extra fields have no column to land in.
            if record.len() > columns.len() {
                return Err(TableError::RowTooWide {
                    reader: Self::NAME,
                    line: record.position().map(|pos| pos.line()).unwrap_or_default(),
                    expected: columns.len(),
                    found: record.len(),
                });
            }
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| parse_text_cell(&String::from_utf8_lossy(field)))
                .collect();
            rows.push(row);
        }

        Ok(RawTable::new(columns, rows))
    }
}

impl TableReader for DelimitedReader {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn read(&self, path: &Path) -> Result<RawTable, TableError> {
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => TableError::NotFound {
                path: path.to_path_buf(),
            },
            _ => TableError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        self.parse_reader(bytes.as_slice())
    }
}
