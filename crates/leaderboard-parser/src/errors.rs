use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("source file not found at: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{reader} CSV error: {source}")]
    Csv {
        reader: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{reader} line {line} has {found} fields but the header has {expected}")]
    RowTooWide {
        reader: &'static str,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{reader} workbook error: {source}")]
    Workbook {
        reader: &'static str,
        #[source]
        source: calamine::Error,
    },

    #[error("{reader} workbook did not contain any worksheets")]
    NoWorksheet { reader: &'static str },

    #[error("{reader} file did not contain a header row")]
    MissingHeader { reader: &'static str },
}

impl TableError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TableError::NotFound { .. })
    }
}
