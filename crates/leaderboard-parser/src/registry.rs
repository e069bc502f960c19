use std::path::Path;

use crate::errors::TableError;
use crate::formats::{DelimitedReader, WorkbookReader};
use crate::model::RawTable;

pub trait TableReader {
    fn name(&self) -> &'static str;
    fn read(&self, path: &Path) -> Result<RawTable, TableError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Delimited,
}

impl SourceFormat {
    const WORKBOOK_EXTENSIONS: [&'static str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

    /// Picks the format from the file extension alone; contents are never sniffed.
    pub fn from_path(path: &Path) -> Self {
        let is_workbook = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                Self::WORKBOOK_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            })
            .unwrap_or(false);

        if is_workbook {
            SourceFormat::Workbook
        } else {
            SourceFormat::Delimited
        }
    }
}

pub fn read_table(path: &Path) -> Result<RawTable, TableError> {
    match SourceFormat::from_path(path) {
        SourceFormat::Workbook => read_with_reader(path, &WorkbookReader),
        SourceFormat::Delimited => read_with_reader(path, &DelimitedReader),
    }
}

pub fn read_with_reader(path: &Path, reader: &dyn TableReader) -> Result<RawTable, TableError> {
    if !path.exists() {
        return Err(TableError::NotFound {
            path: path.to_path_buf(),
        });
    }
    reader.read(path)
}
