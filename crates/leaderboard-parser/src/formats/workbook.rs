use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader};

use crate::errors::TableError;
use crate::model::{CellValue, RawTable};
use crate::registry::TableReader;

use super::{header_name, is_missing_token};

/// Spreadsheet workbooks. Only the first worksheet is read.
pub struct WorkbookReader;

impl Default for WorkbookReader {
    fn default() -> Self {
        Self
    }
}

impl WorkbookReader {
    const NAME: &'static str = "WORKBOOK";

    /// Builds a table from a worksheet range whose first row holds the headers.
    pub fn table_from_range(&self, range: &Range<Data>) -> Result<RawTable, TableError> {
        let mut rows = range.rows();
        let header = rows
            .next()
            .ok_or(TableError::MissingHeader { reader: Self::NAME })?;

        let columns: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(index, cell)| match cell {
                Data::String(value) => header_name(value, index),
                other => header_name(&cell_value(other).to_string(), index),
            })
            .collect();

        let body = rows
            .map(|row| row.iter().map(cell_value).collect::<Vec<_>>())
            .collect();

        Ok(RawTable::new(columns, body))
    }
}

impl TableReader for WorkbookReader {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn read(&self, path: &Path) -> Result<RawTable, TableError> {
        if !path.exists() {
            return Err(TableError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let mut workbook = open_workbook_auto(path).map_err(|source| TableError::Workbook {
            reader: Self::NAME,
            source,
        })?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(TableError::NoWorksheet { reader: Self::NAME })?
            .map_err(|source| TableError::Workbook {
                reader: Self::NAME,
                source,
            })?;
        self.table_from_range(&range)
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) if value.is_finite() => CellValue::Number(*value),
        Data::Float(_) => CellValue::Empty,
        // Typed strings stay text even when they look numeric.
        Data::String(value) if is_missing_token(value.trim()) => CellValue::Empty,
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Bool(true) => CellValue::Text("True".to_string()),
        Data::Bool(false) => CellValue::Text("False".to_string()),
        other => {
            let rendered = other.to_string();
            if is_missing_token(rendered.trim()) {
                CellValue::Empty
            } else {
                CellValue::Text(rendered)
            }
        }
    }
}
