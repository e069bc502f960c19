mod common;
mod delimited;
mod workbook;

pub use delimited::DelimitedReader;
pub use workbook::WorkbookReader;

pub(crate) use common::{header_name, is_missing_token, parse_text_cell};
