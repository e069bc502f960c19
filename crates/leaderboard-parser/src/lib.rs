pub mod errors;
pub mod formats;
pub mod model;
mod registry;

pub use errors::TableError;
pub use model::{CellValue, RawTable};
pub use registry::{read_table, read_with_reader, SourceFormat, TableReader};

#[cfg(test)]
mod tests;
