// crates/leaderboard-core/src/error.rs

use std::path::PathBuf;

use leaderboard_parser::TableError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Source file not found at: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error(
        "Could not detect required columns. Found columns: {columns:?}\n\
         Attempted to match '{badges_target}' and '{arcade_target}' first."
    )]
    SchemaResolution {
        columns: Vec<String>,
        badges_target: &'static str,
        arcade_target: &'static str,
    },

    #[error("Malformed source {}: {source}", path.display())]
    MalformedSource {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

impl LoadError {
    pub(crate) fn from_table(path: PathBuf, source: TableError) -> Self {
        if source.is_not_found() {
            LoadError::SourceNotFound { path }
        } else {
            LoadError::MalformedSource { path, source }
        }
    }

    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            return LoadError::SourceNotFound { path };
        }
        let source = TableError::Io {
            path: path.clone(),
            source,
        };
        LoadError::MalformedSource { path, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadError::SourceNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, LoadError>;
