use std::path::PathBuf;

/// Paths the handlers read on every request. Nothing loaded from them is kept around.
#[derive(Debug, Clone)]
pub struct AppState {
    pub source: PathBuf,
    pub display_page: PathBuf,
}

impl AppState {
    pub fn new(source: impl Into<PathBuf>, display_page: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            display_page: display_page.into(),
        }
    }
}
