pub mod error;
pub mod extract;
pub mod loader;
pub mod records;
pub mod schema;

pub use error::{LoadError, Result};
pub use loader::{load_leaderboard, modified_timestamp};
pub use records::{build_snapshot, LeaderboardRecord, LeaderboardSnapshot};
pub use schema::{resolve_columns, ColumnRoles};

pub use leaderboard_parser::{CellValue, RawTable};
