use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, Timelike};
use leaderboard_parser::read_table;
use tracing::info;

use crate::error::{LoadError, Result};
use crate::records::{build_snapshot, LeaderboardSnapshot};

/// Reads the source file from scratch and builds a ranked snapshot.
///
/// Nothing is cached between calls, so concurrent callers each do their own read.
pub fn load_leaderboard(path: &Path) -> Result<LeaderboardSnapshot> {
    let table = read_table(path).map_err(|err| LoadError::from_table(path.to_path_buf(), err))?;
    let generated_at = modified_timestamp(path)?;
    let snapshot = build_snapshot(&table, generated_at)?;

    info!(
        path = %path.display(),
        rows = table.row_count(),
        generated_at = %snapshot.generated_at,
        "leaderboard loaded"
    );
    Ok(snapshot)
}

/// The file's modification time as a local ISO-8601 timestamp without offset.
pub fn modified_timestamp(path: &Path) -> Result<String> {
    let modified = fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map_err(|err| LoadError::from_io(path.to_path_buf(), err))?;
    Ok(format_local_timestamp(DateTime::<Local>::from(modified)))
}

pub fn format_local_timestamp(timestamp: DateTime<Local>) -> String {
    let naive = timestamp.naive_local();
    if naive.nanosecond() / 1_000 == 0 {
        naive.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        naive.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn whole_seconds_omit_fraction() {
        let ts = Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(format_local_timestamp(ts), "2025-03-04T05:06:07");
    }

    #[test]
    fn fractional_seconds_use_microseconds() {
        let ts = Local.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap()
            + chrono::Duration::microseconds(120_500);
        assert_eq!(format_local_timestamp(ts), "2025-03-04T05:06:07.120500");
    }
}
