use std::cmp::Ordering;

use leaderboard_parser::RawTable;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::extract::{clean_name, coerce_metric, extract_two_numbers};
use crate::schema::{resolve_columns, ColumnRoles};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Badges")]
    pub badges: u64,
    #[serde(rename = "Arcade")]
    pub arcade: u64,
}

impl LeaderboardRecord {
    pub fn new(name: impl Into<String>, badges: u64, arcade: u64) -> Self {
        Self {
            name: name.into(),
            badges,
            arcade,
        }
    }

    /// Badges descending, then arcade descending, then name ascending.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .badges
            .cmp(&self.badges)
            .then_with(|| other.arcade.cmp(&self.arcade))
            .then_with(|| self.name.cmp(&other.name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardSnapshot {
    pub generated_at: String,
    pub records: Vec<LeaderboardRecord>,
}

/// One record per row, in source order.
pub fn build_records(table: &RawTable, roles: &ColumnRoles) -> Vec<LeaderboardRecord> {
    table
        .rows()
        .iter()
        .map(|row| {
            let name = clean_name(&row[roles.name]);
            let (badges, arcade) = if roles.is_combined() {
                extract_two_numbers(&row[roles.badges])
            } else {
                (coerce_metric(&row[roles.badges]), coerce_metric(&row[roles.arcade]))
            };
            LeaderboardRecord {
                name,
                badges,
                arcade,
            }
        })
        .collect()
}

pub fn rank_records(records: &mut [LeaderboardRecord]) {
    records.sort_by(LeaderboardRecord::rank_cmp);
}

pub fn build_snapshot(table: &RawTable, generated_at: String) -> Result<LeaderboardSnapshot> {
    let roles = resolve_columns(table)?;
    let columns = table.columns();
    info!(
        name = %columns[roles.name],
        badges = %columns[roles.badges],
        arcade = %columns[roles.arcade],
        combined = roles.is_combined(),
        "resolved leaderboard columns"
    );

    let mut records = build_records(table, &roles);
    rank_records(&mut records);

    Ok(LeaderboardSnapshot {
        generated_at,
        records,
    })
}

#[cfg(test)]
mod tests {
    use leaderboard_parser::CellValue;

    use super::*;

    #[test]
    fn ranking_breaks_ties_by_arcade_then_name() {
        let mut records = vec![
            LeaderboardRecord::new("Zed", 3, 1),
            LeaderboardRecord::new("Amy", 3, 1),
            LeaderboardRecord::new("Bea", 3, 4),
            LeaderboardRecord::new("Cal", 9, 0),
        ];
        rank_records(&mut records);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Cal", "Bea", "Amy", "Zed"]);
    }

    #[test]
    fn combined_roles_split_one_cell() {
        let table = RawTable::new(
            vec!["Name".into(), "Progress".into()],
            vec![vec![CellValue::from("Dana"), CellValue::from("8/2")]],
        );
        let roles = ColumnRoles {
            name: 0,
            badges: 1,
            arcade: 1,
        };

        let records = build_records(&table, &roles);
        assert_eq!(records, vec![LeaderboardRecord::new("Dana", 8, 2)]);
    }

    #[test]
    fn separate_roles_coerce_each_cell() {
        let table = RawTable::new(
            vec!["Name".into(), "B".into(), "A".into()],
            vec![
                vec![CellValue::from(" Eve "), CellValue::from(4i64), CellValue::from("n/a?")],
                vec![CellValue::Empty, CellValue::from("7"), CellValue::from(2.9)],
            ],
        );
        let roles = ColumnRoles {
            name: 0,
            badges: 1,
            arcade: 2,
        };

        let records = build_records(&table, &roles);
        assert_eq!(
            records,
            vec![
                LeaderboardRecord::new("Eve", 4, 0),
                LeaderboardRecord::new("", 7, 2),
            ]
        );
    }

    #[test]
    fn records_serialize_with_display_keys() {
        let json = serde_json::to_value(LeaderboardRecord::new("Ann", 2, 1)).expect("json");
        assert_eq!(json, serde_json::json!({"Name": "Ann", "Badges": 2, "Arcade": 1}));
    }
}
