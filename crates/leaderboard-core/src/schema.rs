//! Column role resolution.
//!
//! Headers in the wild rarely match a fixed schema, so roles are found by running an
//! ordered list of [`ResolutionRule`]s over a [`TableProfile`]. Each rule sees the roles
//! filled so far and returns the updated assignment; later rules only fill what is still
//! missing, with the combined-column rule as the one exception.

use std::fmt;

use leaderboard_parser::RawTable;
use tracing::{debug, warn};

use crate::error::LoadError;

pub const BADGES_HEADER: &str = "# of Skill Badges Completed";
pub const ARCADE_HEADER: &str = "# of Arcade Games Completed";

const NAME_HEADERS: [&str; 4] = ["name", "user name", "username", "user"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Name,
    Badges,
    Arcade,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Name => "name",
            Role::Badges => "badges",
            Role::Arcade => "arcade",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub index: usize,
    pub header: String,
    pub normalized: String,
    pub numeric: bool,
}

impl ColumnProfile {
    pub fn new(index: usize, header: &str, numeric: bool) -> Self {
        Self {
            index,
            header: header.to_string(),
            normalized: header.trim().to_lowercase(),
            numeric,
        }
    }

    fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.normalized.contains(keyword))
    }
}

/// What the rules get to see of a table: normalized headers and per-column typing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableProfile {
    columns: Vec<ColumnProfile>,
}

impl TableProfile {
    pub fn from_table(table: &RawTable) -> Self {
        let columns = table
            .columns()
            .iter()
            .enumerate()
            .map(|(index, header)| ColumnProfile::new(index, header, table.is_numeric_column(index)))
            .collect();
        Self { columns }
    }

    pub fn from_headers(headers: &[(&str, bool)]) -> Self {
        let columns = headers
            .iter()
            .enumerate()
            .map(|(index, (header, numeric))| ColumnProfile::new(index, header, *numeric))
            .collect();
        Self { columns }
    }

    pub fn columns(&self) -> &[ColumnProfile] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|col| col.header.clone()).collect()
    }

    fn first_where(&self, predicate: impl Fn(&ColumnProfile) -> bool) -> Option<usize> {
        self.columns
            .iter()
            .find(|col| predicate(col))
            .map(|col| col.index)
    }

    fn last_where(&self, predicate: impl Fn(&ColumnProfile) -> bool) -> Option<usize> {
        self.columns
            .iter()
            .rev()
            .find(|col| predicate(col))
            .map(|col| col.index)
    }

    fn numeric_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns
            .iter()
            .filter(|col| col.numeric)
            .map(|col| col.index)
    }
}

/// Roles assigned so far, by column index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialRoles {
    pub name: Option<usize>,
    pub badges: Option<usize>,
    pub arcade: Option<usize>,
}

impl PartialRoles {
    pub fn get(&self, role: Role) -> Option<usize> {
        match role {
            Role::Name => self.name,
            Role::Badges => self.badges,
            Role::Arcade => self.arcade,
        }
    }

    pub fn metrics_complete(&self) -> bool {
        self.badges.is_some() && self.arcade.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.metrics_complete()
    }

    pub fn complete(self) -> Option<ColumnRoles> {
        Some(ColumnRoles {
            name: self.name?,
            badges: self.badges?,
            arcade: self.arcade?,
        })
    }

    fn fill(self, role: Role, column: Option<usize>) -> Self {
        match role {
            Role::Name => Self {
                name: self.name.or(column),
                ..self
            },
            Role::Badges => Self {
                badges: self.badges.or(column),
                ..self
            },
            Role::Arcade => Self {
                arcade: self.arcade.or(column),
                ..self
            },
        }
    }
}

/// Fully resolved roles. `badges == arcade` means one column carries both metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRoles {
    pub name: usize,
    pub badges: usize,
    pub arcade: usize,
}

impl ColumnRoles {
    pub fn is_combined(&self) -> bool {
        self.badges == self.arcade
    }
}

pub trait ResolutionRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, profile: &TableProfile, roles: PartialRoles) -> PartialRoles;
}

/// `name`, `user name`, `username` or `user`, first in column order.
pub struct ExactNameRule;

impl ResolutionRule for ExactNameRule {
    fn name(&self) -> &'static str {
        "exact_name"
    }

    fn apply(&self, profile: &TableProfile, roles: PartialRoles) -> PartialRoles {
        let found = profile.first_where(|col| NAME_HEADERS.contains(&col.normalized.as_str()));
        roles.fill(Role::Name, found)
    }
}

/// The two canonical metric headers. The last column carrying a header wins.
pub struct ExactMetricRule;

impl ResolutionRule for ExactMetricRule {
    fn name(&self) -> &'static str {
        "exact_metric"
    }

    fn apply(&self, profile: &TableProfile, roles: PartialRoles) -> PartialRoles {
        let badges_target = BADGES_HEADER.to_lowercase();
        let arcade_target = ARCADE_HEADER.to_lowercase();
        let badges = profile.last_where(|col| col.normalized == badges_target);
        let arcade = profile.last_where(|col| col.normalized == arcade_target);
        roles
            .fill(Role::Badges, badges)
            .fill(Role::Arcade, arcade)
    }
}

/// First column whose normalized header contains any of the keywords.
pub struct KeywordRule {
    pub label: &'static str,
    pub role: Role,
    pub keywords: &'static [&'static str],
}

pub const NAME_KEYWORDS: KeywordRule = KeywordRule {
    label: "name_keyword",
    role: Role::Name,
    keywords: &["name", "player", "user"],
};

pub const BADGES_KEYWORDS: KeywordRule = KeywordRule {
    label: "badges_keyword",
    role: Role::Badges,
    keywords: &["badge", "skill", "medal"],
};

pub const ARCADE_KEYWORDS: KeywordRule = KeywordRule {
    label: "arcade_keyword",
    role: Role::Arcade,
    keywords: &["arcade", "game", "played"],
};

impl ResolutionRule for KeywordRule {
    fn name(&self) -> &'static str {
        self.label
    }

    fn apply(&self, profile: &TableProfile, roles: PartialRoles) -> PartialRoles {
        if roles.get(self.role).is_some() {
            return roles;
        }
        let found = profile.first_where(|col| col.contains_any(self.keywords));
        roles.fill(self.role, found)
    }
}

/// A single header naming both metrics, e.g. "Skill Badges / Arcade Games".
///
/// Only kicks in while a metric is still missing, and then takes both metric roles even
/// if one of them was already assigned.
pub struct CombinedColumnRule;

impl CombinedColumnRule {
    const BADGE_WORDS: [&'static str; 3] = ["badge", "skill", "badg"];
    const GAME_WORDS: [&'static str; 3] = ["game", "arcade", "play"];
}

impl ResolutionRule for CombinedColumnRule {
    fn name(&self) -> &'static str {
        "combined_column"
    }

    fn apply(&self, profile: &TableProfile, roles: PartialRoles) -> PartialRoles {
        let Some(combined) = profile.first_where(|col| {
            col.contains_any(&Self::BADGE_WORDS) && col.contains_any(&Self::GAME_WORDS)
        }) else {
            return roles;
        };
        if roles.metrics_complete() {
            return roles;
        }

        for (role, current) in [(Role::Badges, roles.badges), (Role::Arcade, roles.arcade)] {
            if let Some(current) = current.filter(|current| *current != combined) {
                warn!(
                    role = %role,
                    replaced = current,
                    combined,
                    "combined column replaces resolved metric column"
                );
            }
        }

        PartialRoles {
            badges: Some(combined),
            arcade: Some(combined),
            ..roles
        }
    }
}

/// Positional guess for tables with exactly three columns: name first, metrics after,
/// preferring numeric columns for the metrics.
pub struct ThreeColumnRule;

impl ResolutionRule for ThreeColumnRule {
    fn name(&self) -> &'static str {
        "three_column"
    }

    fn apply(&self, profile: &TableProfile, roles: PartialRoles) -> PartialRoles {
        if roles.is_complete() || profile.len() != 3 {
            return roles;
        }

        let name = roles.name.unwrap_or(0);
        let remaining: Vec<usize> = (0..profile.len()).filter(|idx| *idx != name).collect();
        let numeric: Vec<usize> = profile.numeric_columns().collect();
        let possible: Vec<usize> = numeric.iter().copied().filter(|idx| *idx != name).collect();
        let candidates = if numeric.len() >= 2 && possible.len() >= 2 {
            possible
        } else {
            remaining
        };

        let roles = roles.fill(Role::Name, Some(name));
        match candidates[..] {
            [first, second, ..] => roles
                .fill(Role::Badges, Some(first))
                .fill(Role::Arcade, Some(second)),
            _ => roles,
        }
    }
}

/// First two numeric columns other than the name column.
pub struct NumericFallbackRule;

impl ResolutionRule for NumericFallbackRule {
    fn name(&self) -> &'static str {
        "numeric_fallback"
    }

    fn apply(&self, profile: &TableProfile, roles: PartialRoles) -> PartialRoles {
        if roles.metrics_complete() {
            return roles;
        }
        let numeric: Vec<usize> = profile
            .numeric_columns()
            .filter(|idx| Some(*idx) != roles.name)
            .collect();
        match numeric[..] {
            [first, second, ..] => roles
                .fill(Role::Badges, Some(first))
                .fill(Role::Arcade, Some(second)),
            _ => roles,
        }
    }
}

static DEFAULT_RULES: [&dyn ResolutionRule; 8] = [
    &ExactNameRule,
    &ExactMetricRule,
    &NAME_KEYWORDS,
    &BADGES_KEYWORDS,
    &ARCADE_KEYWORDS,
    &CombinedColumnRule,
    &ThreeColumnRule,
    &NumericFallbackRule,
];

pub fn default_rules() -> &'static [&'static dyn ResolutionRule] {
    &DEFAULT_RULES
}

/// Runs every rule in order. Rules never short-circuit the cascade.
pub fn apply_rules(profile: &TableProfile, rules: &[&dyn ResolutionRule]) -> PartialRoles {
    rules.iter().fold(PartialRoles::default(), |roles, rule| {
        let next = rule.apply(profile, roles);
        if next != roles {
            debug!(rule = rule.name(), before = ?roles, after = ?next, "resolution rule assigned roles");
        }
        next
    })
}

pub fn resolve_profile(profile: &TableProfile) -> Result<ColumnRoles, LoadError> {
    apply_rules(profile, default_rules())
        .complete()
        .ok_or_else(|| LoadError::SchemaResolution {
            columns: profile.headers(),
            badges_target: BADGES_HEADER,
            arcade_target: ARCADE_HEADER,
        })
}

pub fn resolve_columns(table: &RawTable) -> Result<ColumnRoles, LoadError> {
    resolve_profile(&TableProfile::from_table(table))
}
