use leaderboard_parser::CellValue;
use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/&;,\\|-]+").unwrap());

/// Trims surrounding whitespace, then drops every ASCII control character.
pub fn clean_name(cell: &CellValue) -> String {
    if cell.is_empty() {
        return String::new();
    }
    cell.to_string()
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect()
}

/// Pulls up to two integers out of a cell such as `"12/7"` or `"12 badges, 7 games"`.
pub fn extract_two_numbers(cell: &CellValue) -> (u64, u64) {
    if cell.is_empty() {
        return (0, 0);
    }
    let text = cell.to_string();

    let runs = digit_runs(&text);
    if !runs.is_empty() {
        return first_two(&runs);
    }

    // Only reached for text without any digits.
    let runs: Vec<u64> = SEPARATORS
        .split(&text)
        .flat_map(digit_runs)
        .collect();
    first_two(&runs)
}

/// Turns a single metric cell into a count. Anything that is not a finite, non-negative
/// number becomes `0`.
pub fn coerce_metric(cell: &CellValue) -> u64 {
    let value = match cell {
        CellValue::Empty => return 0,
        CellValue::Number(value) => *value,
        CellValue::Text(text) => match text.trim().parse::<f64>() {
            Ok(value) => value,
            Err(_) => return 0,
        },
    };
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.trunc() as u64
}

fn digit_runs(text: &str) -> Vec<u64> {
    DIGIT_RUN
        .find_iter(text)
        .map(|run| run.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .collect()
}

fn first_two(runs: &[u64]) -> (u64, u64) {
    match runs {
        [first, second, ..] => (*first, *second),
        [only] => (*only, 0),
        [] => (0, 0),
    }
}
