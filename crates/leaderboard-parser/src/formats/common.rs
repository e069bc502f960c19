use crate::model::CellValue;

/// Tokens that stand for a missing value when found alone in a cell.
const MISSING_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub(crate) fn is_missing_token(trimmed: &str) -> bool {
    trimmed.is_empty() || MISSING_VALUE_TOKENS.contains(&trimmed)
}

/// Types a cell that arrived as plain text, as delimited files do.
pub(crate) fn parse_text_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if is_missing_token(trimmed) {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => CellValue::Number(value),
        _ => CellValue::Text(raw.to_string()),
    }
}

pub(crate) fn header_name(raw: &str, index: usize) -> String {
    let raw = if index == 0 {
        raw.trim_start_matches('\u{feff}')
    } else {
        raw
    };
    if raw.trim().is_empty() {
        format!("Unnamed: {index}")
    } else {
        raw.to_string()
    }
}
