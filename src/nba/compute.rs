use chrono::NaiveDate;
use serde_json::Value;
use std::cmp::Ordering;

use super::types::Table;
use crate::{cli::types::PerMode, config::AttemptThresholds, error::ChatError, Result};


/// Sentinel for a stat cell that is missing or not numeric.
pub const NOT_AVAILABLE: &str = "N/A";

/// Index of a stat column, or `StatNotFound` naming both spellings.
pub fn require_stat_column(table: &Table, requested: &str, column: &str) -> Result<usize> {
    table
        .column_index(column)
        .ok_or_else(|| ChatError::StatNotFound {
            requested: requested.to_string(),
            column: column.to_string(),
        })
}

/// Drop rows below the attempt minimum for a percentage stat.
///
/// Thresholds are season totals, so in per-game mode the attempts column is
/// scaled by games played. Non-percentage stats are left untouched, as are
/// tables without the attempts column.
pub fn filter_min_attempts(
    table: &mut Table,
    stat_key: &str,
    thresholds: &AttemptThresholds,
    per_mode: PerMode,
) {
    let Some((attempts_col, minimum)) = thresholds.minimum_for(stat_key) else {
        return;
    };
    let Some(attempts_idx) = table.column_index(attempts_col) else {
        return;
    };
    let games_idx = table.column_index("GP");

    table.retain_rows(|t, row| {
        let Some(attempts) = t.number(row, attempts_idx) else {
            return false;
        };
        let total = match (per_mode, games_idx) {
            (PerMode::PerGame, Some(gp)) => attempts * t.number(row, gp).unwrap_or(0.0),
            _ => attempts,
        };
        total >= minimum
    });
}

/// Stable sort by a numeric column, largest first; non-numeric cells sink.
pub fn sort_desc_by(table: &mut Table, col: usize) {
    let key = |row: &Vec<Value>| row.get(col).and_then(super::types::cell_number);
    table.rows.sort_by(|a, b| match (key(a), key(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Mean of a numeric column and how many rows contributed.
pub fn column_mean(table: &Table, col: usize) -> Option<(f64, usize)> {
    let values: Vec<f64> = (0..table.len())
        .filter_map(|row| table.number(row, col))
        .collect();
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some((sum / values.len() as f64, values.len()))
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// JSON number rounded to `places`, or `null` when not finite.
pub fn rounded_value(value: f64, places: i32) -> Value {
    serde_json::Number::from_f64(round_to(value, places))
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

/// Parse the game dates the stats service emits ("APR 13, 2025" or ISO).
pub fn parse_game_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    ["%b %d, %Y", "%Y-%m-%d", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Split a combined "W-L" record string into wins and losses.
pub fn split_record(record: &str) -> Option<(u32, u32)> {
    let (wins, losses) = record.trim().split_once('-')?;
    Some((wins.trim().parse().ok()?, losses.trim().parse().ok()?))
}
