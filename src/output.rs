//! Rendering answers and failures for the console.

use serde_json::Value;

use crate::{error::ChatError, nba::types::Answer, Table};

/// Marker printed before a failure message.
pub const FAILURE_MARK: &str = "❌";

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn pad_line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(v, w)| format!("{:<width$}", v, width = *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Aligned text table: header, dashed rule, one line per row, no index.
pub fn render_table(table: &Table) -> String {
    let cells: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    let widths: Vec<usize> = table
        .columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(name.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = Vec::with_capacity(cells.len() + 2);
    out.push(pad_line(table.columns.iter().map(String::as_str), &widths));
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        out.push(pad_line(row.iter().map(String::as_str), &widths));
    }
    out.join("\n")
}

/// Table rows as a pretty JSON array of `{column: value}` objects.
pub fn render_json(table: &Table) -> String {
    serde_json::to_string_pretty(&table.to_records()).unwrap_or_else(|_| "[]".to_string())
}

/// Console text for a successful answer.
pub fn render_answer(answer: &Answer, as_json: bool) -> String {
    match answer {
        Answer::Table(table) if as_json => render_json(table),
        Answer::Table(table) => render_table(table),
        Answer::Text(text) => text.clone(),
    }
}

/// Console text for a failed query.
pub fn render_error(err: &ChatError) -> String {
    format!("{} {}", FAILURE_MARK, err)
}
