use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cli::types::{PlayerId, TeamId};


/// One `resultSets` entry as returned by the stats service.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

/// Top-level envelope; most endpoints use `resultSets`, a few `resultSet`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEnvelope {
    #[serde(rename = "resultSets", alias = "resultSet")]
    pub result_sets: ResultSets,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ResultSets {
    Many(Vec<ResultSet>),
    One(ResultSet),
}

impl StatsEnvelope {
    /// Pull out the named result set, or the first one when `name` is `None`.
    pub fn into_table(self, name: Option<&str>) -> Option<Table> {
        let sets = match self.result_sets {
            ResultSets::Many(sets) => sets,
            ResultSets::One(set) => vec![set],
        };
        let set = match name {
            Some(name) => sets.into_iter().find(|s| s.name == name)?,
            None => sets.into_iter().next()?,
        };
        Some(Table::new(set.headers, set.row_set))
    }
}

/// Named columns over ordered rows of JSON cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    pub fn with_columns<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Index of the first column present out of several spellings.
    pub fn first_column_of(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|n| self.column_index(n))
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row)?.get(col)
    }

    /// Numeric value of a cell; numeric strings count too.
    pub fn number(&self, row: usize, col: usize) -> Option<f64> {
        cell_number(self.cell(row, col)?)
    }

    /// Text value of a cell.
    pub fn text(&self, row: usize, col: usize) -> Option<String> {
        match self.cell(row, col)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Keep only rows for which `keep(table, row_index)` holds.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Table, usize) -> bool,
    {
        let keep_flags: Vec<bool> = (0..self.rows.len()).map(|i| keep(self, i)).collect();
        let mut flags = keep_flags.into_iter();
        self.rows.retain(|_| flags.next().unwrap_or(false));
    }

    /// New table with the given columns (in order); `None` if any is missing.
    pub fn project(&self, names: &[&str]) -> Option<Table> {
        let idx: Vec<usize> = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Option<_>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| {
                idx.iter()
                    .map(|&i| row.get(i).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Some(Table::new(names.iter().map(|s| s.to_string()).collect(), rows))
    }

    /// Rows as `{column: value}` objects, for JSON output.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }
}

/// Numeric value of a JSON cell; numeric strings count too.
pub fn cell_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A successful answer to a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Table(Table),
    Text(String),
}

impl Answer {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Answer::Table(t) => Some(t),
            Answer::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Answer::Text(s) => Some(s),
            Answer::Table(_) => None,
        }
    }
}

/// Entry from the player index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub full_name: String,
    pub is_active: bool,
}

/// Static franchise record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamRef {
    pub id: TeamId,
    pub full_name: &'static str,
    pub abbreviation: &'static str,
    pub nickname: &'static str,
    pub city: &'static str,
}
