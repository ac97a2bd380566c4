//! Typed columns.
//!
//! Every column of a loaded table carries exactly one typed payload, decided
//! once by the loader's typing pass. Validators match on the payload instead
//! of re-parsing cell text.

use std::fmt;

use chrono::NaiveDateTime;

use crate::value::CellValue;

/// Semantic type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Text,
    Integer,
    Decimal,
    Timestamp,
    /// No non-null cell to infer from.
    Unknown,
}

impl ColumnType {
    /// Parse an expected-type token from a rule parameter.
    ///
    /// Accepts the English names and the Spanish tokens used by existing
    /// rule files (`texto`, `entero`, `decimal`, `fecha`). `Unknown` is never
    /// a valid expectation.
    pub fn parse_expected(token: &str) -> Option<Self> {
        match token.trim().trim_matches('"').to_lowercase().as_str() {
            "text" | "texto" | "string" => Some(Self::Text),
            "integer" | "entero" | "int" => Some(Self::Integer),
            "decimal" | "float" => Some(Self::Decimal),
            "timestamp" | "fecha" | "date" | "datetime" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Timestamp => "timestamp",
            Self::Unknown => "unknown",
        }
    }

    /// Integer or decimal.
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer | Self::Decimal)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cell storage for one column, one variant per semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Text(Vec<Option<String>>),
    Integer(Vec<Option<i64>>),
    Decimal(Vec<Option<f64>>),
    Timestamp(Vec<Option<NaiveDateTime>>),
    /// All cells null; only the length is kept.
    Unknown(usize),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Text(values) => values.len(),
            Self::Integer(values) => values.len(),
            Self::Decimal(values) => values.len(),
            Self::Timestamp(values) => values.len(),
            Self::Unknown(len) => *len,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Self::Text(_) => ColumnType::Text,
            Self::Integer(_) => ColumnType::Integer,
            Self::Decimal(_) => ColumnType::Decimal,
            Self::Timestamp(_) => ColumnType::Timestamp,
            Self::Unknown(_) => ColumnType::Unknown,
        }
    }

    /// Borrowed view of the cell at `row`; out-of-range rows read as null.
    pub fn get(&self, row: usize) -> CellValue<'_> {
        let value = match self {
            Self::Text(values) => values
                .get(row)
                .and_then(Option::as_deref)
                .map(CellValue::Text),
            Self::Integer(values) => values.get(row).copied().flatten().map(CellValue::Integer),
            Self::Decimal(values) => values.get(row).copied().flatten().map(CellValue::Decimal),
            Self::Timestamp(values) => values
                .get(row)
                .copied()
                .flatten()
                .map(CellValue::Timestamp),
            Self::Unknown(_) => None,
        };
        value.unwrap_or(CellValue::Null)
    }

    /// Iterate over every cell in row order.
    pub fn iter(&self) -> impl Iterator<Item = CellValue<'_>> + '_ {
        (0..self.len()).map(move |row| self.get(row))
    }

    pub fn null_count(&self) -> usize {
        self.iter().filter(CellValue::is_null).count()
    }

    /// Numeric view of a cell (integers widened to `f64`).
    pub fn numeric(&self, row: usize) -> Option<f64> {
        match self.get(row) {
            CellValue::Integer(value) => Some(value as f64),
            CellValue::Decimal(value) => Some(value),
            _ => None,
        }
    }
}

/// A named, typed column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn text<S: Into<String>>(name: &str, values: Vec<Option<S>>) -> Self {
        Self::new(
            name,
            ColumnData::Text(values.into_iter().map(|v| v.map(Into::into)).collect()),
        )
    }

    pub fn integer(name: &str, values: Vec<Option<i64>>) -> Self {
        Self::new(name, ColumnData::Integer(values))
    }

    pub fn decimal(name: &str, values: Vec<Option<f64>>) -> Self {
        Self::new(name, ColumnData::Decimal(values))
    }

    pub fn timestamp(name: &str, values: Vec<Option<NaiveDateTime>>) -> Self {
        Self::new(name, ColumnData::Timestamp(values))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn column_type(&self) -> ColumnType {
        self.data.column_type()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize) -> CellValue<'_> {
        self.data.get(row)
    }

    pub fn iter(&self) -> impl Iterator<Item = CellValue<'_>> + '_ {
        self.data.iter()
    }
}
