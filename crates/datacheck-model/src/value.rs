//! Cell values and their hashable keys.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

/// Display format for timestamp cells.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d", "%Y%m%d"];

/// Parse a date or datetime in one of the accepted formats.
///
/// Dates without a time component land on midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Borrowed view of a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CellValue<'a> {
    Null,
    Text(&'a str),
    Integer(i64),
    Decimal(f64),
    Timestamp(NaiveDateTime),
}

impl CellValue<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Owned key with total equality, used for row and value comparisons.
    pub fn key(&self) -> CellKey {
        match *self {
            Self::Null => CellKey::Null,
            Self::Text(value) => CellKey::Text(value.to_string()),
            Self::Integer(value) => CellKey::Integer(value),
            // -0.0 and 0.0 must collide
            Self::Decimal(value) if value == 0.0 => CellKey::Decimal(0.0f64.to_bits()),
            Self::Decimal(value) => CellKey::Decimal(value.to_bits()),
            Self::Timestamp(value) => CellKey::Timestamp(value),
        }
    }
}

impl fmt::Display for CellValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Text(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => f.write_str(&format_numeric(*value)),
            Self::Timestamp(value) => write!(f, "{}", value.format(TIMESTAMP_FORMAT)),
        }
    }
}

/// Hashable, owned identity of a cell.
///
/// Nulls compare equal to each other, so two rows that are missing the same
/// cells are still duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellKey {
    Null,
    Text(String),
    Integer(i64),
    Decimal(u64),
    Timestamp(NaiveDateTime),
}

/// Formats a floating-point number without trailing zeros after the decimal
/// point. Integer-valued floats like 40.0 are formatted as "40".
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() || trimmed == "-" {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Formats an integer with `,` as thousands separator.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
