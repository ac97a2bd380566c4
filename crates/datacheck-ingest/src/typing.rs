//! Post-load typing pass.
//!
//! Every column is read as text first, then converted to exactly one typed
//! payload. Priority order:
//! 1. Name hint: columns whose name contains `fecha` become timestamps;
//!    cells that do not parse are nulled
//! 2. All non-null cells parse as `i64` -> Integer
//! 3. All non-null cells parse as finite `f64` -> Decimal
//! 4. All non-null cells parse as a date or datetime -> Timestamp
//! 5. Otherwise Text; no non-null cells at all -> Unknown

use datacheck_model::{Column, ColumnData, parse_timestamp};

/// Column-name fragment that marks date columns.
const DATE_NAME_HINT: &str = "fecha";

/// Build a typed column from normalized text cells.
pub fn infer_column(name: &str, cells: Vec<Option<String>>) -> Column {
    if cells.iter().all(Option::is_none) {
        return Column::new(name, ColumnData::Unknown(cells.len()));
    }

    if name.to_lowercase().contains(DATE_NAME_HINT) {
        let parsed = cells
            .iter()
            .map(|cell| cell.as_deref().and_then(parse_timestamp))
            .collect::<Vec<_>>();
        let lost = cells.iter().filter(|c| c.is_some()).count()
            - parsed.iter().filter(|c| c.is_some()).count();
        if lost > 0 {
            tracing::debug!(column = name, lost, "unparsable dates coerced to null");
        }
        return Column::new(name, ColumnData::Timestamp(parsed));
    }

    if let Some(values) = parse_all(&cells, parse_integer) {
        return Column::new(name, ColumnData::Integer(values));
    }
    if let Some(values) = parse_all(&cells, parse_decimal) {
        return Column::new(name, ColumnData::Decimal(values));
    }
    if let Some(values) = parse_all(&cells, parse_timestamp) {
        return Column::new(name, ColumnData::Timestamp(values));
    }
    Column::new(name, ColumnData::Text(cells))
}

/// Convert every non-null cell, or give up on the first failure.
fn parse_all<T>(cells: &[Option<String>], parse: fn(&str) -> Option<T>) -> Option<Vec<Option<T>>> {
    cells
        .iter()
        .map(|cell| match cell {
            Some(text) => parse(text).map(Some),
            None => Some(None),
        })
        .collect()
}

pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
