use crate::column::Column;
use crate::error::{ModelError, Result};
use crate::value::{CellKey, CellValue};

/// An in-memory dataset: ordered, uniquely named, equally long columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table, rejecting duplicate names and ragged columns.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map_or(0, Column::len);
        for (idx, column) in columns.iter().enumerate() {
            if columns[..idx].iter().any(|c| c.name() == column.name()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.name().to_string(),
                });
            }
            if column.len() != row_count {
                return Err(ModelError::LengthMismatch {
                    column: column.name().to_string(),
                    expected: row_count,
                    found: column.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// A table with neither rows nor columns.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// No rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.columns.is_empty()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names where either lowercase name contains the other.
    pub fn similar_columns(&self, name: &str) -> Vec<&str> {
        let wanted = name.to_lowercase();
        self.columns
            .iter()
            .map(Column::name)
            .filter(|actual| {
                let actual = actual.to_lowercase();
                actual.contains(&wanted) || wanted.contains(&actual)
            })
            .collect()
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<CellValue<'_>> {
        if row >= self.row_count {
            return None;
        }
        self.column(column).map(|c| c.get(row))
    }

    /// All cells of one row, in column order.
    pub fn row(&self, row: usize) -> Vec<CellValue<'_>> {
        self.columns.iter().map(|column| column.get(row)).collect()
    }

    /// Hashable identity of a full row.
    pub fn row_key(&self, row: usize) -> Vec<CellKey> {
        self.columns.iter().map(|column| column.get(row).key()).collect()
    }

    /// True when every cell of the row is null.
    pub fn is_row_null(&self, row: usize) -> bool {
        self.columns.iter().all(|column| column.get(row).is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_columns() {
        let result = Table::new(vec![
            Column::integer("id", vec![Some(1)]),
            Column::integer("id", vec![Some(2)]),
        ]);
        assert!(matches!(result, Err(ModelError::DuplicateColumn { .. })));
    }

    #[test]
    fn rejects_ragged_columns() {
        let result = Table::new(vec![
            Column::integer("id", vec![Some(1), Some(2)]),
            Column::text("name", vec![Some("a")]),
        ]);
        assert!(matches!(
            result,
            Err(ModelError::LengthMismatch {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn row_views_follow_column_order() {
        let table = Table::new(vec![
            Column::integer("id", vec![Some(1), None]),
            Column::text("name", vec![Some("a"), None]),
        ])
        .unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), vec!["id", "name"]);
        assert_eq!(
            table.row(0),
            vec![CellValue::Integer(1), CellValue::Text("a")]
        );
        assert!(table.is_row_null(1));
        assert_eq!(table.cell(0, "name"), Some(CellValue::Text("a")));
        assert_eq!(table.cell(3, "name"), None);
    }

    #[test]
    fn similar_columns_ignore_case() {
        let table = Table::new(vec![
            Column::integer("RUT_EMPRESA", vec![Some(1)]),
            Column::integer("rut", vec![Some(1)]),
            Column::text("COMUNA", vec![Some("a")]),
        ])
        .unwrap();
        assert_eq!(table.similar_columns("Rut"), vec!["RUT_EMPRESA", "rut"]);
        assert!(table.similar_columns("MONTO").is_empty());
    }

    #[test]
    fn empty_table_is_empty() {
        assert!(Table::empty().is_empty());
        let headers_only = Table::new(vec![Column::text::<String>("a", vec![])]).unwrap();
        assert!(headers_only.is_empty());
        assert_eq!(headers_only.column_count(), 1);
    }
}
