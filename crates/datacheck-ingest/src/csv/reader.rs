//! Dataset loading through the Polars CSV reader.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::{CsvParseOptions, CsvReadOptions, DataFrame, DataType, SerReader};

use datacheck_model::{Column, Table};

use crate::error::{IngestError, Result};
use crate::options::LoadOptions;
use crate::typing::infer_column;

use super::header::{check_header_names, normalize_cell, normalize_header};
use super::source::read_text;

/// Load a delimited file into a typed [`Table`].
///
/// Header names are normalized (trimmed, BOM artifacts stripped) before the
/// table exists, so validators only ever see normalized names.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let text = read_text(path, options.encoding)?;
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    check_header_names(path, &text, options.delimiter)?;
    let df = read_string_frame(path, text, options)?;
    let table = frame_to_table(path, &df)?;
    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

/// Parse CSV text with every column kept as a string column.
fn read_string_frame(path: &Path, text: String, options: &LoadOptions) -> Result<DataFrame> {
    let parse_options = CsvParseOptions::default()
        .with_separator(options.delimiter)
        .with_truncate_ragged_lines(true);

    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .with_parse_options(parse_options)
        .into_reader_with_file_handle(Cursor::new(text.into_bytes()))
        .finish()
        .map_err(|e| IngestError::csv_parse(path, e))
}

/// Normalize headers and run the typing pass over every column.
fn frame_to_table(path: &Path, df: &DataFrame) -> Result<Table> {
    let mut columns = Vec::with_capacity(df.width());

    for (idx, series) in df.get_columns().iter().enumerate() {
        let as_text = series
            .cast(&DataType::String)
            .map_err(|e| IngestError::csv_parse(path, e))?;
        let values = as_text.str().map_err(|e| IngestError::csv_parse(path, e))?;
        let cells: Vec<Option<String>> = values.into_iter().map(normalize_cell).collect();

        let mut name = normalize_header(series.name().as_str());
        if name.is_empty() {
            // Trailing delimiters produce nameless, empty columns
            if cells.iter().all(Option::is_none) {
                tracing::debug!(index = idx, "dropping unnamed empty column");
                continue;
            }
            name = format!("column_{}", idx + 1);
        }

        let column = infer_column(&name, cells);
        tracing::debug!(column = %name, kind = %column.column_type(), "typed column");
        columns.push(column);
    }

    Table::new(columns).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use datacheck_model::{CellValue, ColumnType};

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_load_table_types_columns() {
        let file = create_temp_csv(b"RUT;MONTO;COMUNA\n11111111;1.5;Talca\n22222222;;Santiago\n");
        let table = load_table(file.path(), &LoadOptions::default()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), vec!["RUT", "MONTO", "COMUNA"]);
        let types: Vec<ColumnType> = table.columns().iter().map(Column::column_type).collect();
        assert_eq!(
            types,
            vec![ColumnType::Integer, ColumnType::Decimal, ColumnType::Text]
        );
        assert_eq!(table.cell(1, "MONTO"), Some(CellValue::Null));
    }

    #[test]
    fn test_load_table_normalizes_headers() {
        let file = create_temp_csv(b"\xEF\xBB\xBF RUT ;NOMBRE \n1;a\n");
        let table = load_table(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(table.column_names(), vec!["RUT", "NOMBRE"]);
    }

    #[test]
    fn test_load_table_latin1() {
        let file = create_temp_csv(b"COMUNA;A\xD1O\nPe\xF1alol\xE9n;2024\n");
        let table = load_table(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(table.column_names(), vec!["COMUNA", "AÑO"]);
        assert_eq!(table.cell(0, "COMUNA"), Some(CellValue::Text("Peñalolén")));
    }

    #[test]
    fn test_load_table_rejects_normalized_duplicates() {
        let file = create_temp_csv(b"RUT;RUT \n1;2\n");
        let result = load_table(file.path(), &LoadOptions::default());
        assert!(matches!(result, Err(IngestError::DuplicateColumn { .. })));
    }

    #[test]
    fn test_load_table_rejects_identical_headers() {
        let file = create_temp_csv(b"RUT;COMUNA;RUT\n1;a;2\n");
        let result = load_table(file.path(), &LoadOptions::default());
        assert!(matches!(
            result,
            Err(IngestError::DuplicateColumn { column, .. }) if column == "RUT"
        ));
    }

    #[test]
    fn test_load_table_keeps_cell_whitespace() {
        let file = create_temp_csv(b"COMUNA;RUT\nTalca;1\n Talca ; 2\n");
        let table = load_table(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(table.cell(0, "COMUNA"), Some(CellValue::Text("Talca")));
        assert_eq!(table.cell(1, "COMUNA"), Some(CellValue::Text(" Talca ")));
        assert_eq!(table.cell(1, "RUT"), Some(CellValue::Integer(2)));
    }

    #[test]
    fn test_load_table_header_only() {
        let file = create_temp_csv(b"RUT;NOMBRE\n");
        let table = load_table(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_load_table_empty_file() {
        let file = create_temp_csv(b"");
        let result = load_table(file.path(), &LoadOptions::default());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }
}
