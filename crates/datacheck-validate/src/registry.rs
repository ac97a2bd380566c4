//! Closed validator vocabulary.

use std::fmt;

/// Whether a validator reads one column or the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Table,
    Column,
}

/// Every rule a rule file can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validator {
    DescribeFile,
    FilenamePattern,
    NoDuplicateRows,
    NoEmptyRows,
    ColumnNames,
    ColumnType,
    NoFakeIds,
    NoNullValues,
    AtLeast,
    AtMost,
    NoRepeatedValues,
    InCategories,
    DescribeIds,
    RowCountDrift,
    // Declared but not implemented
    DateFrom,
    DateUntil,
    AllowedNulls,
    NoSpecialCharacters,
    ValidCommune,
}

impl Validator {
    /// All validators in listing order.
    pub const fn all() -> &'static [Self] {
        &[
            Self::DescribeFile,
            Self::FilenamePattern,
            Self::NoDuplicateRows,
            Self::NoEmptyRows,
            Self::ColumnNames,
            Self::ColumnType,
            Self::NoFakeIds,
            Self::NoNullValues,
            Self::AtLeast,
            Self::AtMost,
            Self::NoRepeatedValues,
            Self::InCategories,
            Self::DescribeIds,
            Self::RowCountDrift,
            Self::DateFrom,
            Self::DateUntil,
            Self::AllowedNulls,
            Self::NoSpecialCharacters,
            Self::ValidCommune,
        ]
    }

    /// Look up a rule name, canonical or legacy.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|validator| validator.name() == name || validator.legacy_name() == name)
    }

    /// Canonical rule name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DescribeFile => "describe_file",
            Self::FilenamePattern => "filename_pattern",
            Self::NoDuplicateRows => "no_duplicate_rows",
            Self::NoEmptyRows => "no_empty_rows",
            Self::ColumnNames => "column_names",
            Self::ColumnType => "column_type",
            Self::NoFakeIds => "no_fake_ids",
            Self::NoNullValues => "no_null_values",
            Self::AtLeast => "at_least",
            Self::AtMost => "at_most",
            Self::NoRepeatedValues => "no_repeated_values",
            Self::InCategories => "in_categories",
            Self::DescribeIds => "describe_ids",
            Self::RowCountDrift => "row_count_drift",
            Self::DateFrom => "date_from",
            Self::DateUntil => "date_until",
            Self::AllowedNulls => "allowed_nulls",
            Self::NoSpecialCharacters => "no_special_characters",
            Self::ValidCommune => "valid_commune",
        }
    }

    /// Name used by existing Spanish rule files.
    pub const fn legacy_name(&self) -> &'static str {
        match self {
            Self::DescribeFile => "describir_archivo",
            Self::FilenamePattern => "validate_filename",
            Self::NoDuplicateRows => "validate_sin_filas_repetidas",
            Self::NoEmptyRows => "validate_sin_filas_vacias",
            Self::ColumnNames => "validate_column_name",
            Self::ColumnType => "validate_column_type",
            Self::NoFakeIds => "validate_sin_ruts_falsos",
            Self::NoNullValues => "validate_sin_valores_nulos",
            Self::AtLeast => "validate_mayor_igual_a",
            Self::AtMost => "validate_menor_igual_a",
            Self::NoRepeatedValues => "validate_sin_valores_repetidos",
            Self::InCategories => "validate_pertenece_a_categorias",
            Self::DescribeIds => "describir_ruts",
            Self::RowCountDrift => "comparar_filas_archivo_anterior",
            Self::DateFrom => "validate_fecha_desde",
            Self::DateUntil => "validate_fecha_hasta",
            Self::AllowedNulls => "validate_nulos_permitidos",
            Self::NoSpecialCharacters => "validate_sin_caracteres_especiales",
            Self::ValidCommune => "validate_comuna",
        }
    }

    pub const fn scope(&self) -> Scope {
        match self {
            Self::DescribeFile
            | Self::FilenamePattern
            | Self::NoDuplicateRows
            | Self::NoEmptyRows
            | Self::ColumnNames
            | Self::RowCountDrift => Scope::Table,
            _ => Scope::Column,
        }
    }

    pub const fn is_implemented(&self) -> bool {
        !matches!(
            self,
            Self::DateFrom
                | Self::DateUntil
                | Self::AllowedNulls
                | Self::NoSpecialCharacters
                | Self::ValidCommune
        )
    }

    /// One-line description for rule listings.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::DescribeFile => "File name, report date, cabinet, row and column counts",
            Self::FilenamePattern => "File name matches a pattern (AAAA, MM, DD placeholders)",
            Self::NoDuplicateRows => "No fully duplicated rows",
            Self::NoEmptyRows => "No rows where every cell is empty",
            Self::ColumnNames => "Compare expected column names with the file's columns",
            Self::ColumnType => "Column has the expected type",
            Self::NoFakeIds => "No known test identifiers in the column",
            Self::NoNullValues => "No empty cells in the column",
            Self::AtLeast => "Every value is at least the threshold",
            Self::AtMost => "Every value is at most the threshold",
            Self::NoRepeatedValues => "No value appears twice in the column",
            Self::InCategories => "Every value belongs to the allowed categories",
            Self::DescribeIds => "Identifier counts, range and juridical share",
            Self::RowCountDrift => "Row count difference against a previous file",
            Self::DateFrom => "Dates on or after a bound (not implemented)",
            Self::DateUntil => "Dates on or before a bound (not implemented)",
            Self::AllowedNulls => "Maximum number of empty cells (not implemented)",
            Self::NoSpecialCharacters => "No special characters (not implemented)",
            Self::ValidCommune => "Values are valid communes (not implemented)",
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_and_legacy_names_resolve() {
        assert_eq!(
            Validator::from_name("no_duplicate_rows"),
            Some(Validator::NoDuplicateRows)
        );
        assert_eq!(
            Validator::from_name("validate_sin_filas_repetidas"),
            Some(Validator::NoDuplicateRows)
        );
        assert_eq!(Validator::from_name(" at_least "), Some(Validator::AtLeast));
        assert_eq!(Validator::from_name("fooBar"), None);
        assert_eq!(Validator::from_name(""), None);
    }

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for validator in Validator::all() {
            assert!(seen.insert(validator.name()), "{validator}");
            assert!(seen.insert(validator.legacy_name()), "{validator}");
        }
    }

    #[test]
    fn placeholders_are_not_implemented() {
        let placeholders: Vec<_> = Validator::all()
            .iter()
            .filter(|v| !v.is_implemented())
            .map(Validator::name)
            .collect();
        assert_eq!(
            placeholders,
            vec![
                "date_from",
                "date_until",
                "allowed_nulls",
                "no_special_characters",
                "valid_commune"
            ]
        );
    }
}
