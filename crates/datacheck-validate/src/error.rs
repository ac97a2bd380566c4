//! Fatal validation errors.
//!
//! Data-quality findings and missing columns are outcomes, not errors. The
//! variants here mean the rule declaration itself is broken, so the run
//! aborts.

use datacheck_model::ColumnType;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // === Declaration Errors ===
    /// Rule expression has no `(`.
    #[error("malformed rule '{expression}': expected name(parameter)")]
    MalformedRule { expression: String },

    /// Expected-type token of a column type rule is not recognized.
    #[error("unknown column type '{token}' for column '{column}'")]
    UnknownColumnType { column: String, token: String },

    /// Rule exists in the vocabulary but has no implementation.
    #[error("validation '{rule}' is not implemented")]
    NotImplemented { rule: &'static str },

    // === Precondition Violations ===
    /// Column type contradicts what the rule requires.
    #[error("rule '{rule}' requires {expected} column '{column}', found {found}")]
    ColumnTypeMismatch {
        rule: &'static str,
        column: String,
        expected: &'static str,
        found: ColumnType,
    },
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ValidationError::MalformedRule {
            expression: "no_null_values".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed rule 'no_null_values': expected name(parameter)"
        );

        let err = ValidationError::ColumnTypeMismatch {
            rule: "no_fake_ids",
            column: "RUT".to_string(),
            expected: "integer",
            found: ColumnType::Text,
        };
        assert_eq!(
            err.to_string(),
            "rule 'no_fake_ids' requires integer column 'RUT', found text"
        );
    }
}
