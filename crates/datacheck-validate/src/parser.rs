//! Rule expression parsing.

use crate::error::{Result, ValidationError};

/// A parsed `name(parameter)` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCall {
    pub name: String,
    /// Raw parameter text; each validator interprets it.
    pub parameter: String,
}

/// Split a rule expression on its first `(`.
///
/// The name is trimmed; the parameter is everything after the `(` with one
/// trailing `)` removed.
pub fn parse_rule_expression(raw: &str) -> Result<RuleCall> {
    let Some((name, rest)) = raw.split_once('(') else {
        return Err(ValidationError::MalformedRule {
            expression: raw.to_string(),
        });
    };
    let rest = rest.trim_end();
    let parameter = rest.strip_suffix(')').unwrap_or(rest);
    Ok(RuleCall {
        name: name.trim().to_string(),
        parameter: parameter.to_string(),
    })
}
