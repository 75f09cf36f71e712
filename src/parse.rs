//! Parsing of textual token specs into catalog operators and values.
//!
//! Both input surfaces of the tool (command-line arguments and interactive
//! `add` commands) raise the same "operator selected for insertion" event; a
//! spec like `site:example.com` or `intitle:"admin panel"` names the operator
//! and optionally carries an initial value.

use std::fmt;

use crate::operator::{Catalog, Operator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The spec did not start with any catalog operator name.
    UnknownOperator(String),
    /// The spec was empty or whitespace.
    EmptySpec,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownOperator(text) => {
                write!(
                    f,
                    "unknown operator in '{}'\nRun 'dorksmith operators' to list the catalog.",
                    text
                )
            }
            ParseError::EmptySpec => write!(f, "empty token spec"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse a token spec against the catalog.
///
/// The longest operator name prefixing the spec wins, so `allintitle:term`
/// resolves to `allintitle:` rather than stopping at a shorter overlap. The
/// remainder becomes the initial value: leading whitespace is dropped and one
/// pair of surrounding double quotes is stripped (serialization re-quotes
/// spaced values on output).
pub fn parse_spec<'a>(
    catalog: &'a Catalog,
    spec: &str,
) -> Result<(&'a Operator, String), ParseError> {
    let spec = spec.trim();
    if spec.is_empty() {
        return Err(ParseError::EmptySpec);
    }

    let operator = catalog
        .iter()
        .filter(|op| spec.starts_with(op.name.as_str()))
        .max_by_key(|op| op.name.len())
        .ok_or_else(|| ParseError::UnknownOperator(spec.to_string()))?;

    let value = strip_quotes(spec[operator.name.len()..].trim_start());
    Ok((operator, value.to_string()))
}

fn strip_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
