//! Operator reference content for the dorksmith CLI

use std::fmt::Write;

use super::CliError;
use crate::Catalog;

/// The catalog overview (name + description listing).
pub fn operators_overview(catalog: &Catalog) -> String {
    let width = catalog
        .iter()
        .map(|op| op.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::from(
        "SEARCH OPERATORS\n\n\
         Compose queries by combining operators with values. Repeating an\n\
         operator with different values produces an OR clause.\n\n",
    );
    for op in catalog.iter() {
        let _ = writeln!(out, "  {:width$}  {}", op.name, op.description);
    }
    out.push_str("\nRun 'dorksmith operator <NAME>' for syntax, an example, and usage notes.\n");
    out
}

/// Detail view for a single operator.
pub fn operator_detail(catalog: &Catalog, name: &str) -> Result<String, CliError> {
    let op = catalog
        .get(name)
        .ok_or_else(|| CliError::UnknownOperator(name.to_string()))?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", op.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "  Description:  {}", op.description);
    let _ = writeln!(out, "  Syntax:       {}", op.syntax);
    let _ = writeln!(out, "  Example:      {}", op.example);
    let _ = writeln!(out, "  Usage:        {}", op.usage);
    Ok(out)
}
