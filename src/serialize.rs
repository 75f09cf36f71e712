//! Query-string serialization for a token list.
//!
//! The serialized query is a pure function of the token list's contents and
//! order. Tokens sharing an operator name form a group; a group with two or
//! more valued tokens collapses into a parenthesized OR clause, while valueless
//! tokens always emit the bare operator name.
//!
//! # Rules
//!
//! - Groups appear in order of first appearance; tokens keep insertion order
//!   within their group.
//! - A value is wrapped in one pair of double quotes iff it contains a space
//!   character. The raw value is used as-is otherwise; storage is never
//!   trimmed.
//! - A group of one: `name` + value, or the bare `name` when the trimmed value
//!   is empty.
//! - A larger group: valued tokens format individually, then join with ` OR `
//!   inside parentheses when there is more than one of them. Valueless members
//!   follow as separate bare-name units, outside the parentheses.
//! - Units join with a single space.
//!
//! # Examples
//!
//! ```
//! use dorksmith::{Catalog, QueryBuilder};
//!
//! let catalog = Catalog::builtin();
//! let mut builder = QueryBuilder::new();
//!
//! let site = builder.add_token(catalog.get("site:").unwrap());
//! let ft = builder.add_token(catalog.get("filetype:").unwrap());
//! builder.update_value(site, "example.com");
//! builder.update_value(ft, "pdf report");
//!
//! assert_eq!(builder.serialize(), "site:example.com filetype:\"pdf report\"");
//! ```

use serde::Serialize;

use crate::token::Token;

/// One emitted piece of the final query, tagged with the operator name of the
/// group it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryUnit {
    /// Operator name of the originating group.
    pub operator: String,
    /// The emitted text (`site:example.com`, `(intitle:a OR intitle:b)`, ...).
    pub text: String,
}

/// Serialize a token list into the final query string.
pub fn serialize(tokens: &[Token]) -> String {
    let parts: Vec<String> = units(tokens).into_iter().map(|u| u.text).collect();
    parts.join(" ")
}

/// The emitted units, in order, before joining.
///
/// Exposed so callers can show the structure of the query (the `--json`
/// output) without re-deriving the grouping rules.
pub fn units(tokens: &[Token]) -> Vec<QueryUnit> {
    let mut units = Vec::new();

    for (name, members) in group_by_operator(tokens) {
        if members.len() == 1 {
            let token = members[0];
            let text = if token.has_value() {
                format!("{}{}", name, quote_if_spaced(&token.value))
            } else {
                name.to_string()
            };
            units.push(QueryUnit {
                operator: name.to_string(),
                text,
            });
            continue;
        }

        let valued: Vec<String> = members
            .iter()
            .filter(|t| t.has_value())
            .map(|t| format!("{}{}", name, quote_if_spaced(&t.value)))
            .collect();

        match valued.len() {
            0 => {}
            1 => units.push(QueryUnit {
                operator: name.to_string(),
                text: valued.into_iter().next().unwrap_or_default(),
            }),
            _ => units.push(QueryUnit {
                operator: name.to_string(),
                text: format!("({})", valued.join(" OR ")),
            }),
        }

        // Valueless members emit bare names after the clause, original order.
        for token in members.iter().filter(|t| !t.has_value()) {
            units.push(QueryUnit {
                operator: name.to_string(),
                text: token.operator.name.clone(),
            });
        }
    }

    units
}

/// Group tokens by operator name, preserving first-appearance order of groups
/// and insertion order within each group.
pub(crate) fn group_by_operator(tokens: &[Token]) -> Vec<(&str, Vec<&Token>)> {
    let mut groups: Vec<(&str, Vec<&Token>)> = Vec::new();
    for token in tokens {
        let name = token.operator.name.as_str();
        match groups.iter_mut().find(|(group, _)| *group == name) {
            Some((_, members)) => members.push(token),
            None => groups.push((name, vec![token])),
        }
    }
    groups
}

/// Wrap in double quotes iff the raw value contains a space.
fn quote_if_spaced(value: &str) -> String {
    if value.contains(' ') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}
