//! Advisory shape hints for token values.
//!
//! The builder accepts arbitrary text for any operator; these checks never
//! reject, they only flag values whose shape will not do what the operator's
//! syntax expects (a date operator with no date, a site restriction with no
//! domain). Callers surface them as warnings.

use std::sync::OnceLock;

use regex::Regex;

use crate::token::{Token, TokenId};

/// One advisory finding, addressed to the token it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub token: TokenId,
    pub message: String,
}

/// Check every valued token against its operator's expected value shape.
///
/// Valueless tokens produce no hints; a bare operator is a legal shape.
pub fn lint(tokens: &[Token]) -> Vec<Hint> {
    let mut hints = Vec::new();

    for token in tokens {
        if !token.has_value() {
            continue;
        }
        let value = token.value.trim();
        let message = match token.operator.name.as_str() {
            "before:" | "after:" if !date_shape().is_match(value) => Some(format!(
                "'{}' expects a YYYY-MM-DD date, got '{}'",
                token.operator.name, value
            )),
            "site:" if !domain_shape().is_match(value) => Some(format!(
                "'site:' expects a domain like example.com, got '{}'",
                value
            )),
            "filetype:" | "ext:" if !extension_shape().is_match(value) => Some(format!(
                "'{}' expects a bare extension like pdf, got '{}'",
                token.operator.name, value
            )),
            _ => None,
        };
        if let Some(message) = message {
            hints.push(Hint {
                token: token.id,
                message,
            });
        }
    }

    hints
}

fn date_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"))
}

fn domain_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)+$").expect("valid domain regex"))
}

fn extension_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid extension regex"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QueryBuilder;
    use crate::operator::Catalog;

    fn builder_with(specs: &[(&str, &str)]) -> QueryBuilder {
        let catalog = Catalog::builtin();
        let mut builder = QueryBuilder::new();
        for (name, value) in specs {
            let id = builder.add_token(catalog.get(name).unwrap());
            builder.update_value(id, value);
        }
        builder
    }

    #[test]
    fn test_date_value_passes() {
        let builder = builder_with(&[("before:", "2022-01-01")]);
        assert!(lint(builder.tokens()).is_empty());
    }

    #[test]
    fn test_date_value_flagged() {
        let builder = builder_with(&[("after:", "last tuesday")]);
        let hints = lint(builder.tokens());
        assert_eq!(hints.len(), 1);
        assert!(hints[0].message.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_domain_and_extension_shapes() {
        let builder = builder_with(&[
            ("site:", "github.com"),
            ("filetype:", "pdf"),
            ("ext:", ".xls"),
        ]);
        let hints = lint(builder.tokens());
        assert_eq!(hints.len(), 1);
        assert!(hints[0].message.contains("ext:"));
    }

    #[test]
    fn test_bare_tokens_are_clean() {
        let catalog = Catalog::builtin();
        let mut builder = QueryBuilder::new();
        builder.add_token(catalog.get("before:").unwrap());
        assert!(lint(builder.tokens()).is_empty());
    }

    #[test]
    fn test_free_text_operators_never_flagged() {
        let builder = builder_with(&[("intitle:", "anything goes here")]);
        assert!(lint(builder.tokens()).is_empty());
    }
}
