//! Declarative projection of the builder state for a render layer.
//!
//! A [`ViewModel`] is a pure function of the token list: one row per token in
//! insertion order, with grouping markers so a renderer can place an OR
//! separator between rows of the same operator group.

use serde::Serialize;

use crate::builder::QueryBuilder;
use crate::serialize::group_by_operator;

/// Everything a renderer needs to draw the builder.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub rows: Vec<TokenRow>,
    /// The serialized query for the single-line output field.
    pub query: String,
    pub has_tokens: bool,
}

/// One editable row in the token list.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRow {
    pub id: u64,
    pub operator: String,
    pub value: String,
    /// The row's operator appears more than once in the list.
    pub grouped: bool,
    /// Draw an OR separator after this row (grouped and not last of its
    /// group).
    pub or_after: bool,
}

impl ViewModel {
    pub fn project(builder: &QueryBuilder) -> Self {
        let tokens = builder.tokens();
        let groups = group_by_operator(tokens);

        let rows = tokens
            .iter()
            .map(|token| {
                let members = groups
                    .iter()
                    .find(|(name, _)| *name == token.operator.name)
                    .map(|(_, members)| members.as_slice())
                    .unwrap_or(&[]);
                let grouped = members.len() > 1;
                let last_of_group = members
                    .last()
                    .is_some_and(|last| last.id == token.id);

                TokenRow {
                    id: token.id.as_u64(),
                    operator: token.operator.name.clone(),
                    value: token.value.clone(),
                    grouped,
                    or_after: grouped && !last_of_group,
                }
            })
            .collect();

        ViewModel {
            rows,
            query: builder.serialize(),
            has_tokens: !builder.is_empty(),
        }
    }
}
