//! The query builder: an ordered list of tokens and the operations on it.

use crate::operator::Operator;
use crate::serialize;
use crate::token::{Token, TokenId};

/// Ordered collection of placed tokens.
///
/// All mutation goes through [`add_token`](QueryBuilder::add_token),
/// [`remove_token`](QueryBuilder::remove_token),
/// [`update_value`](QueryBuilder::update_value), and
/// [`clear`](QueryBuilder::clear); the serialized query is always derivable
/// from the current list alone.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    tokens: Vec<Token>,
    next_id: u64,
}

impl QueryBuilder {
    pub fn new() -> Self {
        QueryBuilder::default()
    }

    /// Append a token for the given operator with an empty value.
    ///
    /// Returns the id of the new token so the caller can address it later.
    pub fn add_token(&mut self, operator: &Operator) -> TokenId {
        let id = TokenId(self.next_id);
        self.next_id += 1;
        self.tokens.push(Token::new(id, operator.clone()));
        id
    }

    /// Remove the first token with a matching id. Returns whether a token was
    /// removed; an unknown id is a no-op.
    pub fn remove_token(&mut self, id: TokenId) -> bool {
        match self.tokens.iter().position(|t| t.id == id) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    /// Set the value of the token with a matching id. Returns whether a token
    /// was updated; an unknown id is a no-op and leaves every token untouched.
    pub fn update_value(&mut self, id: TokenId, value: &str) -> bool {
        match self.tokens.iter_mut().find(|t| t.id == id) {
            Some(token) => {
                token.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Drop every token.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Token at a zero-based position in insertion order.
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The current query string. The `serialize` module documents the rules.
    pub fn serialize(&self) -> String {
        serialize::serialize(&self.tokens)
    }

    /// Whether the trimmed query is non-empty. The search and copy actions
    /// gate on this.
    pub fn has_query(&self) -> bool {
        !self.serialize().trim().is_empty()
    }
}
