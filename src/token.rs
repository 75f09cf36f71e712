use std::fmt;

use crate::operator::Operator;

/// Identifier for a token within one builder session.
///
/// Allocated from the builder's monotonic counter, so ids are unique for the
/// lifetime of the builder and never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub(crate) u64);

impl TokenId {
    /// Reconstruct an id from its raw value, e.g. one read back from a view
    /// row. Fresh ids always come from the builder.
    pub fn from_raw(raw: u64) -> Self {
        TokenId(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One placed operator plus its free-text value.
///
/// Tokens are owned exclusively by the builder's ordered list. The value is
/// stored exactly as entered; trimming and quoting happen at serialization
/// time only.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: TokenId,
    pub operator: Operator,
    pub value: String,
}

impl Token {
    pub(crate) fn new(id: TokenId, operator: Operator) -> Self {
        Token {
            id,
            operator,
            value: String::new(),
        }
    }

    /// Whether the value is non-empty after trimming.
    pub fn has_value(&self) -> bool {
        !self.value.trim().is_empty()
    }
}
