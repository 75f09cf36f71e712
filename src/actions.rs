//! Actions over a finished query: the search URL and the copy target.
//!
//! Both gate on a non-empty trimmed query, matching the builder's
//! [`has_query`](crate::QueryBuilder::has_query) check.

use std::fmt;

use url::Url;

/// Base endpoint the search action points at.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

#[derive(Debug)]
pub enum ActionError {
    /// The trimmed query was empty; there is nothing to search or copy.
    EmptyQuery,
    /// The clipboard backend refused the write.
    Clipboard(String),
    /// URL construction failed.
    Url(url::ParseError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::EmptyQuery => write!(f, "Build a query first"),
            ActionError::Clipboard(e) => write!(f, "Copy failed: {}", e),
            ActionError::Url(e) => write!(f, "URL error: {}", e),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ActionError::Url(e) => Some(e),
            _ => None,
        }
    }
}

impl From<url::ParseError> for ActionError {
    fn from(e: url::ParseError) -> Self {
        ActionError::Url(e)
    }
}

/// Build the search URL for a query.
///
/// The query is trimmed before encoding; an empty result is rejected rather
/// than producing a search for nothing.
///
/// # Examples
///
/// ```
/// use dorksmith::actions::search_url;
///
/// let url = search_url("site:example.com filetype:\"pdf report\"").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "https://www.google.com/search?q=site%3Aexample.com+filetype%3A%22pdf+report%22"
/// );
/// ```
pub fn search_url(query: &str) -> Result<Url, ActionError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ActionError::EmptyQuery);
    }
    let url = Url::parse_with_params(SEARCH_ENDPOINT, [("q", query)])?;
    Ok(url)
}

/// The trimmed text the copy action places on the clipboard.
pub fn copy_payload(query: &str) -> Result<&str, ActionError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ActionError::EmptyQuery);
    }
    Ok(query)
}
