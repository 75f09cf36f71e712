//! CLI support for dorksmith
//!
//! Provides programmatic access to the CLI commands so they can be embedded
//! and tested without spawning the binary.

mod build;
mod docs;
mod interactive;

pub use build::{execute_build, BuildOptions, BuildOutcome};
pub use docs::{operator_detail, operators_overview};
pub use interactive::{run_interactive, Session, SessionReply};

use std::io;

use crate::{actions, ActionError, ParseError, PrefsError};

/// Place the trimmed query on the system clipboard.
pub fn copy_query(query: &str) -> Result<(), CliError> {
    let payload = actions::copy_payload(query)?;
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| ActionError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(payload.to_string())
        .map_err(|e| ActionError::Clipboard(e.to_string()))?;
    Ok(())
}

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Token spec parsing error
    Parse(ParseError),
    /// Search/copy action error
    Action(ActionError),
    /// Preference store error
    Prefs(PrefsError),
    /// JSON output error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No token specs provided
    NoSpecs,
    /// Unknown operator name passed to the detail command
    UnknownOperator(String),
    /// Unknown theme name passed to the theme command
    UnknownTheme(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Action(e) => write!(f, "{}", e),
            CliError::Prefs(e) => write!(f, "Preferences error: {}", e),
            CliError::Json(e) => write!(f, "JSON error: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoSpecs => {
                write!(f, "No token specs provided. Pass specs or pipe them to stdin.")
            }
            CliError::UnknownOperator(name) => {
                write!(
                    f,
                    "Unknown operator: '{}'\nRun 'dorksmith operators' to list the catalog.",
                    name
                )
            }
            CliError::UnknownTheme(name) => {
                write!(f, "Unknown theme: '{}' (expected 'light' or 'dark')", name)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Action(e) => Some(e),
            CliError::Prefs(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<ActionError> for CliError {
    fn from(e: ActionError) -> Self {
        CliError::Action(e)
    }
}

impl From<PrefsError> for CliError {
    fn from(e: PrefsError) -> Self {
        CliError::Prefs(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
