//! Interactive builder session for the dorksmith CLI
//!
//! A line-oriented stand-in for the visual builder: every command mutates the
//! token list and the session re-renders the rows and the live query, so the
//! output always reflects the current list state.

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use super::CliError;
use crate::{lint, parse_spec, search_url, Catalog, QueryBuilder, ViewModel};

const HELP: &str = "\
COMMANDS

  add <spec>       Add a token (e.g. 'add site:example.com', 'add filetype:')
  set <n> <value>  Set the value of row n
  rm <n>           Remove row n
  clear            Remove every token
  list             Show the rows and the current query
  url              Show the search URL for the current query
  copy             Copy the current query to the clipboard
  lint             Show advisory hints for the current values
  help             Show this help
  quit             Leave the session
";

/// One interactive builder session.
pub struct Session {
    catalog: Catalog,
    builder: QueryBuilder,
}

/// What the loop should do after a command.
pub enum SessionReply {
    /// Print this and read the next line.
    Continue(String),
    Quit,
}

impl Session {
    pub fn new() -> Self {
        Session {
            catalog: Catalog::builtin(),
            builder: QueryBuilder::new(),
        }
    }

    pub fn builder(&self) -> &QueryBuilder {
        &self.builder
    }

    /// Dispatch one command line.
    pub fn handle(&mut self, line: &str) -> SessionReply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let reply = match command {
            "" => String::new(),
            "add" => self.add(rest),
            "set" => self.set(rest),
            "rm" => self.remove(rest),
            "clear" => {
                self.builder.clear();
                self.render()
            }
            "list" | "show" => self.render(),
            "url" => match search_url(&self.builder.serialize()) {
                Ok(url) => url.to_string(),
                Err(e) => e.to_string(),
            },
            "copy" => match super::copy_query(&self.builder.serialize()) {
                Ok(()) => "Query copied to clipboard".to_string(),
                Err(e) => e.to_string(),
            },
            "lint" => {
                let hints = lint(self.builder.tokens());
                if hints.is_empty() {
                    "No hints".to_string()
                } else {
                    hints
                        .iter()
                        .map(|h| format!("hint: {}", h.message))
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            "help" | "?" => HELP.to_string(),
            "quit" | "exit" | "q" => return SessionReply::Quit,
            other => format!("Unknown command: '{}' (try 'help')", other),
        };
        SessionReply::Continue(reply)
    }

    fn add(&mut self, spec: &str) -> String {
        match parse_spec(&self.catalog, spec) {
            Ok((operator, value)) => {
                let operator = operator.clone();
                let id = self.builder.add_token(&operator);
                if !value.is_empty() {
                    self.builder.update_value(id, &value);
                }
                self.render()
            }
            Err(e) => e.to_string(),
        }
    }

    fn set(&mut self, rest: &str) -> String {
        let (row, value) = match rest.split_once(char::is_whitespace) {
            Some((row, value)) => (row, value.trim()),
            None => (rest, ""),
        };
        match self.row_id(row) {
            Ok(id) => {
                self.builder.update_value(id, value);
                self.render()
            }
            Err(message) => message,
        }
    }

    fn remove(&mut self, rest: &str) -> String {
        match self.row_id(rest) {
            Ok(id) => {
                self.builder.remove_token(id);
                self.render()
            }
            Err(message) => message,
        }
    }

    /// Resolve a 1-based row number to the token id behind it.
    fn row_id(&self, text: &str) -> Result<crate::TokenId, String> {
        let row: usize = text
            .parse()
            .map_err(|_| format!("Expected a row number, got '{}'", text))?;
        row.checked_sub(1)
            .and_then(|index| self.builder.get(index))
            .map(|token| token.id)
            .ok_or_else(|| format!("No row {} (have {})", row, self.builder.len()))
    }

    /// Rows with OR markers between grouped entries, then the live query.
    fn render(&self) -> String {
        let view = ViewModel::project(&self.builder);
        if !view.has_tokens {
            return "No tokens yet. 'add <operator>' to start, 'help' for commands.".to_string();
        }

        let mut out = String::new();
        for (index, row) in view.rows.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {} {}", index + 1, row.operator, row.value);
            if row.or_after {
                let _ = writeln!(out, "     OR");
            }
        }
        let _ = write!(out, "\nquery: {}", view.query);
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

/// Run the interactive loop over stdin.
pub fn run_interactive() -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "dorksmith interactive session ('help' for commands)")?;
    let mut session = Session::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        match session.handle(&line) {
            SessionReply::Continue(reply) => {
                if !reply.is_empty() {
                    writeln!(stdout, "{}", reply)?;
                }
            }
            SessionReply::Quit => break,
        }
    }
    Ok(())
}
