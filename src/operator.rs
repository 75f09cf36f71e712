//! The builtin search-operator catalog.
//!
//! An [`Operator`] is a named query modifier (`site:`, `filetype:`, ...) with
//! the help text shown by the `operators`/`operator` commands. The [`Catalog`]
//! is an ordered, read-only collection loaded once at startup; the builder
//! only ever references operators drawn from it.

use serde::{Deserialize, Serialize};

/// A search-query operator and its reference documentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    /// The literal operator text, including any trailing colon (`site:`).
    pub name: String,
    /// One-sentence description of what the operator matches.
    pub description: String,
    /// A worked example query fragment.
    pub example: String,
    /// The syntax shape (`site:domain.com`).
    pub syntax: String,
    /// When to reach for it.
    pub usage: String,
}

/// Ordered collection of operators.
///
/// Name uniqueness is not enforced: lookup returns the first match, and query
/// grouping keys on the name string. The builtin catalog happens to be unique.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    operators: Vec<Operator>,
}

impl Catalog {
    /// The fixed set of builtin operators, in display order.
    pub fn builtin() -> Self {
        let operators = BUILTIN
            .iter()
            .map(|&(name, description, example, syntax, usage)| Operator {
                name: name.to_string(),
                description: description.to_string(),
                example: example.to_string(),
                syntax: syntax.to_string(),
                usage: usage.to_string(),
            })
            .collect();
        Catalog { operators }
    }

    /// First operator whose name matches exactly.
    pub fn get(&self, name: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        self.operators.iter()
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

type Entry = (&'static str, &'static str, &'static str, &'static str, &'static str);

const BUILTIN: &[Entry] = &[
    (
        "intitle:",
        "Finds pages containing the given words in the title",
        "intitle:\"admin panel\"",
        "intitle:term",
        "Useful for locating specific pages by their title",
    ),
    (
        "allintitle:",
        "Finds pages containing all of the given words in the title",
        "allintitle:admin panel login",
        "allintitle:term1 term2",
        "Every word must appear in the title",
    ),
    (
        "inurl:",
        "Finds pages containing the given words in the URL",
        "inurl:login",
        "inurl:term",
        "Great for finding admin pages or specific directories",
    ),
    (
        "allinurl:",
        "Finds pages containing all of the given words in the URL",
        "allinurl:admin login",
        "allinurl:term1 term2",
        "Every word must appear in the URL",
    ),
    (
        "site:",
        "Restricts results to a specific website",
        "site:github.com",
        "site:domain.com",
        "Limits the search to a particular domain",
    ),
    (
        "filetype:",
        "Finds files of a specific type",
        "filetype:pdf",
        "filetype:extension",
        "Finds PDF, DOC, XLS, PPT documents and more",
    ),
    (
        "ext:",
        "Alias of filetype:",
        "ext:xls",
        "ext:extension",
        "Handy for searching files by extension",
    ),
    (
        "intext:",
        "Finds pages containing the given words in the body text",
        "intext:\"confidential\"",
        "intext:term",
        "Searches inside the page content",
    ),
    (
        "allintext:",
        "Finds pages containing all of the given words in the body text",
        "allintext:password username",
        "allintext:term1 term2",
        "Every word must appear in the content",
    ),
    (
        "cache:",
        "Shows the cached version of a web page",
        "cache:example.com",
        "cache:url",
        "View earlier versions of web pages",
    ),
    (
        "related:",
        "Finds websites related to a given URL",
        "related:github.com",
        "related:url",
        "Discover similar sites",
    ),
    (
        "link:",
        "Finds pages linking to a given URL",
        "link:example.com",
        "link:url",
        "See which pages link to a site",
    ),
    (
        "info:",
        "Shows information about a page",
        "info:example.com",
        "info:url",
        "See what the search engine knows about a site",
    ),
    (
        "define:",
        "Looks up word definitions",
        "define:pentesting",
        "define:word",
        "Quick way to check definitions",
    ),
    (
        "maps:",
        "Searches directly on the maps service",
        "maps:\"coffee shop Madrid\"",
        "maps:term",
        "Look up locations directly on maps",
    ),
    (
        "before:",
        "Finds results published before a date",
        "breach before:2022-01-01",
        "term before:YYYY-MM-DD",
        "Restricts results to earlier dates",
    ),
    (
        "after:",
        "Finds results published after a date",
        "ransomware after:2023-01-01",
        "term after:YYYY-MM-DD",
        "Restricts results to later dates",
    ),
    (
        "AROUND(X)",
        "Finds pages where two terms appear near each other",
        "\"sql\" AROUND(5) \"injection\"",
        "term1 AROUND(n) term2",
        "Very useful for finding related context",
    ),
    (
        "\"word\"",
        "Exact-phrase search",
        "\"confidential report\"",
        "\"exact phrase\"",
        "Useful for precise results",
    ),
    (
        "-word",
        "Excludes a term from the search",
        "admin -site:example.com",
        "term -excluded",
        "Filters out irrelevant results",
    ),
    (
        "OR",
        "Finds results containing either term",
        "hacking OR pentesting",
        "term1 OR term2",
        "Widens the search to synonyms",
    ),
    (
        "*",
        "Wildcard matching any word",
        "\"file * password\"",
        "\"phrase * phrase\"",
        "Useful when part of the phrase is unknown",
    ),
    (
        "..",
        "Searches within a numeric range",
        "camera $50..$200",
        "number1..number2",
        "Search across date, price, or other intervals",
    ),
];
