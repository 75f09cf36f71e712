//! Assemble a query from token specs

use url::Url;

use super::CliError;
use crate::{lint, parse_spec, search_url, units, Catalog, Hint, QueryBuilder, QueryUnit, ViewModel};

/// Options for the build command
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Token specs, one operator (plus optional value) each
    pub specs: Vec<String>,
    /// Also produce the search URL
    pub url: bool,
    /// Also produce advisory value hints
    pub lint: bool,
}

/// Result of a build operation
#[derive(Debug)]
pub struct BuildOutcome {
    /// The serialized query
    pub query: String,
    /// Search URL, when requested
    pub search_url: Option<Url>,
    /// Advisory hints, when requested
    pub hints: Vec<Hint>,
    /// The emitted units before joining
    pub units: Vec<QueryUnit>,
    /// Row/marker projection of the assembled builder
    pub view: ViewModel,
}

impl BuildOutcome {
    /// Structured form for `--json` output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "query": self.query,
            "url": self.search_url.as_ref().map(Url::as_str),
            "units": self.units,
            "rows": self.view.rows,
        })
    }
}

/// Execute a build: parse every spec, fill a builder, derive the outputs.
pub fn execute_build(options: &BuildOptions) -> Result<BuildOutcome, CliError> {
    if options.specs.is_empty() {
        return Err(CliError::NoSpecs);
    }

    let catalog = Catalog::builtin();
    let mut builder = QueryBuilder::new();

    for spec in &options.specs {
        let (operator, value) = parse_spec(&catalog, spec)?;
        let id = builder.add_token(operator);
        if !value.is_empty() {
            builder.update_value(id, &value);
        }
    }
    log::debug!(
        "assembled {} tokens from {} specs",
        builder.len(),
        options.specs.len()
    );

    let query = builder.serialize();
    let search_url = if options.url {
        Some(search_url(&query)?)
    } else {
        None
    };
    let hints = if options.lint {
        lint(builder.tokens())
    } else {
        Vec::new()
    };

    Ok(BuildOutcome {
        query,
        search_url,
        hints,
        units: units(builder.tokens()),
        view: ViewModel::project(&builder),
    })
}
