use clap::{Parser, Subcommand};
use dorksmith::cli::{self, BuildOptions, CliError};
use dorksmith::{Catalog, Prefs, Theme};
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "dorksmith")]
#[command(about = "Dorksmith - compose advanced search queries from operator tokens")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a query from token specs like 'site:example.com'
    Build {
        /// Token specs (reads one per line from stdin if not provided)
        specs: Vec<String>,

        /// Print the search URL instead of the bare query
        #[arg(short, long)]
        url: bool,

        /// Copy the query to the system clipboard
        #[arg(short, long)]
        copy: bool,

        /// Print advisory value hints to stderr
        #[arg(long)]
        lint: bool,

        /// Emit the query, units, and rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the operator catalog
    Operators {
        /// Dump the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show reference documentation for one operator
    Operator {
        /// Operator name (use 'dorksmith operators' to list them)
        name: String,
    },

    /// Start an interactive builder session
    Interactive,

    /// Show or set the persisted theme
    Theme {
        /// 'light' or 'dark' (prints the current theme if omitted)
        value: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            specs,
            url,
            copy,
            lint,
            json,
        } => run_build(specs, url, copy, lint, json),
        Commands::Operators { json } => run_operators(json),
        Commands::Operator { name } => {
            match cli::operator_detail(&Catalog::builtin(), &name) {
                Ok(content) => {
                    print!("{}", content);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }
        Commands::Interactive => cli::run_interactive(),
        Commands::Theme { value } => run_theme(value),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_build(
    specs: Vec<String>,
    url: bool,
    copy: bool,
    lint: bool,
    json: bool,
) -> Result<(), CliError> {
    let specs = if specs.is_empty() && !atty::is(atty::Stream::Stdin) {
        read_specs_from_stdin()?
    } else {
        specs
    };

    let options = BuildOptions { specs, url, lint };
    let outcome = cli::execute_build(&options)?;

    for hint in &outcome.hints {
        eprintln!("hint: {}", hint.message);
    }

    if copy {
        cli::copy_query(&outcome.query)?;
        eprintln!("Query copied to clipboard");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
    } else if let Some(url) = &outcome.search_url {
        println!("{}", url);
    } else {
        println!("{}", outcome.query);
    }
    Ok(())
}

fn run_operators(json: bool) -> Result<(), CliError> {
    let catalog = Catalog::builtin();
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        print!("{}", cli::operators_overview(&catalog));
    }
    Ok(())
}

fn run_theme(value: Option<String>) -> Result<(), CliError> {
    match value {
        None => {
            println!("{}", Prefs::load().theme);
            Ok(())
        }
        Some(name) => match Theme::from_str(&name) {
            Some(theme) => {
                let mut prefs = Prefs::load();
                prefs.theme = theme;
                prefs.save()?;
                println!("Theme set to {}", theme);
                Ok(())
            }
            None => Err(CliError::UnknownTheme(name)),
        },
    }
}

/// One token spec per non-empty line.
fn read_specs_from_stdin() -> Result<Vec<String>, CliError> {
    let stdin = io::stdin();
    let mut specs = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(CliError::Io)?;
        let line = line.trim();
        if !line.is_empty() {
            specs.push(line.to_string());
        }
    }
    Ok(specs)
}
