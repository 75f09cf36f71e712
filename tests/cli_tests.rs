#![cfg(feature = "cli")]

use dorksmith::actions::{search_url, ActionError};
use dorksmith::cli::{execute_build, BuildOptions, CliError, Session, SessionReply};

fn build_options(specs: &[&str]) -> BuildOptions {
    BuildOptions {
        specs: specs.iter().map(|s| s.to_string()).collect(),
        ..BuildOptions::default()
    }
}

#[test]
fn test_build_assembles_specs_in_order() {
    let outcome = execute_build(&build_options(&[
        "site:example.com",
        "filetype:pdf report",
    ]))
    .unwrap();
    assert_eq!(outcome.query, "site:example.com filetype:\"pdf report\"");
    assert!(outcome.search_url.is_none());
    assert!(outcome.hints.is_empty());
}

#[test]
fn test_build_repeated_operator_forms_or_clause() {
    let outcome =
        execute_build(&build_options(&["intitle:admin", "intitle:login"])).unwrap();
    assert_eq!(outcome.query, "(intitle:admin OR intitle:login)");
}

#[test]
fn test_build_url_encodes_the_query() {
    let options = BuildOptions {
        url: true,
        ..build_options(&["site:example.com", "filetype:pdf report"])
    };
    let outcome = execute_build(&options).unwrap();
    assert_eq!(
        outcome.search_url.unwrap().as_str(),
        "https://www.google.com/search?q=site%3Aexample.com+filetype%3A%22pdf+report%22"
    );
}

#[test]
fn test_build_without_specs_is_an_error() {
    assert!(matches!(
        execute_build(&BuildOptions::default()),
        Err(CliError::NoSpecs)
    ));
}

#[test]
fn test_build_surfaces_parse_errors() {
    assert!(matches!(
        execute_build(&build_options(&["frobnicate:now"])),
        Err(CliError::Parse(_))
    ));
}

#[test]
fn test_build_lint_flags_date_shapes() {
    let options = BuildOptions {
        lint: true,
        ..build_options(&["before:whenever", "site:example.com"])
    };
    let outcome = execute_build(&options).unwrap();
    assert_eq!(outcome.hints.len(), 1);
    assert!(outcome.hints[0].message.contains("before:"));
}

#[test]
fn test_build_json_shape() {
    let outcome = execute_build(&build_options(&["intitle:admin", "intitle:login"])).unwrap();
    let json = outcome.to_json();

    assert_eq!(json["query"], "(intitle:admin OR intitle:login)");
    assert!(json["url"].is_null());
    assert_eq!(json["units"][0]["operator"], "intitle:");
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["rows"][0]["or_after"], true);
    assert_eq!(json["rows"][1]["or_after"], false);
}

#[test]
fn test_search_url_rejects_blank_queries() {
    assert!(matches!(search_url("   "), Err(ActionError::EmptyQuery)));
}

// Interactive session

fn reply(session: &mut Session, line: &str) -> String {
    match session.handle(line) {
        SessionReply::Continue(text) => text,
        SessionReply::Quit => panic!("unexpected quit for '{}'", line),
    }
}

#[test]
fn test_session_add_set_remove_flow() {
    let mut session = Session::new();

    let out = reply(&mut session, "add site:example.com");
    assert!(out.contains("query: site:example.com"));

    let out = reply(&mut session, "add filetype:");
    assert!(out.contains("query: site:example.com filetype:"));

    let out = reply(&mut session, "set 2 pdf report");
    assert!(out.contains("query: site:example.com filetype:\"pdf report\""));

    let out = reply(&mut session, "rm 1");
    assert!(out.contains("query: filetype:\"pdf report\""));
    assert_eq!(session.builder().len(), 1);
}

#[test]
fn test_session_renders_or_marker_between_grouped_rows() {
    let mut session = Session::new();
    reply(&mut session, "add intitle:admin");
    let out = reply(&mut session, "add intitle:login");
    assert!(out.contains("OR"));
    assert!(out.contains("query: (intitle:admin OR intitle:login)"));
}

#[test]
fn test_session_reports_bad_rows_and_commands() {
    let mut session = Session::new();
    assert!(reply(&mut session, "rm 1").contains("No row 1"));
    assert!(reply(&mut session, "set x value").contains("Expected a row number"));
    assert!(reply(&mut session, "warp 9").contains("Unknown command"));
    assert!(reply(&mut session, "add bogus:").contains("unknown operator"));
}

#[test]
fn test_session_clear_and_quit() {
    let mut session = Session::new();
    reply(&mut session, "add site:example.com");
    let out = reply(&mut session, "clear");
    assert!(out.contains("No tokens yet"));
    assert!(matches!(session.handle("quit"), SessionReply::Quit));
}

#[test]
fn test_session_url_command() {
    let mut session = Session::new();
    assert!(reply(&mut session, "url").contains("Build a query first"));

    reply(&mut session, "add site:example.com");
    let out = reply(&mut session, "url");
    assert_eq!(
        out,
        "https://www.google.com/search?q=site%3Aexample.com"
    );
}
