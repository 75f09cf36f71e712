use dorksmith::{Catalog, QueryBuilder, TokenId};

fn catalog() -> Catalog {
    Catalog::builtin()
}

#[test]
fn test_add_appends_with_empty_value() {
    let catalog = catalog();
    let mut builder = QueryBuilder::new();

    builder.add_token(catalog.get("site:").unwrap());
    builder.add_token(catalog.get("intitle:").unwrap());

    assert_eq!(builder.len(), 2);
    assert_eq!(builder.tokens()[0].operator.name, "site:");
    assert_eq!(builder.tokens()[1].operator.name, "intitle:");
    assert!(builder.tokens().iter().all(|t| t.value.is_empty()));
}

#[test]
fn test_ids_are_unique_and_not_reused() {
    let catalog = catalog();
    let mut builder = QueryBuilder::new();

    let first = builder.add_token(catalog.get("site:").unwrap());
    let second = builder.add_token(catalog.get("site:").unwrap());
    assert_ne!(first, second);

    builder.remove_token(first);
    let third = builder.add_token(catalog.get("site:").unwrap());
    assert_ne!(third, first);
    assert_ne!(third, second);
}

#[test]
fn test_remove_only_token_empties_the_query() {
    let catalog = catalog();
    let mut builder = QueryBuilder::new();

    let id = builder.add_token(catalog.get("site:").unwrap());
    builder.update_value(id, "example.com");
    assert!(builder.has_query());

    assert!(builder.remove_token(id));
    assert_eq!(builder.serialize(), "");
    assert!(!builder.has_query());
}

#[test]
fn test_remove_unknown_id_is_a_noop() {
    let catalog = catalog();
    let mut builder = QueryBuilder::new();
    builder.add_token(catalog.get("site:").unwrap());

    let bogus = TokenId::from_raw(9_999);
    assert!(!builder.remove_token(bogus));
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_update_unknown_id_changes_nothing() {
    let catalog = catalog();
    let mut builder = QueryBuilder::new();

    let id = builder.add_token(catalog.get("site:").unwrap());
    builder.update_value(id, "example.com");
    let before: Vec<_> = builder.tokens().to_vec();

    let bogus = TokenId::from_raw(9_999);
    assert!(!builder.update_value(bogus, "changed"));
    assert_eq!(builder.len(), before.len());
    assert_eq!(builder.tokens(), before.as_slice());
}

#[test]
fn test_update_rewrites_value_in_place() {
    let catalog = catalog();
    let mut builder = QueryBuilder::new();

    let id = builder.add_token(catalog.get("filetype:").unwrap());
    assert!(builder.update_value(id, "pdf"));
    assert_eq!(builder.serialize(), "filetype:pdf");

    assert!(builder.update_value(id, "xls"));
    assert_eq!(builder.serialize(), "filetype:xls");
    assert_eq!(builder.len(), 1);
}

#[test]
fn test_clear_drops_everything() {
    let catalog = catalog();
    let mut builder = QueryBuilder::new();
    builder.add_token(catalog.get("site:").unwrap());
    builder.add_token(catalog.get("intitle:").unwrap());

    builder.clear();
    assert!(builder.is_empty());
    assert_eq!(builder.serialize(), "");
}

#[test]
fn test_bare_token_still_counts_as_a_query() {
    // A lone valueless operator serializes to its bare name, which the
    // search/copy gate accepts; the tool does not judge operator semantics.
    let catalog = catalog();
    let mut builder = QueryBuilder::new();
    builder.add_token(catalog.get("site:").unwrap());
    assert!(builder.has_query());
}
