use super::*;

#[test]
fn test_query_trims_surrounding_whitespace() {
    let query = Query::from("  rust async \t");
    assert_eq!(query.as_str(), "rust async");
}

#[test]
fn test_query_keeps_inner_whitespace() {
    let query = Query::from("hello   world");
    assert_eq!(query.as_str(), "hello   world");
}

#[test]
fn test_whitespace_only_query_is_empty() {
    let query = Query::from("   ");
    assert!(query.is_empty());
}
