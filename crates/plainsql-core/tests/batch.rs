//! Tests for parsing several queries in one call.

use plainsql_core::ast::QueryType;
use plainsql_core::{parse_many, ErrorKind};

#[test]
fn batch_parses_in_order() {
    let queries = parse_many([
        "SELECT a FROM b",
        "DELETE FROM a WHERE b = '1'",
        "INSERT INTO a (b) VALUES ('1')",
    ])
    .unwrap();
    let kinds: Vec<_> = queries.iter().map(|q| q.query_type).collect();
    assert_eq!(
        kinds,
        vec![QueryType::Select, QueryType::Delete, QueryType::Insert]
    );
}

#[test]
fn batch_accepts_owned_strings() {
    let texts = vec![String::from("SELECT a FROM b")];
    assert_eq!(parse_many(&texts).unwrap().len(), 1);
}

#[test]
fn batch_empty() {
    let texts: [&str; 0] = [];
    assert!(parse_many(texts).unwrap().is_empty());
}

#[test]
fn batch_stops_at_first_error() {
    let err = parse_many(["SELECT a FROM b", "UPDATE a", ""]).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.source.kind, ErrorKind::WhereClauseMandatory);
    assert_eq!(
        err.to_string(),
        "query #1: at WHERE: WHERE clause is mandatory for UPDATE & DELETE"
    );
}

#[test]
fn batch_single_empty_query() {
    let err = parse_many([""]).unwrap_err();
    assert_eq!(err.index, 0);
    assert_eq!(err.source.to_string(), "query type cannot be empty");
}
