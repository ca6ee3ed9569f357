//! Golden error messages and offsets.

mod common;
use common::*;

use plainsql_core::{Clause, ErrorKind};

#[test]
fn error_empty_input() {
    assert_err("", "query type cannot be empty");
    assert_err("   ", "query type cannot be empty");
}

#[test]
fn error_unknown_statement() {
    let err = parse_err("TRUNCATE users");
    assert_eq!(err.kind, ErrorKind::EmptyQueryType);
    assert_eq!(err.offset, 0);
}

#[test]
fn error_select_without_from() {
    assert_err("SELECT", "table name cannot be empty");
    assert_err("SELECT a", "table name cannot be empty");
    assert_err("SELECT a FROM", "table name cannot be empty");
}

#[test]
fn error_select_without_fields() {
    assert_err("SELECT FROM 'a'", "at SELECT: expected field to SELECT");
}

#[test]
fn error_select_trailing_comma() {
    let err = parse_err("SELECT b, FROM 'a'");
    assert_eq!(err.to_string(), "at SELECT: expected field to SELECT");
    assert_eq!(err.offset, 10);
}

#[test]
fn error_select_incomplete_alias() {
    let err = parse_err("SELECT a AS");
    assert_eq!(err.to_string(), "at AS: expected alias for a");
    assert_eq!(err.clause, Some(Clause::As));
    assert_eq!(err.offset, 11);
}

#[test]
fn error_select_empty_where() {
    let err = parse_err("SELECT a, c, d FROM b WHERE");
    assert_eq!(err.to_string(), "at WHERE: empty WHERE clause");
    assert_eq!(err.offset, 27);
}

#[test]
fn error_select_where_without_operator() {
    assert_err(
        "SELECT a, c, d FROM b WHERE a",
        "at WHERE: condition without operator",
    );
}

#[test]
fn error_select_dangling_and() {
    assert_err(
        "SELECT a FROM b WHERE a = '1' AND",
        "at WHERE: condition with empty left side operand",
    );
}

#[test]
fn error_select_missing_right_operand() {
    assert_err(
        "SELECT a FROM b WHERE a =",
        "at WHERE: condition with empty right side operand",
    );
}

#[test]
fn error_update_without_where() {
    let err = parse_err("UPDATE a");
    assert_eq!(
        err.to_string(),
        "at WHERE: WHERE clause is mandatory for UPDATE & DELETE"
    );
    assert_eq!(err.kind, ErrorKind::WhereClauseMandatory);
    assert_eq!(err.offset, 8);
}

#[test]
fn error_insert_star() {
    let err = parse_err("INSERT INTO a (*) VALUES ('1')");
    assert_eq!(
        err.to_string(),
        "at INSERT INTO: expected at least one field to insert"
    );
    assert_eq!(err.offset, 15);
}

#[test]
fn error_render_points_at_offset() {
    let sql = "SELECT a, c, d FROM b WHERE a";
    let err = parse_err(sql);
    let rendered = err.render_to_string(sql);
    let mut lines = rendered.lines();
    assert_eq!(lines.next(), Some(sql));
    let caret = lines.next().unwrap();
    assert_eq!(caret.len(), err.offset + 1);
    assert!(caret.ends_with('^'));
    assert_eq!(lines.next(), None);
}

#[test]
fn error_render_writes_to_sink() {
    let sql = "DELETE FROM a";
    let err = parse_err(sql);
    let mut sink: Vec<u8> = Vec::new();
    err.render(sql, &mut sink).unwrap();
    assert_eq!(String::from_utf8(sink).unwrap(), "DELETE FROM a\n             ^\n");
}
