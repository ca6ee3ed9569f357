//! Tests for the standalone WHERE clause parser.

mod common;
use common::*;

use plainsql_core::ast::Operator;
use plainsql_core::{parse_where_clause, ErrorKind};

#[test]
fn where_empty() {
    let err = parse_where_clause("").unwrap_err();
    assert_eq!(err.to_string(), "at WHERE: empty WHERE clause");
    assert_eq!(err.offset, 0);
}

#[test]
fn where_field_only() {
    let err = parse_where_clause("a ").unwrap_err();
    assert_eq!(err.to_string(), "at WHERE: condition without operator");
    assert_eq!(err.offset, 2);
}

#[test]
fn where_quoted_value() {
    let clause = parse_where_clause("a = ''").unwrap();
    assert_eq!(
        clause.conditions,
        vec![cond(field("a"), Operator::Eq, quoted("''"))]
    );
    assert_eq!(clause.end, "a = ''".len());
}

#[test]
fn where_integer_without_spaces() {
    let clause = parse_where_clause("a>=1").unwrap();
    assert_eq!(
        clause.conditions,
        vec![cond(field("a"), Operator::Gte, number("1"))]
    );
}

#[test]
fn where_decimal() {
    let clause = parse_where_clause("a>= 1.24").unwrap();
    assert_eq!(
        clause.conditions,
        vec![cond(field("a"), Operator::Gte, number("1.24"))]
    );
}

#[test]
fn where_negative_decimal() {
    let clause = parse_where_clause("a>=-1.21").unwrap();
    assert_eq!(
        clause.conditions,
        vec![cond(field("a"), Operator::Gte, number("-1.21"))]
    );
}

#[test]
fn where_number_and_field_comparison() {
    let clause = parse_where_clause("a = 1 AND b > a1").unwrap();
    assert_eq!(
        clause.conditions,
        vec![
            cond(field("a"), Operator::Eq, number("1")),
            cond(field("b"), Operator::Gt, field("a1")),
        ]
    );
    assert_eq!(clause.end, "a = 1 AND b > a1".len());
}

#[test]
fn where_digit_led_token_is_not_a_field() {
    let err = parse_where_clause("a = 1a").unwrap_err();
    assert_eq!(err.to_string(), "at WHERE: expected quoted value");
    assert_eq!(err.offset, 4);
}

#[test]
fn where_malformed_numbers() {
    for text in ["a = 1.", "a = -", "a = 1.2.3", "a = .5"] {
        let err = parse_where_clause(text).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedQuotedValue, "{text}");
    }
}

#[test]
fn where_unterminated_quote() {
    let err = parse_where_clause("a = 'abc").unwrap_err();
    assert_eq!(err.to_string(), "at WHERE: unterminated quoted string");
    assert_eq!(err.offset, 4);
}

#[test]
fn where_escaped_quote_does_not_terminate() {
    let clause = parse_where_clause(r"a = 'x\'y' AND b = 'z'").unwrap();
    assert_eq!(clause.conditions[0].operand2, quoted(r"'x\'y'"));
    assert_eq!(clause.conditions[1].operand2, quoted("'z'"));
}

#[test]
fn where_stops_at_unknown_keyword() {
    let text = "a = 1 ORDER BY a";
    let clause = parse_where_clause(text).unwrap();
    assert_eq!(clause.conditions.len(), 1);
    assert_eq!(&text[clause.end..], "ORDER BY a");
}
