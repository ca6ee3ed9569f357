#![allow(dead_code)]

use plainsql_core::ast::{Condition, Operand, Operator, Query};
use plainsql_core::{parse_one, ParseError};

pub fn parse(sql: &str) -> Query {
    parse_one(sql).unwrap_or_else(|e| {
        panic!(
            "Failed to parse: {sql}\nError: {e}\n{}",
            e.render_to_string(sql)
        )
    })
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_one(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

/// Asserts the exact user-visible message for `sql`.
pub fn assert_err(sql: &str, message: &str) {
    let err = parse_err(sql);
    assert_eq!(err.to_string(), message, "Unexpected error for: {sql}");
}

pub fn cond(left: Operand, operator: Operator, right: Operand) -> Condition {
    Condition::new(left, operator, right)
}

pub fn field(name: &str) -> Operand {
    Operand::field(name)
}

pub fn quoted(raw: &str) -> Operand {
    Operand::quoted(raw)
}

pub fn number(raw: &str) -> Operand {
    Operand::number(raw)
}
