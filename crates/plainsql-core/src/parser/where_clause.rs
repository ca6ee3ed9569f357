//! The WHERE sub-machine shared by SELECT, UPDATE and DELETE.

use tracing::trace;

use super::classify::{read_operand, ValueContext};
use super::error::{Clause, ErrorKind, ParseError, Side};
use crate::ast::{Condition, Operand, Operator};
use crate::lexer::{Cursor, Keyword};

/// Position inside a WHERE clause.
enum WhereState {
    Field,
    Operator { left: Operand },
    Value { left: Operand, operator: Operator },
    And,
}

/// Conditions parsed from a standalone WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    /// The conditions, in textual order.
    pub conditions: Vec<Condition>,
    /// Byte offset at which the clause stopped. Equal to the input length
    /// when the whole input was consumed.
    pub end: usize,
}

/// Parses `text` as the body of a WHERE clause, i.e. everything after the
/// `WHERE` keyword.
///
/// Parsing stops without error at the end of input or at anything that is
/// not `AND` after a complete condition.
///
/// # Errors
///
/// Returns a [`ParseError`] labelled `WHERE` if the clause is empty or a
/// condition is incomplete or malformed.
///
/// # Example
///
/// ```rust
/// use plainsql_core::ast::{Operand, Operator};
/// use plainsql_core::parse_where_clause;
///
/// let clause = parse_where_clause("a >= -1.21 AND b != c").unwrap();
/// assert_eq!(clause.conditions.len(), 2);
/// assert_eq!(clause.conditions[0].operator, Operator::Gte);
/// assert_eq!(clause.conditions[1].operand2, Operand::field("c"));
/// ```
pub fn parse_where_clause(text: &str) -> Result<WhereClause, ParseError> {
    let mut cursor = Cursor::new(text);
    let conditions = parse_conditions(&mut cursor)?;
    Ok(WhereClause {
        conditions,
        end: cursor.pos(),
    })
}

/// Runs the WHERE sub-machine from the cursor position.
pub(crate) fn parse_conditions(cursor: &mut Cursor<'_>) -> Result<Vec<Condition>, ParseError> {
    let mut conditions = Vec::new();
    let mut state = WhereState::Field;

    loop {
        cursor.skip_whitespace();
        let offset = cursor.pos();

        state = match state {
            WhereState::Field => {
                match read_operand(cursor, ValueContext::Comparison, Clause::Where)? {
                    Some(left) => WhereState::Operator { left },
                    None if conditions.is_empty() && cursor.is_eof() => {
                        return Err(ParseError::at(
                            Clause::Where,
                            ErrorKind::EmptyWhereClause,
                            offset,
                        ));
                    }
                    None => {
                        return Err(ParseError::at(
                            Clause::Where,
                            ErrorKind::ConditionMissingOperand { side: Side::Left },
                            offset,
                        ));
                    }
                }
            }
            WhereState::Operator { left } => {
                let Some(operator) = Operator::ALL
                    .into_iter()
                    .find(|op| cursor.match_symbol(op.as_str()))
                else {
                    return Err(ParseError::at(
                        Clause::Where,
                        ErrorKind::ConditionMissingOperator,
                        offset,
                    ));
                };
                WhereState::Value { left, operator }
            }
            WhereState::Value { left, operator } => {
                let Some(right) = read_operand(cursor, ValueContext::Comparison, Clause::Where)?
                else {
                    return Err(ParseError::at(
                        Clause::Where,
                        ErrorKind::ConditionMissingOperand { side: Side::Right },
                        offset,
                    ));
                };
                conditions.push(Condition::new(left, operator, right));
                WhereState::And
            }
            WhereState::And => {
                if !cursor.match_keyword(Keyword::And) {
                    break;
                }
                WhereState::Field
            }
        };
    }

    trace!(conditions = conditions.len(), end = cursor.pos(), "WHERE clause parsed");
    Ok(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_condition() {
        let clause = parse_where_clause("a = ''").unwrap();
        assert_eq!(
            clause.conditions,
            vec![Condition::new(
                Operand::field("a"),
                Operator::Eq,
                Operand::quoted("''")
            )]
        );
        assert_eq!(clause.end, 6);
    }

    #[test]
    fn test_two_char_operators_are_not_split() {
        for (text, operator) in [
            ("a<=1", Operator::Lte),
            ("a>=1", Operator::Gte),
            ("a!=1", Operator::Ne),
            ("a<1", Operator::Lt),
            ("a>1", Operator::Gt),
            ("a=1", Operator::Eq),
        ] {
            let clause = parse_where_clause(text).unwrap();
            assert_eq!(clause.conditions[0].operator, operator, "{text}");
            assert_eq!(clause.conditions[0].operand2, Operand::number("1"), "{text}");
        }
    }

    #[test]
    fn test_stops_before_trailing_text() {
        let clause = parse_where_clause("a = '1' LIMIT 3").unwrap();
        assert_eq!(clause.conditions.len(), 1);
        assert_eq!(clause.end, 8);
    }

    #[test]
    fn test_empty() {
        let err = parse_where_clause("   ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::EmptyWhereClause);
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn test_dangling_and() {
        let err = parse_where_clause("a = '1' AND").unwrap_err();
        assert_eq!(
            err.to_string(),
            "at WHERE: condition with empty left side operand"
        );
        assert_eq!(err.offset, 11);
    }

    #[test]
    fn test_operator_without_value() {
        let err = parse_where_clause("a >").unwrap_err();
        assert_eq!(
            err.to_string(),
            "at WHERE: condition with empty right side operand"
        );
    }

    #[test]
    fn test_missing_operator_mid_input() {
        let err = parse_where_clause("a b").unwrap_err();
        assert_eq!(err.kind, ErrorKind::ConditionMissingOperator);
        assert_eq!(err.offset, 2);
    }
}
