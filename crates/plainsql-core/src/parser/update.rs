//! UPDATE statements.

use super::classify::{read_operand, ValueContext};
use super::error::{Clause, ErrorKind, ParseError};
use super::parser::Parser;
use super::where_clause::parse_conditions;
use crate::lexer::Keyword;

/// Position inside an UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UpdateState {
    Table,
    Set,
    Column,
    Equals { column: String },
    Value { column: String },
    AfterValue,
    Where,
    Done,
}

impl Parser<'_> {
    /// `UPDATE <table> SET <column> = '<value>' {, ...} WHERE ...`
    ///
    /// Running out of input anywhere before WHERE is not reported here; the
    /// final validation then reports the missing WHERE clause. A bare `WHERE`
    /// at the end still runs the WHERE machine so it reports the empty clause.
    pub(super) fn parse_update(&mut self) -> Result<(), ParseError> {
        let mut state = UpdateState::Table;
        while state != UpdateState::Done {
            self.cursor.skip_whitespace();
            state = self.update_step(state)?;
        }
        Ok(())
    }

    fn update_step(&mut self, state: UpdateState) -> Result<UpdateState, ParseError> {
        if self.cursor.is_eof() && !matches!(state, UpdateState::Table | UpdateState::Where) {
            return Ok(UpdateState::Done);
        }
        let offset = self.cursor.pos();

        let next = match state {
            UpdateState::Table => {
                self.read_table_name()?;
                UpdateState::Set
            }
            UpdateState::Set => {
                if self.cursor.match_keyword(Keyword::Set) {
                    UpdateState::Column
                } else {
                    UpdateState::Done
                }
            }
            UpdateState::Column => match self.cursor.read_identifier() {
                Some(column) if column.text != "*" => UpdateState::Equals {
                    column: column.text.to_owned(),
                },
                _ => UpdateState::Done,
            },
            UpdateState::Equals { column } => {
                if !self.cursor.match_symbol("=") {
                    return Err(ParseError::at(
                        Clause::Update,
                        ErrorKind::ExpectedEquals,
                        offset,
                    ));
                }
                UpdateState::Value { column }
            }
            UpdateState::Value { column } => {
                let Some(value) =
                    read_operand(&mut self.cursor, ValueContext::Assignment, Clause::Update)?
                else {
                    return Err(ParseError::at(
                        Clause::Update,
                        ErrorKind::ExpectedQuotedValue,
                        offset,
                    ));
                };
                self.query.set_update(column, value);
                UpdateState::AfterValue
            }
            UpdateState::AfterValue => {
                if self.cursor.match_symbol(",") {
                    UpdateState::Column
                } else if self.cursor.match_keyword(Keyword::Where) {
                    UpdateState::Where
                } else {
                    UpdateState::Done
                }
            }
            UpdateState::Where => {
                for condition in parse_conditions(&mut self.cursor)? {
                    self.query.push_condition(condition);
                }
                UpdateState::Done
            }
            UpdateState::Done => UpdateState::Done,
        };
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Operand;
    use crate::parser::{ErrorKind, Parser};

    #[test]
    fn test_assignments_without_spaces() {
        let query = Parser::new("UPDATE a SET b='1',c='2' WHERE d=3")
            .parse_query()
            .unwrap();
        assert_eq!(query.updates["b"], Operand::quoted("'1'"));
        assert_eq!(query.updates["c"], Operand::quoted("'2'"));
        assert_eq!(query.conditions[0].operand2, Operand::number("3"));
    }

    #[test]
    fn test_expected_equals_offset() {
        let err = Parser::new("UPDATE a SET b WHERE").parse_query().unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedEquals);
        assert_eq!(err.offset, 15);
    }

    #[test]
    fn test_trailing_where_is_an_empty_clause() {
        for sql in ["UPDATE a SET b = 'hello' WHERE", "UPDATE a SET b = 'hello' WHERE   "] {
            let err = Parser::new(sql).parse_query().unwrap_err();
            assert_eq!(err.to_string(), "at WHERE: empty WHERE clause", "{sql}");
            assert_eq!(err.offset, sql.len(), "{sql}");
        }
    }

    #[test]
    fn test_numeric_assignment_is_rejected() {
        let err = Parser::new("UPDATE a SET b = 1 WHERE c = '1'")
            .parse_query()
            .unwrap_err();
        assert_eq!(err.to_string(), "at UPDATE: expected quoted value");
        assert_eq!(err.offset, 17);
    }
}
