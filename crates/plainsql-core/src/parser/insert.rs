//! INSERT statements.

use super::classify::{read_operand, ValueContext};
use super::error::{Clause, ErrorKind, ParseError};
use super::parser::Parser;
use crate::lexer::Keyword;

/// Position inside an INSERT statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertState {
    Into,
    Table,
    FieldsOpen,
    Field,
    AfterField,
    Values,
    RowOpen,
    Value,
    AfterValue,
    AfterRow,
    Done,
}

impl Parser<'_> {
    /// `INSERT INTO <table> (<field> {, <field>}) VALUES ('<value>' {, ...}) {, (...)}`
    ///
    /// Truncated input simply stops the machine; the final validation turns
    /// that into "no rows" or a row length mismatch.
    pub(super) fn parse_insert(&mut self) -> Result<(), ParseError> {
        let mut state = InsertState::Into;
        while state != InsertState::Done {
            self.cursor.skip_whitespace();
            state = self.insert_step(state)?;
        }
        Ok(())
    }

    fn insert_step(&mut self, state: InsertState) -> Result<InsertState, ParseError> {
        if self.cursor.is_eof() && state != InsertState::Table {
            return Ok(InsertState::Done);
        }
        let offset = self.cursor.pos();

        let next = match state {
            InsertState::Into => {
                if self.cursor.match_keyword(Keyword::Into) {
                    InsertState::Table
                } else {
                    InsertState::Done
                }
            }
            InsertState::Table => {
                self.read_table_name()?;
                InsertState::FieldsOpen
            }
            InsertState::FieldsOpen => self.expect_symbol("(", InsertState::Field),
            InsertState::Field => match self.cursor.read_identifier() {
                Some(field) if field.text != "*" => {
                    self.query.push_insert_field(field.text);
                    InsertState::AfterField
                }
                _ => {
                    return Err(ParseError::at(
                        Clause::InsertInto,
                        ErrorKind::ExpectedInsertField,
                        offset,
                    ));
                }
            },
            InsertState::AfterField => {
                if self.cursor.match_symbol(",") {
                    InsertState::Field
                } else {
                    self.expect_symbol(")", InsertState::Values)
                }
            }
            InsertState::Values => {
                if self.cursor.match_keyword(Keyword::Values) {
                    InsertState::RowOpen
                } else {
                    InsertState::Done
                }
            }
            InsertState::RowOpen => {
                if self.cursor.match_symbol("(") {
                    self.query.start_row();
                    InsertState::Value
                } else {
                    InsertState::Done
                }
            }
            InsertState::Value => {
                let Some(value) = read_operand(
                    &mut self.cursor,
                    ValueContext::Assignment,
                    Clause::InsertInto,
                )?
                else {
                    return Err(ParseError::at(
                        Clause::InsertInto,
                        ErrorKind::ExpectedQuotedValue,
                        offset,
                    ));
                };
                self.query.push_row_value(value);
                InsertState::AfterValue
            }
            InsertState::AfterValue => {
                if self.cursor.match_symbol(",") {
                    InsertState::Value
                } else {
                    self.expect_symbol(")", InsertState::AfterRow)
                }
            }
            InsertState::AfterRow => self.expect_symbol(",", InsertState::RowOpen),
            InsertState::Done => InsertState::Done,
        };
        Ok(next)
    }

    fn expect_symbol(&mut self, symbol: &str, next: InsertState) -> InsertState {
        if self.cursor.match_symbol(symbol) {
            next
        } else {
            InsertState::Done
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Operand;
    use crate::parser::{ErrorKind, Parser};

    #[test]
    fn test_rows_without_spaces() {
        let query = Parser::new("insert into t(a,b)values('1','2'),('3','4')")
            .parse_query()
            .unwrap();
        assert_eq!(query.table_name, "t");
        assert_eq!(query.fields, vec!["a", "b"]);
        assert_eq!(
            query.inserts[1],
            vec![Operand::quoted("'3'"), Operand::quoted("'4'")]
        );
    }

    #[test]
    fn test_empty_field_list() {
        let err = Parser::new("INSERT INTO a () VALUES ('1')")
            .parse_query()
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::ExpectedInsertField);
        assert_eq!(err.offset, 15);
    }

    #[test]
    fn test_unquoted_value() {
        let err = Parser::new("INSERT INTO a (b) VALUES (1)")
            .parse_query()
            .unwrap_err();
        assert_eq!(err.to_string(), "at INSERT INTO: expected quoted value");
        assert_eq!(err.offset, 26);
    }
}
