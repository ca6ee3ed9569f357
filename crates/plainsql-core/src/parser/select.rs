//! SELECT statements.

use super::error::{Clause, ErrorKind, ParseError};
use super::parser::Parser;
use super::where_clause::parse_conditions;
use crate::lexer::Keyword;

/// Position inside a SELECT statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectState {
    Field,
    AfterField,
    Alias,
    AfterAlias,
    Table,
    AfterTable,
    Where,
    Done,
}

impl Parser<'_> {
    /// `SELECT <field> [AS <alias>] {, <field> [AS <alias>]} FROM <table> [WHERE ...]`
    pub(super) fn parse_select(&mut self) -> Result<(), ParseError> {
        let mut state = SelectState::Field;
        while state != SelectState::Done {
            self.cursor.skip_whitespace();
            state = self.select_step(state)?;
        }
        Ok(())
    }

    fn select_step(&mut self, state: SelectState) -> Result<SelectState, ParseError> {
        let offset = self.cursor.pos();
        let next = match state {
            SelectState::Field => {
                if self.cursor.is_eof() {
                    return Ok(SelectState::Done);
                }
                if self.cursor.peek_keyword(Keyword::From) {
                    return Err(ParseError::at(
                        Clause::Select,
                        ErrorKind::ExpectedSelectField,
                        offset,
                    ));
                }
                let Some(field) = self.cursor.read_expression() else {
                    return Err(ParseError::at(
                        Clause::Select,
                        ErrorKind::ExpectedSelectField,
                        offset,
                    ));
                };
                self.query.push_select_field(field.text);
                SelectState::AfterField
            }
            SelectState::AfterField => {
                if self.cursor.match_keyword(Keyword::As) {
                    SelectState::Alias
                } else {
                    self.after_select_item()
                }
            }
            SelectState::Alias => {
                let Some(alias) = self.cursor.read_identifier().filter(|t| t.text != "*") else {
                    let field = self.query.fields.last().cloned().unwrap_or_default();
                    return Err(ParseError::at(
                        Clause::As,
                        ErrorKind::ExpectedAlias { field },
                        offset,
                    ));
                };
                self.query.set_last_alias(alias.text);
                SelectState::AfterAlias
            }
            SelectState::AfterAlias => self.after_select_item(),
            SelectState::Table => {
                self.read_table_name()?;
                SelectState::AfterTable
            }
            SelectState::AfterTable => {
                if self.cursor.match_keyword(Keyword::Where) {
                    SelectState::Where
                } else {
                    SelectState::Done
                }
            }
            SelectState::Where => {
                for condition in parse_conditions(&mut self.cursor)? {
                    self.query.push_condition(condition);
                }
                SelectState::Done
            }
            SelectState::Done => SelectState::Done,
        };
        Ok(next)
    }

    fn after_select_item(&mut self) -> SelectState {
        if self.cursor.match_symbol(",") {
            SelectState::Field
        } else if self.cursor.match_keyword(Keyword::From) {
            SelectState::Table
        } else {
            SelectState::Done
        }
    }
}
