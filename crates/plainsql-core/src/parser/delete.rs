//! DELETE statements.

use super::error::ParseError;
use super::parser::Parser;
use super::where_clause::parse_conditions;
use crate::lexer::Keyword;

/// Position inside a DELETE statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteState {
    From,
    Table,
    AfterTable,
    Where,
    Done,
}

impl Parser<'_> {
    /// `DELETE FROM <table> WHERE ...`
    pub(super) fn parse_delete(&mut self) -> Result<(), ParseError> {
        let mut state = DeleteState::From;
        while state != DeleteState::Done {
            self.cursor.skip_whitespace();
            state = match state {
                DeleteState::From => {
                    if self.cursor.match_keyword(Keyword::From) {
                        DeleteState::Table
                    } else {
                        DeleteState::Done
                    }
                }
                DeleteState::Table => {
                    self.read_table_name()?;
                    DeleteState::AfterTable
                }
                DeleteState::AfterTable => {
                    if self.cursor.match_keyword(Keyword::Where) {
                        DeleteState::Where
                    } else {
                        DeleteState::Done
                    }
                }
                DeleteState::Where => {
                    for condition in parse_conditions(&mut self.cursor)? {
                        self.query.push_condition(condition);
                    }
                    DeleteState::Done
                }
                DeleteState::Done => DeleteState::Done,
            };
        }
        Ok(())
    }
}
