//! Statement detection, shared helpers and final validation.

use tracing::trace;

use super::error::{Clause, ErrorKind, ParseError};
use crate::ast::{Query, QueryType};
use crate::lexer::{Cursor, Keyword};

/// Single-pass parser for one query string.
///
/// Each statement kind runs its own state machine over the shared
/// [`Cursor`]; none of them ever moves the cursor backwards.
pub struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) query: Query,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
            query: Query::default(),
        }
    }

    /// Parses a single statement.
    ///
    /// Text after a complete statement is ignored.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid statement.
    pub fn parse_query(&mut self) -> Result<Query, ParseError> {
        let query_type = self.detect_type()?;
        trace!(query_type = %query_type, "statement detected");
        self.query = Query::new(query_type);

        match query_type {
            QueryType::Select => self.parse_select()?,
            QueryType::Update => self.parse_update()?,
            QueryType::Insert => self.parse_insert()?,
            QueryType::Delete => self.parse_delete()?,
            QueryType::Unknown => {
                return Err(ParseError::new(
                    ErrorKind::EmptyQueryType,
                    self.cursor.pos(),
                ));
            }
        }

        self.validate()?;
        Ok(std::mem::take(&mut self.query))
    }

    fn detect_type(&mut self) -> Result<QueryType, ParseError> {
        self.cursor.skip_whitespace();
        let detected = [
            (Keyword::Select, QueryType::Select),
            (Keyword::Update, QueryType::Update),
            (Keyword::Insert, QueryType::Insert),
            (Keyword::Delete, QueryType::Delete),
        ]
        .into_iter()
        .find(|(keyword, _)| self.cursor.match_keyword(*keyword));

        match detected {
            Some((_, query_type)) => Ok(query_type),
            None => Err(ParseError::new(
                ErrorKind::EmptyQueryType,
                self.cursor.pos(),
            )),
        }
    }

    /// Reads a table name, bare or single-quoted, into the query.
    pub(super) fn read_table_name(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.pos();
        let name = match self.cursor.read_quoted() {
            Ok(Some(token)) => token
                .text
                .strip_prefix('\'')
                .and_then(|t| t.strip_suffix('\''))
                .unwrap_or_default(),
            Ok(None) => self
                .cursor
                .read_identifier()
                .map(|token| token.text)
                .filter(|text| *text != "*")
                .unwrap_or_default(),
            // Table-name errors carry no clause label.
            Err(unterminated) => {
                return Err(ParseError::new(
                    ErrorKind::UnterminatedQuote,
                    unterminated.span.start,
                ));
            }
        };

        if name.is_empty() {
            return Err(ParseError::new(ErrorKind::EmptyTableName, start));
        }
        name.clone_into(&mut self.query.table_name);
        Ok(())
    }

    /// Checks what the state machines cannot see while running: anything a
    /// statement needs but never received before the input ran out.
    fn validate(&self) -> Result<(), ParseError> {
        let offset = self.cursor.pos();
        let query = &self.query;

        if query.table_name.is_empty() {
            return Err(ParseError::new(ErrorKind::EmptyTableName, offset));
        }

        match query.query_type {
            QueryType::Update | QueryType::Delete if query.conditions.is_empty() => Err(
                ParseError::at(Clause::Where, ErrorKind::WhereClauseMandatory, offset),
            ),
            QueryType::Insert if query.inserts.is_empty() => Err(ParseError::at(
                Clause::InsertInto,
                ErrorKind::NoRowsToInsert,
                offset,
            )),
            QueryType::Insert
                if query
                    .inserts
                    .iter()
                    .any(|row| row.len() != query.fields.len()) =>
            {
                Err(ParseError::at(
                    Clause::InsertInto,
                    ErrorKind::FieldValueCountMismatch,
                    offset,
                ))
            }
            _ => Ok(()),
        }
    }
}
