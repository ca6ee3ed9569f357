//! Query parser.
//!
//! A single-pass, no-backtracking state machine: one closed state enum per
//! statement kind, with the WHERE sub-machine shared by SELECT, UPDATE and
//! DELETE.

mod classify;
mod delete;
mod error;
mod insert;
mod parser;
mod select;
mod update;
mod where_clause;

use tracing::debug;

pub use classify::{classify, is_number, ValueContext};
pub use error::{BatchError, Clause, ErrorKind, ParseError, Side};
pub use parser::Parser;
pub use where_clause::{parse_where_clause, WhereClause};

use crate::ast::Query;

/// Parses exactly one statement.
///
/// Text following a complete statement is ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] positioned at the byte offset where parsing
/// stopped.
pub fn parse_one(text: &str) -> Result<Query, ParseError> {
    Parser::new(text).parse_query()
}

/// Parses each text in order, stopping at the first failure.
///
/// # Errors
///
/// Returns a [`BatchError`] carrying the index of the failing text.
pub fn parse_many<I, S>(texts: I) -> Result<Vec<Query>, BatchError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            debug!(index, "parsing query");
            parse_one(text.as_ref()).map_err(|source| {
                debug!(index, error = %source, "batch stopped");
                BatchError { index, source }
            })
        })
        .collect()
}
