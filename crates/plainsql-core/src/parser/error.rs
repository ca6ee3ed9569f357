//! Parser error types.

use std::fmt;
use std::io::{self, Write};

/// Grammar region in which a parse failed, shown as the `at ...:` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    /// The SELECT field list.
    Select,
    /// A field alias.
    As,
    /// The WHERE clause.
    Where,
    /// The SET list of an UPDATE.
    Update,
    /// The field list and rows of an INSERT.
    InsertInto,
}

impl Clause {
    /// Returns the label used in messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::As => "AS",
            Self::Where => "WHERE",
            Self::Update => "UPDATE",
            Self::InsertInto => "INSERT INTO",
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The operand before the operator.
    Left,
    /// The operand after the operator.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// What went wrong. The messages are stable and part of the public contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    /// The input does not start with SELECT, UPDATE, INSERT or DELETE.
    #[error("query type cannot be empty")]
    EmptyQueryType,

    /// No table name where one is required.
    #[error("table name cannot be empty")]
    EmptyTableName,

    /// The SELECT field list is empty or has an empty slot.
    #[error("expected field to SELECT")]
    ExpectedSelectField,

    /// `AS` is not followed by a name.
    #[error("expected alias for {field}")]
    ExpectedAlias {
        /// The field being aliased.
        field: String,
    },

    /// `WHERE` is followed by nothing.
    #[error("empty WHERE clause")]
    EmptyWhereClause,

    /// A condition operand is not followed by a comparison operator.
    #[error("condition without operator")]
    ConditionMissingOperator,

    /// One side of a condition is missing.
    #[error("condition with empty {side} side operand")]
    ConditionMissingOperand {
        /// Which side is missing.
        side: Side,
    },

    /// A value is not a single-quoted string where one is required, or is a
    /// malformed number.
    #[error("expected quoted value")]
    ExpectedQuotedValue,

    /// A single-quoted string is never closed.
    #[error("unterminated quoted string")]
    UnterminatedQuote,

    /// UPDATE or DELETE without a condition.
    #[error("WHERE clause is mandatory for UPDATE & DELETE")]
    WhereClauseMandatory,

    /// A SET column is not followed by `=`.
    #[error("expected '='")]
    ExpectedEquals,

    /// An INSERT never produced a row.
    #[error("need at least one row to insert")]
    NoRowsToInsert,

    /// An INSERT row does not have one value per field.
    #[error("value count doesn't match field count")]
    FieldValueCountMismatch,

    /// The INSERT field list is empty or uses `*`.
    #[error("expected at least one field to insert")]
    ExpectedInsertField,
}

/// A parse error positioned at a byte offset of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The clause being parsed, if the message carries a label.
    pub clause: Option<Clause>,
    /// 0-based byte offset into the input at which parsing stopped.
    pub offset: usize,
}

impl ParseError {
    /// Creates an unlabelled error.
    #[must_use]
    pub const fn new(kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            clause: None,
            offset,
        }
    }

    /// Creates an error labelled with the clause it occurred in.
    #[must_use]
    pub const fn at(clause: Clause, kind: ErrorKind, offset: usize) -> Self {
        Self {
            kind,
            clause: Some(clause),
            offset,
        }
    }

    /// The full message, including the clause label.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Writes the source line containing the error offset, then a caret
    /// under the failing column.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn render<W: Write>(&self, source: &str, out: &mut W) -> io::Result<()> {
        let offset = floor_char_boundary(source, self.offset);
        let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[offset..]
            .find('\n')
            .map_or(source.len(), |i| offset + i);
        let line = source[line_start..line_end].trim_end_matches('\r');

        // Tabs are kept so the caret lines up with tab stops in the terminal.
        let padding: String = source[line_start..offset]
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        writeln!(out, "{line}")?;
        writeln!(out, "{padding}^")
    }

    /// [`ParseError::render`] into a `String`.
    #[must_use]
    pub fn render_to_string(&self, source: &str) -> String {
        let mut out = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.render(source, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.clause {
            Some(clause) => write!(f, "at {clause}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for ParseError {}

/// A batch stopped at the query with the given index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("query #{index}: {source}")]
pub struct BatchError {
    /// 0-based position of the failing query in the batch.
    pub index: usize,
    /// Why it failed.
    pub source: ParseError,
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}
