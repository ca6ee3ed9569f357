//! Operand classification.
//!
//! Decides whether a raw fragment is a field reference, a quoted string or a
//! number, depending on where in the grammar it appears.

use super::error::{Clause, ErrorKind, ParseError};
use crate::ast::Operand;
use crate::lexer::{Cursor, Keyword};

/// Where an operand appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueContext {
    /// Either side of a WHERE comparison: quoted strings, numbers and bare
    /// fields are all accepted.
    Comparison,
    /// SET right-hand sides and VALUES rows: only quoted strings.
    Assignment,
}

/// Classifies a raw fragment.
///
/// A fragment that starts with a digit or `-` must be a complete number;
/// `1a` is rejected rather than treated as a field.
///
/// # Errors
///
/// Returns [`ErrorKind::ExpectedQuotedValue`] if the fragment is not valid
/// in `context`.
pub fn classify(raw: &str, context: ValueContext) -> Result<Operand, ErrorKind> {
    if raw.starts_with('\'') {
        return Ok(Operand::quoted(raw));
    }
    if context == ValueContext::Assignment {
        return Err(ErrorKind::ExpectedQuotedValue);
    }
    if is_number(raw) {
        return Ok(Operand::number(raw));
    }
    if raw.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_')
        && Keyword::from_str(raw).is_none()
    {
        return Ok(Operand::field(raw));
    }
    Err(ErrorKind::ExpectedQuotedValue)
}

/// Optional `-`, one or more digits, then optionally `.` and one or more
/// digits.
#[must_use]
pub fn is_number(raw: &str) -> bool {
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    digits(integer) && fraction.map_or(true, digits)
}

/// Reads and classifies the operand at the cursor.
///
/// Returns `Ok(None)` if nothing operand-like starts here, e.g. at end of
/// input or on a `)`.
pub(crate) fn read_operand(
    cursor: &mut Cursor<'_>,
    context: ValueContext,
    clause: Clause,
) -> Result<Option<Operand>, ParseError> {
    let token = match cursor.read_quoted() {
        Ok(Some(token)) => token,
        Ok(None) => match cursor.read_expression().or_else(|| cursor.read_bare()) {
            Some(token) => token,
            None => return Ok(None),
        },
        Err(unterminated) => {
            return Err(ParseError::at(
                clause,
                ErrorKind::UnterminatedQuote,
                unterminated.span.start,
            ));
        }
    };
    classify(token.text, context)
        .map(Some)
        .map_err(|kind| ParseError::at(clause, kind, token.span.start))
}
