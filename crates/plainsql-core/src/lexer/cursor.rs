//! Forward-only scanner over the query text.

use super::{Keyword, Span};

/// A fragment of the source, borrowed verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The text of the fragment.
    pub text: &'a str,
    /// Where the fragment sits in the source.
    pub span: Span,
}

/// A quoted string ran into the end of input before its closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unterminated {
    /// From the opening quote to the end of input.
    pub span: Span,
}

/// Holds the query text and the scan position.
///
/// The position only ever moves forward. Keywords are compared against an
/// ASCII upper-cased copy of the source computed once in [`Cursor::new`];
/// ASCII case mapping keeps every byte offset of the copy aligned with the
/// original.
pub struct Cursor<'a> {
    source: &'a str,
    upper: String,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            upper: source.to_ascii_uppercase(),
            pos: 0,
        }
    }

    /// The current byte offset.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Returns true once every byte has been consumed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// The unconsumed remainder of the source.
    #[must_use]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Returns the current character without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Advances past any ASCII whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
        self.pos += rest.len() - trimmed.len();
    }

    /// Returns true if `keyword` starts at the current position and is not
    /// merely the prefix of a longer word.
    #[must_use]
    pub fn peek_keyword(&self, keyword: Keyword) -> bool {
        let word = keyword.as_str();
        let upper = &self.upper[self.pos..];
        upper.starts_with(word) && !upper[word.len()..].starts_with(is_identifier_char)
    }

    /// Consumes `keyword` and the whitespace after it, if present.
    pub fn match_keyword(&mut self, keyword: Keyword) -> bool {
        if !self.peek_keyword(keyword) {
            return false;
        }
        self.pos += keyword.as_str().len();
        self.skip_whitespace();
        true
    }

    /// Consumes the literal `symbol` and the whitespace after it, if present.
    pub fn match_symbol(&mut self, symbol: &str) -> bool {
        if !self.rest().starts_with(symbol) {
            return false;
        }
        self.pos += symbol.len();
        self.skip_whitespace();
        true
    }

    /// Reads a bare name: `*`, or a letter or underscore followed by letters,
    /// digits, underscores and dots.
    ///
    /// Reserved keywords are not names; in that case nothing is consumed.
    pub fn read_identifier(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let len = if rest.starts_with('*') {
            1
        } else if rest.starts_with(is_identifier_start) {
            rest.find(|c: char| !is_identifier_char(c))
                .unwrap_or(rest.len())
        } else {
            return None;
        };
        if Keyword::from_str(&rest[..len]).is_some() {
            return None;
        }
        let start = self.pos;
        self.pos += len;
        Some(self.token_from(start))
    }

    /// Reads a name that may be followed by a parenthesized argument list,
    /// such as `version()` or `count(a)`, capturing the whole call as one
    /// fragment.
    ///
    /// An unbalanced `(` is left unconsumed.
    pub fn read_expression(&mut self) -> Option<Token<'a>> {
        let start = self.pos;
        let name = self.read_identifier()?;
        if name.text != "*" && self.peek() == Some('(') {
            if let Some(close) = matching_paren(self.rest()) {
                self.pos += close + 1;
            }
        }
        Some(self.token_from(start))
    }

    /// Reads a single-quoted string, delimiters included.
    ///
    /// A backslash escapes the character after it, so `\'` does not close
    /// the string. Nothing is unescaped. Returns `Ok(None)` without moving if
    /// the cursor is not on a quote.
    ///
    /// # Errors
    ///
    /// Returns [`Unterminated`] if the input ends before the closing quote;
    /// the cursor is then left at the end of input.
    pub fn read_quoted(&mut self) -> Result<Option<Token<'a>>, Unterminated> {
        let start = self.pos;
        let bytes = self.source.as_bytes();
        if bytes.get(start) != Some(&b'\'') {
            return Ok(None);
        }

        // Quote and backslash are ASCII, so byte stepping never lands inside
        // a multi-byte character when it matters.
        let mut i = start + 1;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'\'' => {
                    self.pos = i + 1;
                    return Ok(Some(self.token_from(start)));
                }
                _ => i += 1,
            }
        }

        self.pos = self.source.len();
        Err(Unterminated {
            span: Span::new(start, self.source.len()),
        })
    }

    /// Reads everything up to the next whitespace, punctuation, operator or
    /// quote character.
    pub fn read_bare(&mut self) -> Option<Token<'a>> {
        let rest = self.rest();
        let len = rest.find(is_delimiter).unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        let start = self.pos;
        self.pos += len;
        Some(self.token_from(start))
    }

    fn token_from(&self, start: usize) -> Token<'a> {
        let span = Span::new(start, self.pos);
        Token {
            text: span.slice(self.source),
            span,
        }
    }
}

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

const fn is_delimiter(c: char) -> bool {
    c.is_ascii_whitespace() || matches!(c, ',' | '(' | ')' | '=' | '<' | '>' | '!' | '\'')
}

/// Byte index of the `)` closing the `(` that `text` starts with.
fn matching_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
