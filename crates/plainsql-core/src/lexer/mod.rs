//! Lexical layer.
//!
//! The dialect is scanned character by character in a single forward pass, so
//! there is no token stream: the [`Cursor`] hands out one fragment at a time
//! and the grammar decides in context what the fragment means.

mod cursor;
mod keyword;
mod span;

pub use cursor::{Cursor, Token, Unterminated};
pub use keyword::Keyword;
pub use span::Span;
