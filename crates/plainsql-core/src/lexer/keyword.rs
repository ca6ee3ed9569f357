//! Reserved words of the dialect.

/// SQL keywords understood by the parser.
///
/// Keywords are matched case-insensitively and can never be used as bare
/// field, table or alias names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Statements
    Select,
    Insert,
    Update,
    Delete,

    // Clauses
    From,
    Where,
    As,
    Set,
    Into,
    Values,

    // Conditions
    And,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Select,
        Self::Insert,
        Self::Update,
        Self::Delete,
        Self::From,
        Self::Where,
        Self::As,
        Self::Set,
        Self::Into,
        Self::Values,
        Self::And,
    ];

    /// Returns the upper-case spelling of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::As => "AS",
            Self::Set => "SET",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::And => "AND",
        }
    }

    /// Attempts to parse a keyword from a string (case-insensitive).
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
