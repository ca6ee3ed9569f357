//! Operands, comparison operators and WHERE conditions.

use std::fmt;

/// A value on either side of a condition, or inside SET / VALUES.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// A column reference or opaque expression such as `version(a)`.
    Field(String),
    /// A single-quoted literal, stored with its quotes and escapes intact.
    QuotedString(String),
    /// A numeric literal exactly as written, e.g. `-1.21`.
    NumberLiteral(String),
}

impl Operand {
    /// Creates a field operand.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Creates a quoted-string operand from its raw text, quotes included.
    #[must_use]
    pub fn quoted(raw: impl Into<String>) -> Self {
        Self::QuotedString(raw.into())
    }

    /// Creates a numeric operand from its raw text.
    #[must_use]
    pub fn number(raw: impl Into<String>) -> Self {
        Self::NumberLiteral(raw.into())
    }

    /// Returns the stored text verbatim.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Field(s) | Self::QuotedString(s) | Self::NumberLiteral(s) => s,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
}

impl Operator {
    /// All operators in matching order: two-character forms come before the
    /// single-character forms they start with.
    pub const ALL: [Self; 6] = [
        Self::Ne,
        Self::Lte,
        Self::Gte,
        Self::Eq,
        Self::Lt,
        Self::Gt,
    ];

    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }

    /// Returns the operator's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Eq => "Eq",
            Self::Ne => "Ne",
            Self::Gt => "Gt",
            Self::Lt => "Lt",
            Self::Gte => "Gte",
            Self::Lte => "Lte",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comparison in a WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Condition {
    /// Left-hand side.
    pub operand1: Operand,
    /// The comparison.
    pub operator: Operator,
    /// Right-hand side.
    pub operand2: Operand,
}

impl Condition {
    /// Creates a new condition.
    #[must_use]
    pub const fn new(operand1: Operand, operator: Operator, operand2: Operand) -> Self {
        Self {
            operand1,
            operator,
            operand2,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.operand1, self.operator, self.operand2)
    }
}
