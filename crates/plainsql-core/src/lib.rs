//! # plainsql-core
//!
//! A single-pass parser for a small, case-insensitive SQL dialect.
//!
//! The dialect covers single-table `SELECT`, `UPDATE`, `INSERT` and `DELETE`
//! statements with flat, AND-joined `WHERE` conditions. There are no joins,
//! subqueries or operator precedence; function calls such as `version(a)` are
//! kept as opaque field text. The parser only builds a [`Query`]: it never
//! checks names against a schema and never executes anything.
//!
//! ## Parsing
//!
//! ```rust
//! use plainsql_core::ast::{Operand, Operator, QueryType};
//! use plainsql_core::parse_one;
//!
//! let query = parse_one("SELECT a, c AS d FROM b WHERE a != '1' AND c >= 2").unwrap();
//! assert_eq!(query.query_type, QueryType::Select);
//! assert_eq!(query.table_name, "b");
//! assert_eq!(query.fields, vec!["a", "c"]);
//! assert_eq!(query.aliases, vec!["", "d"]);
//! assert_eq!(query.conditions[0].operator, Operator::Ne);
//! assert_eq!(query.conditions[1].operand2, Operand::number("2"));
//! ```
//!
//! ## Errors
//!
//! Every failure carries a stable message and the byte offset where parsing
//! stopped, and can be rendered as a caret diagnostic:
//!
//! ```rust
//! use plainsql_core::parse_one;
//!
//! let sql = "UPDATE a SET b WHERE c = '1'";
//! let err = parse_one(sql).unwrap_err();
//! assert_eq!(err.to_string(), "at UPDATE: expected '='");
//! assert_eq!(err.offset, 15);
//! assert_eq!(
//!     err.render_to_string(sql),
//!     "UPDATE a SET b WHERE c = '1'\n               ^\n"
//! );
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{Condition, Operand, Operator, Query, QueryType};
pub use lexer::{Cursor, Keyword, Span};
pub use parser::{
    parse_many, parse_one, parse_where_clause, BatchError, Clause, ErrorKind, ParseError, Parser,
    WhereClause,
};
