//! Abstract Syntax Tree (AST) types for parsed queries.

mod operand;
mod query;

pub use operand::{Condition, Operand, Operator};
pub use query::{Query, QueryType};
