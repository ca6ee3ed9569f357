//! The parse result and the bookkeeping used to build it.

use std::collections::BTreeMap;
use std::fmt;

use super::{Condition, Operand};

/// The kind of statement a query is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryType {
    /// Not yet determined. Never present in a successful parse.
    #[default]
    Unknown,
    /// `SELECT`
    Select,
    /// `UPDATE`
    Update,
    /// `INSERT INTO`
    Insert,
    /// `DELETE FROM`
    Delete,
}

impl QueryType {
    /// Returns the name of the query type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UnknownType",
            Self::Select => "Select",
            Self::Update => "Update",
            Self::Insert => "Insert",
            Self::Delete => "Delete",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed query.
///
/// Which collections are populated depends on [`QueryType`]:
///
/// | type   | `fields` | `aliases` | `conditions` | `updates` | `inserts` |
/// |--------|----------|-----------|--------------|-----------|-----------|
/// | Select | yes      | yes       | optional     |           |           |
/// | Update |          |           | at least one | yes       |           |
/// | Insert | yes      |           |              |           | yes       |
/// | Delete |          |           | at least one |           |           |
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    /// The statement kind.
    pub query_type: QueryType,
    /// The target table, with surrounding quotes removed.
    pub table_name: String,
    /// WHERE conditions in textual order, implicitly joined by AND.
    pub conditions: Vec<Condition>,
    /// UPDATE assignments, keyed by column.
    pub updates: BTreeMap<String, Operand>,
    /// INSERT rows, each aligned with `fields`.
    pub inserts: Vec<Vec<Operand>>,
    /// SELECTed or INSERTed field names.
    pub fields: Vec<String>,
    /// SELECT aliases aligned with `fields`; empty string means no alias.
    pub aliases: Vec<String>,
}

impl Query {
    /// Creates an empty query of the given type.
    #[must_use]
    pub fn new(query_type: QueryType) -> Self {
        Self {
            query_type,
            ..Self::default()
        }
    }

    pub(crate) fn push_select_field(&mut self, field: &str) {
        self.fields.push(field.to_owned());
        self.aliases.push(String::new());
    }

    pub(crate) fn set_last_alias(&mut self, alias: &str) {
        if let Some(last) = self.aliases.last_mut() {
            alias.clone_into(last);
        }
    }

    pub(crate) fn push_insert_field(&mut self, field: &str) {
        self.fields.push(field.to_owned());
    }

    pub(crate) fn push_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub(crate) fn set_update(&mut self, column: String, value: Operand) {
        self.updates.insert(column, value);
    }

    pub(crate) fn start_row(&mut self) {
        self.inserts.push(Vec::new());
    }

    pub(crate) fn push_row_value(&mut self, value: Operand) {
        match self.inserts.last_mut() {
            Some(row) => row.push(value),
            None => self.inserts.push(vec![value]),
        }
    }
}
