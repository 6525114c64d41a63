//! Shared partial-update builder
//!
//! Builds a parameterized UPDATE statement from the subset of allow-listed
//! columns a patch actually carries. Column names are compile-time
//! constants supplied by the repositories; values travel as bound
//! parameters only, with the target id bound last. An assignment set that
//! ends up empty is an error at build time, before any store call.

use crate::errors::{invalid_update, Result};
use rusqlite::types::Value;

/// Accumulates `column = ?N` assignments for one UPDATE statement
#[derive(Debug)]
pub struct UpdateBuilder {
    table: &'static str,
    columns: Vec<&'static str>,
    values: Vec<Value>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Record an assignment; call order defines parameter order.
    ///
    /// A `None` passed through `Option<T>` becomes a NULL parameter, which
    /// is how an explicit null in a patch nulls out its column.
    pub fn set(&mut self, column: &'static str, value: impl Into<Value>) {
        self.columns.push(column);
        self.values.push(value.into());
    }

    /// True when no assignment has been recorded
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Render the statement text and parameter list, id bound last
    ///
    /// # Errors
    /// * `InvalidUpdate` - no assignments were recorded
    pub fn build(self, id: i64) -> Result<(String, Vec<Value>)> {
        if self.columns.is_empty() {
            return Err(invalid_update(self.table));
        }

        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect();

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            self.table,
            assignments.join(", "),
            self.columns.len() + 1
        );

        let mut params = self.values;
        params.push(Value::Integer(id));

        Ok((sql, params))
    }
}
