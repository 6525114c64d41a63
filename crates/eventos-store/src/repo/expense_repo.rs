//! Expense repository
//!
//! Every read resolves the human-readable concepto label through a LEFT
//! JOIN; a missing or dangling id_concept yields a null label rather than
//! invalidating the row.

use crate::errors::{from_rusqlite, not_found, Result};
use crate::repo::update::UpdateBuilder;
use eventos_core::model::{Expense, ExpenseDraft, ExpenseFilter, ExpensePatch, Page};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = "e.id, e.descripcion, e.detalle, e.responsable, e.monto, \
                              e.id_concept, c.nombre, e.created_at";
const FROM_JOIN: &str = "FROM expenses e LEFT JOIN conceptos c ON e.id_concept = c.id";

/// SQLite repository for expenses
pub struct ExpenseRepo;

impl ExpenseRepo {
    fn from_row(row: &Row) -> rusqlite::Result<Expense> {
        Ok(Expense {
            id: row.get(0)?,
            descripcion: row.get(1)?,
            detalle: row.get(2)?,
            responsable: row.get(3)?,
            monto: row.get(4)?,
            id_concept: row.get(5)?,
            concepto_nombre: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn filter_clause(filter: &ExpenseFilter, params: &mut Vec<Value>) -> String {
        match filter.id_concept {
            Some(id_concept) => {
                params.push(Value::Integer(id_concept));
                " WHERE e.id_concept = ?".to_string()
            }
            None => String::new(),
        }
    }

    /// List expenses, newest first, optionally filtered by concepto
    pub fn find_all(
        conn: &Connection,
        filter: &ExpenseFilter,
        page: &Page,
    ) -> Result<Vec<Expense>> {
        let mut params: Vec<Value> = Vec::new();
        let mut sql = format!("SELECT {} {}", SELECT_COLUMNS, FROM_JOIN);
        sql.push_str(&Self::filter_clause(filter, &mut params));
        sql.push_str(" ORDER BY e.created_at DESC, e.id DESC");
        if let Some(limit) = page.limit {
            sql.push_str(" LIMIT ?");
            params.push(Value::Integer(i64::from(limit)));
            if let Some(offset) = page.offset {
                sql.push_str(" OFFSET ?");
                params.push(Value::Integer(i64::from(offset)));
            }
        }

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let expenses = stmt
            .query_map(params_from_iter(params), Self::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(expenses)
    }

    /// Fetch a single expense with its concepto label
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Expense>> {
        conn.query_row(
            &format!("SELECT {} {} WHERE e.id = ?1", SELECT_COLUMNS, FROM_JOIN),
            [id],
            Self::from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Insert an expense
    pub fn create(conn: &Connection, draft: &ExpenseDraft) -> Result<i64> {
        conn.execute(
            "INSERT INTO expenses (descripcion, detalle, responsable, monto, id_concept)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                draft.descripcion,
                draft.detalle,
                draft.responsable,
                draft.monto,
                draft.id_concept,
            ],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, "expense created");
        Ok(id)
    }

    /// Apply a partial update; returns the number of rows changed
    ///
    /// # Errors
    /// * `InvalidUpdate` - the patch carries no recognized field (checked
    ///   before any store call)
    /// * `NotFound` - no expense with this id (checked before the UPDATE)
    pub fn update(conn: &Connection, id: i64, patch: &ExpensePatch) -> Result<usize> {
        let mut builder = UpdateBuilder::new("expenses");
        if let Some(v) = &patch.descripcion {
            builder.set("descripcion", v.clone());
        }
        if let Some(v) = &patch.detalle {
            builder.set("detalle", v.clone());
        }
        if let Some(v) = &patch.responsable {
            builder.set("responsable", v.clone());
        }
        if let Some(v) = patch.monto {
            builder.set("monto", v);
        }
        if let Some(v) = patch.id_concept {
            builder.set("id_concept", v);
        }

        let (sql, params) = builder.build(id)?;

        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("expense", id));
        }

        conn.execute(&sql, params_from_iter(params))
            .map_err(from_rusqlite)
    }

    /// Delete an expense; returns the number of rows changed
    ///
    /// # Errors
    /// * `NotFound` - no expense with this id (checked before the DELETE)
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("expense", id));
        }

        let changed = conn
            .execute("DELETE FROM expenses WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tracing::debug!(id, "expense deleted");
        Ok(changed)
    }

    /// Count expenses matching the filters (pagination does not apply)
    pub fn count(conn: &Connection, filter: &ExpenseFilter) -> Result<i64> {
        let mut params: Vec<Value> = Vec::new();
        let mut sql = String::from("SELECT COUNT(*) FROM expenses e");
        sql.push_str(&Self::filter_clause(filter, &mut params));

        conn.query_row(&sql, params_from_iter(params), |row| row.get(0))
            .map_err(from_rusqlite)
    }
}
