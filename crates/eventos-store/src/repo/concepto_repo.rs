//! Concepto repository

use crate::errors::{from_rusqlite, not_found, Result};
use crate::repo::update::UpdateBuilder;
use eventos_core::model::{Concepto, ConceptoDraft, ConceptoPatch};
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

/// SQLite repository for conceptos
pub struct ConceptoRepo;

impl ConceptoRepo {
    fn from_row(row: &Row) -> rusqlite::Result<Concepto> {
        Ok(Concepto {
            id: row.get(0)?,
            nombre: row.get(1)?,
            subtotal: row.get(2)?,
        })
    }

    /// List all conceptos, alphabetically by nombre
    pub fn find_all(conn: &Connection) -> Result<Vec<Concepto>> {
        let mut stmt = conn
            .prepare("SELECT id, nombre, subtotal FROM conceptos ORDER BY nombre ASC, id ASC")
            .map_err(from_rusqlite)?;
        let conceptos = stmt
            .query_map([], Self::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(conceptos)
    }

    /// Fetch a single concepto; absence is Ok(None), never an error
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Concepto>> {
        conn.query_row(
            "SELECT id, nombre, subtotal FROM conceptos WHERE id = ?1",
            [id],
            Self::from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Insert a concepto
    pub fn create(conn: &Connection, draft: &ConceptoDraft) -> Result<i64> {
        conn.execute(
            "INSERT INTO conceptos (nombre, subtotal) VALUES (?1, ?2)",
            rusqlite::params![draft.nombre, draft.subtotal],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Apply a partial update; returns the number of rows changed
    ///
    /// # Errors
    /// * `InvalidUpdate` - the patch carries no recognized field
    /// * `NotFound` - no concepto with this id
    pub fn update(conn: &Connection, id: i64, patch: &ConceptoPatch) -> Result<usize> {
        let mut builder = UpdateBuilder::new("conceptos");
        if let Some(v) = &patch.nombre {
            builder.set("nombre", v.clone());
        }
        if let Some(v) = patch.subtotal {
            builder.set("subtotal", v);
        }

        let (sql, params) = builder.build(id)?;

        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("concepto", id));
        }

        conn.execute(&sql, params_from_iter(params))
            .map_err(from_rusqlite)
    }

    /// Delete a concepto; returns the number of rows changed
    ///
    /// Expenses referencing the concepto keep their rows; with foreign
    /// keys enforced the DELETE fails with a constraint error instead.
    ///
    /// # Errors
    /// * `NotFound` - no concepto with this id
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("concepto", id));
        }

        conn.execute("DELETE FROM conceptos WHERE id = ?1", [id])
            .map_err(from_rusqlite)
    }

    /// Count all conceptos
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM conceptos", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}
