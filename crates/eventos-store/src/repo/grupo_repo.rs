//! Grupo repository

use crate::errors::{from_rusqlite, not_found, Result};
use crate::repo::update::UpdateBuilder;
use eventos_core::model::{Grupo, GrupoDraft, GrupoPatch};
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

/// SQLite repository for grupos
pub struct GrupoRepo;

impl GrupoRepo {
    fn from_row(row: &Row) -> rusqlite::Result<Grupo> {
        Ok(Grupo {
            id: row.get(0)?,
            nombre: row.get(1)?,
        })
    }

    /// List all grupos, alphabetically by nombre
    pub fn find_all(conn: &Connection) -> Result<Vec<Grupo>> {
        let mut stmt = conn
            .prepare("SELECT id, nombre FROM grupos ORDER BY nombre ASC, id ASC")
            .map_err(from_rusqlite)?;
        let grupos = stmt
            .query_map([], Self::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(grupos)
    }

    /// Fetch a single grupo; absence is Ok(None), never an error
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Grupo>> {
        conn.query_row(
            "SELECT id, nombre FROM grupos WHERE id = ?1",
            [id],
            Self::from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Insert a grupo
    pub fn create(conn: &Connection, draft: &GrupoDraft) -> Result<i64> {
        conn.execute(
            "INSERT INTO grupos (nombre) VALUES (?1)",
            rusqlite::params![draft.nombre],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Apply a partial update; returns the number of rows changed
    ///
    /// # Errors
    /// * `InvalidUpdate` - the patch carries no recognized field
    /// * `NotFound` - no grupo with this id
    pub fn update(conn: &Connection, id: i64, patch: &GrupoPatch) -> Result<usize> {
        let mut builder = UpdateBuilder::new("grupos");
        if let Some(v) = &patch.nombre {
            builder.set("nombre", v.clone());
        }

        let (sql, params) = builder.build(id)?;

        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("grupo", id));
        }

        conn.execute(&sql, params_from_iter(params))
            .map_err(from_rusqlite)
    }

    /// Delete a grupo; returns the number of rows changed
    ///
    /// # Errors
    /// * `NotFound` - no grupo with this id
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("grupo", id));
        }

        conn.execute("DELETE FROM grupos WHERE id = ?1", [id])
            .map_err(from_rusqlite)
    }

    /// Count all grupos
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM grupos", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}
