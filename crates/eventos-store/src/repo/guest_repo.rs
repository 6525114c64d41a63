//! Guest repository

use crate::errors::{from_rusqlite, not_found, Result};
use crate::repo::update::UpdateBuilder;
use eventos_core::model::{Gender, Guest, GuestDraft, GuestFilter, GuestPatch, Page};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, OptionalExtension, Row};

const SELECT_COLUMNS: &str = "id, first_name, last_name, gender, family, guest_count, \
                              expiration_date, confirmation, created_at, updated_at";

/// SQLite repository for guests
pub struct GuestRepo;

impl GuestRepo {
    fn from_row(row: &Row) -> rusqlite::Result<Guest> {
        let gender_raw: Option<String> = row.get(3)?;
        let gender = match gender_raw {
            None => None,
            Some(raw) => Some(Gender::parse(&raw).ok_or_else(|| {
                rusqlite::Error::FromSqlConversionFailure(
                    3,
                    rusqlite::types::Type::Text,
                    format!("unrecognized gender value: {}", raw).into(),
                )
            })?),
        };

        // The store keeps booleans as integers; a NULLed-out column reads
        // as false
        let confirmation: Option<i64> = row.get(7)?;

        Ok(Guest {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            gender,
            family: row.get(4)?,
            guest_count: row.get(5)?,
            expiration_date: row.get(6)?,
            confirmation: confirmation.map(|v| v != 0).unwrap_or(false),
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }

    fn filter_clause(filter: &GuestFilter, params: &mut Vec<Value>) -> String {
        let mut conditions: Vec<&'static str> = Vec::new();

        if let Some(gender) = filter.gender {
            conditions.push("gender = ?");
            params.push(Value::Text(gender.as_str().to_string()));
        }
        if let Some(family) = &filter.family {
            conditions.push("family LIKE ?");
            params.push(Value::Text(format!("%{}%", family)));
        }
        if let Some(confirmation) = filter.confirmation {
            conditions.push("confirmation = ?");
            params.push(Value::Integer(i64::from(confirmation)));
        }

        if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        }
    }

    /// List guests, newest first, with optional filters and pagination
    ///
    /// Pagination bounds are the calling boundary's responsibility; an
    /// offset without a limit is ignored.
    pub fn find_all(conn: &Connection, filter: &GuestFilter, page: &Page) -> Result<Vec<Guest>> {
        let mut params: Vec<Value> = Vec::new();
        let mut sql = format!("SELECT {} FROM guests", SELECT_COLUMNS);
        sql.push_str(&Self::filter_clause(filter, &mut params));
        sql.push_str(" ORDER BY created_at DESC, id DESC");
        if let Some(limit) = page.limit {
            sql.push_str(" LIMIT ?");
            params.push(Value::Integer(i64::from(limit)));
            if let Some(offset) = page.offset {
                sql.push_str(" OFFSET ?");
                params.push(Value::Integer(i64::from(offset)));
            }
        }

        let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;
        let guests = stmt
            .query_map(params_from_iter(params), Self::from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(guests)
    }

    /// Fetch a single guest; absence is Ok(None), never an error
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Guest>> {
        conn.query_row(
            &format!("SELECT {} FROM guests WHERE id = ?1", SELECT_COLUMNS),
            [id],
            Self::from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Insert a guest, applying column defaults for omitted optionals
    pub fn create(conn: &Connection, draft: &GuestDraft) -> Result<i64> {
        conn.execute(
            "INSERT INTO guests (first_name, last_name, gender, family, guest_count, expiration_date, confirmation)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                draft.first_name,
                draft.last_name,
                draft.gender.map(|g| g.as_str()),
                draft.family,
                draft.guest_count.unwrap_or(1),
                draft.expiration_date,
                draft.confirmation.unwrap_or(false),
            ],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        tracing::debug!(id, "guest created");
        Ok(id)
    }

    /// Apply a partial update; returns the number of rows changed
    ///
    /// # Errors
    /// * `InvalidUpdate` - the patch carries no recognized field (checked
    ///   before any store call)
    /// * `NotFound` - no guest with this id (checked before the UPDATE)
    pub fn update(conn: &Connection, id: i64, patch: &GuestPatch) -> Result<usize> {
        let mut builder = UpdateBuilder::new("guests");
        if let Some(v) = &patch.first_name {
            builder.set("first_name", v.clone());
        }
        if let Some(v) = &patch.last_name {
            builder.set("last_name", v.clone());
        }
        if let Some(v) = patch.gender {
            builder.set("gender", v.map(|g| g.as_str().to_string()));
        }
        if let Some(v) = &patch.family {
            builder.set("family", v.clone());
        }
        if let Some(v) = patch.guest_count {
            builder.set("guest_count", v);
        }
        if let Some(v) = patch.expiration_date {
            builder.set("expiration_date", v.map(|d| d.format("%Y-%m-%d").to_string()));
        }
        if let Some(v) = patch.confirmation {
            builder.set("confirmation", v);
        }

        let (sql, params) = builder.build(id)?;

        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("guest", id));
        }

        conn.execute(&sql, params_from_iter(params))
            .map_err(from_rusqlite)
    }

    /// Delete a guest; returns the number of rows changed
    ///
    /// # Errors
    /// * `NotFound` - no guest with this id (checked before the DELETE)
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        if Self::find_by_id(conn, id)?.is_none() {
            return Err(not_found("guest", id));
        }

        let changed = conn
            .execute("DELETE FROM guests WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        tracing::debug!(id, "guest deleted");
        Ok(changed)
    }

    /// Count guests matching the filters (pagination does not apply)
    pub fn count(conn: &Connection, filter: &GuestFilter) -> Result<i64> {
        let mut params: Vec<Value> = Vec::new();
        let mut sql = String::from("SELECT COUNT(*) FROM guests");
        sql.push_str(&Self::filter_clause(filter, &mut params));

        conn.query_row(&sql, params_from_iter(params), |row| row.get(0))
            .map_err(from_rusqlite)
    }
}
