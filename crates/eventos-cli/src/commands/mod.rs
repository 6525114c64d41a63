//! CLI command implementations

pub mod conceptos;
pub mod expenses;
pub mod grupos;
pub mod guests;
pub mod init;

use std::path::Path;

use eventos_core::errors::{EvError, EvErrorKind, Result};
use eventos_core::model::Page;
use eventos_core::validate::FieldBag;
use rusqlite::Connection;

/// Open and prepare the database for a command invocation
///
/// Migrations are idempotent, so running them here keeps every command
/// usable against a fresh path without an explicit `init`.
pub(crate) fn open_db(path: &Path) -> Result<Connection> {
    let mut conn = eventos_store::db::open(path)?;
    eventos_store::db::configure(&conn)?;
    eventos_store::migrations::apply_migrations(&mut conn)?;
    Ok(conn)
}

/// Parse a --json argument into a field-bag
pub(crate) fn parse_bag(json: &str) -> Result<FieldBag> {
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(EvError::new(EvErrorKind::Serialization)
            .with_message("payload must be a JSON object")),
        Err(e) => Err(EvError::from(e)),
    }
}

/// Bounds-check pagination flags; the repositories trust these
pub(crate) fn page(limit: Option<u32>, offset: Option<u32>) -> Result<Page> {
    if let Some(limit) = limit {
        if !(1..=100).contains(&limit) {
            return Err(EvError::validation(vec![
                "Limit must be a number between 1 and 100".to_string(),
            ]));
        }
    }
    Ok(Page { limit, offset })
}

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
