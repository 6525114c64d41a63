//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections.
//! A connection is opened once per caller scope and released by RAII on
//! every exit path; SQLite itself arbitrates write serialization and
//! surfaces a busy condition under contention.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Configure a connection with the settings the repositories assume
pub fn configure(conn: &Connection) -> Result<()> {
    // Enforce the expenses -> conceptos foreign key
    conn.pragma_update(None, "foreign_keys", &"ON")
        .map_err(from_rusqlite)?;

    // WAL keeps concurrent readers off the single writer
    conn.pragma_update(None, "journal_mode", &"WAL")
        .map_err(from_rusqlite)?;

    Ok(())
}
