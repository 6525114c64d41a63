//! Database initialization command

use std::path::Path;

use eventos_core::errors::Result;
use eventos_store::errors::io_error;

/// Create the database file, apply migrations and seed default rows
pub fn execute(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_data_dir", e))?;
        }
    }

    let mut conn = eventos_store::db::open(db_path)?;
    eventos_store::db::configure(&conn)?;
    eventos_store::migrations::apply_migrations(&mut conn)?;

    println!("Database initialized at {}", db_path.display());
    Ok(())
}
