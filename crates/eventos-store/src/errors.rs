//! Error handling for eventos-store
//!
//! Wraps eventos-core EvError with store-specific helpers, including the
//! rusqlite error-code classification the boundary relies on.

use eventos_core::errors::{EvError, EvErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using EvError
pub type Result<T> = std::result::Result<T, EvError>;

/// Classify a rusqlite error into the store taxonomy
///
/// Constraint violations, lock contention and corruption get their own
/// kinds (the boundary answers 400/409, 503 and 500 respectively);
/// everything else is a generic persistence failure. The driver message is
/// preserved verbatim.
pub fn from_rusqlite(err: rusqlite::Error) -> EvError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _) => match e.code {
            ErrorCode::ConstraintViolation => EvErrorKind::Constraint,
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked => EvErrorKind::Busy,
            ErrorCode::DatabaseCorrupt | ErrorCode::NotADatabase => EvErrorKind::Corrupt,
            _ => EvErrorKind::Persistence,
        },
        _ => EvErrorKind::Persistence,
    };

    EvError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a not-found error for an id-based lookup miss
pub fn not_found(entity: &str, id: i64) -> EvError {
    EvError::new(EvErrorKind::NotFound)
        .with_entity(entity)
        .with_id(id)
        .with_message(format!("No {} found with ID {}", entity, id))
}

/// Create an invalid-update error (empty recognized field set)
pub fn invalid_update(table: &str) -> EvError {
    EvError::new(EvErrorKind::InvalidUpdate)
        .with_op("update")
        .with_entity(table)
        .with_message("No valid fields to update")
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> EvError {
    EvError::new(EvErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> EvError {
    EvError::new(EvErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_constraint_violation_classified() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, v TEXT NOT NULL)")
            .unwrap();

        let err = conn
            .execute("INSERT INTO t (v) VALUES (NULL)", [])
            .unwrap_err();
        let mapped = from_rusqlite(err);

        assert_eq!(mapped.kind(), EvErrorKind::Constraint);
        assert_eq!(mapped.code(), "ERR_CONSTRAINT_VIOLATION");
    }

    #[test]
    fn test_plain_errors_fall_back_to_persistence() {
        let conn = Connection::open_in_memory().unwrap();
        let err = conn.execute("SELECT * FROM missing_table", []).unwrap_err();
        let mapped = from_rusqlite(err);

        assert_eq!(mapped.kind(), EvErrorKind::Persistence);
    }

    #[test]
    fn test_not_found_carries_context() {
        let err = not_found("guest", 42);
        assert_eq!(err.kind(), EvErrorKind::NotFound);
        assert_eq!(err.entity(), Some("guest"));
        assert_eq!(err.id(), Some(42));
    }
}
