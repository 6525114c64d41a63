//! Migration framework
//!
//! Provides:
//! - Embedded SQL migrations
//! - Idempotent runner recording a SHA-256 checksum per applied migration

mod embedded;
mod runner;

pub use runner::apply_migrations;
