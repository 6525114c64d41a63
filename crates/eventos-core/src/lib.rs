//! Eventos Core - domain models and validation for event management
//!
//! This crate provides the foundational types and operations shared by the
//! eventos persistence and boundary layers:
//! - Guest, Grupo, Concepto and Expense domain models with draft/patch types
//! - Field-bag validation with fused normalization (trim, enum lower-casing)
//! - Canonical error facility with stable error codes
//! - Logging facility (tracing-based)

pub mod errors;
pub mod logging;
pub mod model;
pub mod validate;

// Re-export commonly used types
pub use errors::{EvError, EvErrorKind, Result};
pub use model::{Concepto, Expense, Grupo, Guest, Page};
