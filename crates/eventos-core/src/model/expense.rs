use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Expense - a single cost entry, optionally categorized by a Concepto
///
/// Reads resolve `concepto_nombre` through a LEFT JOIN; an absent or
/// dangling id_concept yields a null label rather than invalidating the
/// row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub descripcion: String,
    pub detalle: Option<String>,
    pub responsable: Option<String>,
    pub monto: f64,
    pub id_concept: Option<i64>,
    pub concepto_nombre: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Validated, normalized payload for expense creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub descripcion: String,
    pub detalle: Option<String>,
    pub responsable: Option<String>,
    pub monto: f64,
    pub id_concept: Option<i64>,
}

/// Validated partial update for an expense
///
/// Outer None = key absent; Some(None) = explicit null. descripcion is a
/// NOT NULL column, so the validator rejects explicit nulls for it; an
/// explicit null monto is forwarded and surfaces as a store constraint
/// error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub descripcion: Option<String>,
    pub detalle: Option<Option<String>>,
    pub responsable: Option<Option<String>>,
    pub monto: Option<Option<f64>>,
    pub id_concept: Option<Option<i64>>,
}

/// List/count filters for expenses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpenseFilter {
    pub id_concept: Option<i64>,
}
