use serde::{Deserialize, Serialize};

/// Concepto - an expense category with a running monetary subtotal
///
/// `subtotal` is a plain monetary figure; no currency is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concepto {
    pub id: i64,
    pub nombre: String,
    pub subtotal: f64,
}

/// Validated payload for concepto creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptoDraft {
    pub nombre: String,
    pub subtotal: f64,
}

/// Validated partial update for a concepto
///
/// subtotal is a NOT NULL column, but an explicit null is still forwarded
/// (Some(None)) and surfaces as a store constraint error, keeping the
/// present-vs-null contract uniform across numeric fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConceptoPatch {
    pub nombre: Option<String>,
    pub subtotal: Option<Option<f64>>,
}
