use serde::{Deserialize, Serialize};

/// Grupo - a cost grouping
///
/// The schema carried a foreign-key reference into grupos from an older
/// version of conceptos; current writes never populate it, so a Grupo has
/// no enforced relationships.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grupo {
    pub id: i64,
    pub nombre: String,
}

/// Validated payload for grupo creation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrupoDraft {
    pub nombre: String,
}

/// Validated partial update for a grupo (nombre is NOT NULL, so an explicit
/// null is rejected by the validator)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrupoPatch {
    pub nombre: Option<String>,
}
