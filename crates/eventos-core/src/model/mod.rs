pub mod concepto;
pub mod expense;
pub mod grupo;
pub mod guest;

pub use concepto::{Concepto, ConceptoDraft, ConceptoPatch};
pub use expense::{Expense, ExpenseDraft, ExpenseFilter, ExpensePatch};
pub use grupo::{Grupo, GrupoDraft, GrupoPatch};
pub use guest::{Gender, Guest, GuestDraft, GuestFilter, GuestPatch};

/// Pagination window for list queries
///
/// Bounds (limit 1-100, offset >= 0) are enforced by the calling boundary;
/// repositories apply the window as-is. An offset without a limit is
/// ignored, matching the list query shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
