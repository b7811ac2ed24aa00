//! Schema reconciliation for drifted column layouts.
//!
//! # Responsibility
//! - Bring any loaded column list up to the required column set.
//! - Report which columns were backfilled so callers can log and persist.
//!
//! # Invariants
//! - Reconciliation only appends; existing columns keep name and position.
//! - Backfilled columns are appended in canonical order.
//! - Applying reconciliation to its own output is a no-op.
//!
//! Cell defaults come from `FoodRecord::default()`: `deleted = false`,
//! every other field absent.

use crate::model::food::{FoodTable, REQUIRED_COLUMNS};

/// Outcome of reconciling one column list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Reconciled column list.
    pub columns: Vec<String>,
    /// Required columns that were missing and have been appended.
    pub added: Vec<&'static str>,
}

impl Reconciliation {
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Appends every missing required column to `existing`.
pub fn reconcile_columns(existing: &[String]) -> Reconciliation {
    let mut columns = existing.to_vec();
    let mut added = Vec::new();

    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|column| column == required) {
            columns.push(required.to_string());
            added.push(required);
        }
    }

    Reconciliation { columns, added }
}

/// Reconciles a table's column layout in place.
///
/// Records already carry structured defaults for every field, so only the
/// column list changes. Returns the backfilled column names.
pub fn reconcile_table(table: &mut FoodTable) -> Vec<&'static str> {
    let reconciliation = reconcile_columns(&table.columns);
    table.columns = reconciliation.columns;
    reconciliation.added
}
