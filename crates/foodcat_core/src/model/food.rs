//! Food record and table model.
//!
//! # Responsibility
//! - Define the 14-field food record with explicit optionality.
//! - Provide soft-delete lifecycle helpers.
//! - Carry the ordered column layout of a loaded table.
//!
//! # Invariants
//! - `deleted` is the source of truth for tombstone state and defaults to `false`.
//! - A `FoodTable` built through the store always lists every required column.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Canonical column set, in the order new tables are written.
pub const REQUIRED_COLUMNS: [&str; 14] = [
    "group_name",
    "subgroup_name",
    "subsubgroup_name",
    "food_name",
    "kcal",
    "proteins",
    "carbs",
    "carbs_sugar",
    "fats",
    "fats_saturated",
    "fibers",
    "salt",
    "new_name",
    "deleted",
];

/// One food item of the catalog.
///
/// Category labels have no enforced parent/child integrity. Nutritional
/// values are optional so a blank cell survives a load/save cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub group_name: Option<String>,
    pub subgroup_name: Option<String>,
    pub subsubgroup_name: Option<String>,
    /// Natural lookup key. Not guaranteed unique.
    pub food_name: Option<String>,
    pub kcal: Option<f64>,
    pub proteins: Option<f64>,
    pub carbs: Option<f64>,
    pub carbs_sugar: Option<f64>,
    pub fats: Option<f64>,
    pub fats_saturated: Option<f64>,
    pub fibers: Option<f64>,
    pub salt: Option<f64>,
    /// User-settable override, independent of `food_name`.
    pub new_name: Option<String>,
    /// Soft delete tombstone.
    pub deleted: bool,
    /// Cells of columns outside the required set, keyed by column name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl FoodRecord {
    /// Creates an active record with only `food_name` set.
    pub fn named(food_name: impl Into<String>) -> Self {
        Self {
            food_name: Some(food_name.into()),
            ..Self::default()
        }
    }

    /// Marks this record as softly deleted.
    pub fn soft_delete(&mut self) {
        self.deleted = true;
    }

    /// Clears the soft delete flag.
    pub fn restore(&mut self) {
        self.deleted = false;
    }

    /// Returns whether this record is active (not soft-deleted).
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

/// Ordered records plus the column layout they are persisted with.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodTable {
    /// Column names in on-disk order. Contains every required column once
    /// reconciled, followed or interleaved with any extra columns.
    pub columns: Vec<String>,
    pub records: Vec<FoodRecord>,
}

impl FoodTable {
    /// Empty table with exactly the required columns.
    pub fn empty() -> Self {
        Self {
            columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records: Vec::new(),
        }
    }

    /// Builds a table with the required columns and the given records.
    pub fn with_records(records: Vec<FoodRecord>) -> Self {
        Self {
            records,
            ..Self::empty()
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the first record whose `food_name` equals `food_name` exactly.
    pub fn position_of(&self, food_name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.food_name.as_deref() == Some(food_name))
    }
}

impl Default for FoodTable {
    fn default() -> Self {
        Self::empty()
    }
}
