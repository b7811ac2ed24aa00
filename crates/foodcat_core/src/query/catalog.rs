//! Catalog listing and substring search.
//!
//! # Responsibility
//! - Provide pure query functions over a loaded `FoodTable`.
//! - Attach `total/active/deleted` stats, plus `results` for keyword hits.
//!
//! # Invariants
//! - Blank queries (after trim + lowercase) behave exactly like listing.
//! - Matching is case-insensitive substring on `food_name`; rows without a
//!   `food_name` never match.

use crate::model::food::{FoodRecord, FoodTable};
use serde::Serialize;

/// Aggregate counts attached to every query response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QueryStats {
    /// Matched row count. Present only for non-blank keyword searches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    pub total: usize,
    pub active: usize,
    pub deleted: usize,
}

impl QueryStats {
    fn for_table(table: &FoodTable) -> Self {
        let active = table.records.iter().filter(|r| r.is_active()).count();
        Self {
            results: None,
            total: table.len(),
            active,
            deleted: table.len() - active,
        }
    }
}

/// Ordered result set plus stats.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub data: Vec<FoodRecord>,
    pub stats: QueryStats,
}

/// Returns every row, active rows first.
pub fn list_foods(table: &FoodTable) -> QueryResult {
    QueryResult {
        data: active_first(table.records.iter()),
        stats: QueryStats::for_table(table),
    }
}

/// Returns rows whose `food_name` contains `query`, ignoring case.
///
/// A blank query is the same as [`list_foods`].
pub fn search_foods(table: &FoodTable, query: &str) -> QueryResult {
    let needle = normalize_query(query);
    if needle.is_empty() {
        return list_foods(table);
    }

    let data = active_first(
        table
            .records
            .iter()
            .filter(|record| name_contains(record, &needle)),
    );
    let stats = QueryStats {
        results: Some(data.len()),
        ..QueryStats::for_table(table)
    };

    QueryResult { data, stats }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

fn name_contains(record: &FoodRecord, needle: &str) -> bool {
    record
        .food_name
        .as_deref()
        .is_some_and(|name| name.to_lowercase().contains(needle))
}

fn active_first<'a>(records: impl Iterator<Item = &'a FoodRecord>) -> Vec<FoodRecord> {
    let mut rows: Vec<FoodRecord> = records.cloned().collect();
    // `sort_by_key` is stable, so each partition keeps table order.
    rows.sort_by_key(|record| record.deleted);
    rows
}
