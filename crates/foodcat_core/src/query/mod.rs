//! Listing and keyword search over the food table.
//!
//! # Responsibility
//! - Shape result sets and aggregate stats for read entry points.
//! - Apply the active-before-deleted ordering policy.
//!
//! # Invariants
//! - Ordering is a stable partition: active rows first, original order kept.
//! - Stats always describe the full table, never only the matched rows.

pub mod catalog;
