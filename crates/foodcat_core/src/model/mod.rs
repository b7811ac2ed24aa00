//! Domain model for the food catalog.
//!
//! # Responsibility
//! - Define the structured record shape shared by store, query and mutation code.
//! - Keep the table (ordered records plus column layout) as one owned value.
//!
//! # Invariants
//! - Records are identified by `food_name`, which is not unique.
//! - Deletion is a soft-delete flag; rows are never physically removed.

pub mod food;
