//! Core domain logic for the food catalog.
//! This crate is the single source of truth for schema, ordering and
//! mutation invariants.

pub mod logging;
pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::food::{FoodRecord, FoodTable, REQUIRED_COLUMNS};
pub use query::catalog::{list_foods, search_foods, QueryResult, QueryStats};
pub use service::food_service::{FoodService, MutationError, MutationResult, UpdateRequest};
pub use store::schema::{reconcile_columns, reconcile_table, Reconciliation};
pub use store::{CsvFoodStore, FoodStore, MemoryFoodStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
