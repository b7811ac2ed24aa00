//! In-memory implementation of `FoodStore`.
//!
//! Holds one table behind interior mutability and counts saves, so callers
//! can observe that every mutation persists.

use super::schema::reconcile_table;
use super::{FoodStore, StoreResult};
use crate::model::food::FoodTable;
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct MemoryFoodStore {
    table: RefCell<FoodTable>,
    saves: Cell<usize>,
}

impl MemoryFoodStore {
    pub fn new(table: FoodTable) -> Self {
        Self {
            table: RefCell::new(table),
            saves: Cell::new(0),
        }
    }

    /// Number of completed `save` calls, including reconciliation saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Copy of the currently stored table, without reconciling it.
    pub fn snapshot(&self) -> FoodTable {
        self.table.borrow().clone()
    }
}

impl FoodStore for MemoryFoodStore {
    fn load(&self) -> StoreResult<FoodTable> {
        let mut table = self.snapshot();
        if !reconcile_table(&mut table).is_empty() {
            self.save(&table)?;
        }
        Ok(table)
    }

    fn save(&self, table: &FoodTable) -> StoreResult<()> {
        *self.table.borrow_mut() = table.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
