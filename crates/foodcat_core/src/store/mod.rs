//! Persistence boundary for the food table.
//!
//! # Responsibility
//! - Define the load/save contract every backing medium implements.
//! - Reconcile drifted column layouts on every load.
//! - Keep physical encoding details (CSV) out of query and mutation code.
//!
//! # Invariants
//! - `load` never returns a table missing a required column.
//! - `save` rewrites the whole table; there are no partial writes.
//! - A missing backing file is not an error; any other read failure is.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod codec;
pub mod csv_store;
pub mod memory;
pub mod schema;

pub use csv_store::CsvFoodStore;
pub use memory::MemoryFoodStore;

use crate::model::food::FoodTable;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reading or writing the backing medium.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A cell could not be decoded into its typed field.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "store i/o failed: {err}"),
            Self::Csv(err) => write!(f, "store encoding is corrupt: {err}"),
            Self::InvalidData(message) => write!(f, "invalid stored food data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for StoreError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

/// Whole-table persistence contract.
pub trait FoodStore {
    /// Returns the current table with every required column present.
    fn load(&self) -> StoreResult<FoodTable>;
    /// Overwrites the stored table with `table`.
    fn save(&self, table: &FoodTable) -> StoreResult<()>;
}

impl<S: FoodStore + ?Sized> FoodStore for &S {
    fn load(&self) -> StoreResult<FoodTable> {
        (**self).load()
    }

    fn save(&self, table: &FoodTable) -> StoreResult<()> {
        (**self).save(table)
    }
}
