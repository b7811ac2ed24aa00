//! Food catalog use-case service.
//!
//! # Responsibility
//! - Provide list/search/update/delete entry points over an injected store.
//! - Resolve the natural key to a single target row per mutation.
//!
//! # Invariants
//! - Every call starts with a full `load`; mutations end with a full `save`.
//! - Mutations affect only the first row whose `food_name` matches exactly.
//! - Only `delete` can soft-delete; `update` can only restore.
//! - Validation happens before the store is touched.

use crate::model::food::FoodRecord;
use crate::query::catalog::{list_foods, search_foods, QueryResult};
use crate::store::{FoodStore, StoreError, StoreResult};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MutationResult<T> = Result<T, MutationError>;

/// Failure of a single-record mutation.
#[derive(Debug)]
pub enum MutationError {
    /// Request carried no (or an empty) `food_name`.
    MissingFoodName,
    /// No row has the requested `food_name`.
    NotFound(String),
    Store(StoreError),
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFoodName => write!(f, "food_name is required"),
            Self::NotFound(name) => write!(f, "no food matches food_name `{name}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MutationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MissingFoodName => None,
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for MutationError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Request model for renaming and/or restoring one food.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub food_name: Option<String>,
    /// Overwrites `new_name` when set.
    pub new_name: Option<String>,
    /// Clears the soft-delete flag when `true`.
    pub restore: bool,
}

/// Use-case service for the food catalog.
pub struct FoodService<S: FoodStore> {
    store: S,
}

impl<S: FoodStore> FoodService<S> {
    /// Creates a service over the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every food, active rows first.
    pub fn list(&self) -> StoreResult<QueryResult> {
        let table = self.store.load()?;
        Ok(list_foods(&table))
    }

    /// Searches foods by case-insensitive substring of `food_name`.
    pub fn search(&self, query: &str) -> StoreResult<QueryResult> {
        let table = self.store.load()?;
        Ok(search_foods(&table, query))
    }

    /// Applies rename and/or restore to the first row named `food_name`.
    ///
    /// # Contract
    /// - A request with neither `new_name` nor `restore` still persists.
    /// - Returns the updated row.
    pub fn update(&self, request: &UpdateRequest) -> MutationResult<FoodRecord> {
        let food_name = required_food_name(request.food_name.as_deref())?;
        let updated = self.mutate_first(food_name, |record| {
            if let Some(new_name) = &request.new_name {
                record.new_name = Some(new_name.clone());
            }
            if request.restore {
                record.restore();
            }
        })?;

        info!(
            "event=food_update module=service status=ok renamed={} restore={}",
            request.new_name.is_some(),
            request.restore
        );
        Ok(updated)
    }

    /// Soft-deletes the first row named `food_name` and returns it.
    pub fn delete(&self, food_name: Option<&str>) -> MutationResult<FoodRecord> {
        let food_name = required_food_name(food_name)?;
        let deleted = self.mutate_first(food_name, FoodRecord::soft_delete)?;

        info!("event=food_delete module=service status=ok");
        Ok(deleted)
    }

    /// Loads, mutates the first exact match, saves, in one sequence.
    fn mutate_first(
        &self,
        food_name: &str,
        mutate: impl FnOnce(&mut FoodRecord),
    ) -> MutationResult<FoodRecord> {
        let mut table = self.store.load()?;
        let index = table
            .position_of(food_name)
            .ok_or_else(|| MutationError::NotFound(food_name.to_string()))?;

        mutate(&mut table.records[index]);
        self.store.save(&table)?;
        Ok(table.records[index].clone())
    }
}

fn required_food_name(food_name: Option<&str>) -> MutationResult<&str> {
    match food_name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(MutationError::MissingFoodName),
    }
}
