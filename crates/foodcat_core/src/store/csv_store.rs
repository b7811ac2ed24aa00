//! CSV file implementation of `FoodStore`.
//!
//! # Responsibility
//! - Read the whole backing file, reconcile its header, decode typed records.
//! - Rewrite the whole backing file on every save.
//!
//! # Invariants
//! - A missing file is recovered by creating an empty, complete table.
//! - Every load persists its reconciled table, so drift heals on first read.
//! - Column order and row order survive a load/save round trip.

use super::codec::{decode_record, encode_record};
use super::schema::reconcile_columns;
use super::{FoodStore, StoreError, StoreResult};
use crate::model::food::FoodTable;
use log::{error, info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Flat-file store whose header row doubles as the schema definition.
#[derive(Debug, Clone)]
pub struct CsvFoodStore {
    path: PathBuf,
}

impl CsvFoodStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self, file: File) -> StoreResult<FoodTable> {
        let mut reader = csv::Reader::from_reader(file);
        let header: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        ensure_unique_columns(&header)?;

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            records.push(decode_record(&header, row.iter())?);
        }

        let reconciliation = reconcile_columns(&header);
        if reconciliation.changed() {
            warn!(
                "event=schema_reconcile module=store status=ok added_columns={}",
                reconciliation.added.join(",")
            );
        }

        Ok(FoodTable {
            columns: reconciliation.columns,
            records,
        })
    }

    fn write_table(&self, table: &FoodTable) -> StoreResult<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(&table.columns)?;
        for record in &table.records {
            writer.write_record(encode_record(record, &table.columns))?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Cells are keyed by column name, so a repeated name would collapse two
/// columns into one on the next save.
fn ensure_unique_columns(header: &[String]) -> StoreResult<()> {
    let mut seen = HashSet::new();
    for column in header {
        if !seen.insert(column.as_str()) {
            return Err(StoreError::InvalidData(format!(
                "duplicate column `{column}` in header"
            )));
        }
    }
    Ok(())
}

impl FoodStore for CsvFoodStore {
    fn load(&self) -> StoreResult<FoodTable> {
        let started_at = Instant::now();

        let table = match File::open(&self.path) {
            Ok(file) => match self.read_table(file) {
                Ok(table) => table,
                Err(err) => {
                    error!(
                        "event=store_load module=store status=error duration_ms={} error={}",
                        started_at.elapsed().as_millis(),
                        err
                    );
                    return Err(err);
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("event=store_load module=store status=ok mode=create");
                FoodTable::empty()
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        self.save(&table)?;
        info!(
            "event=store_load module=store status=ok rows={} columns={} duration_ms={}",
            table.len(),
            table.columns.len(),
            started_at.elapsed().as_millis()
        );
        Ok(table)
    }

    fn save(&self, table: &FoodTable) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.write_table(table) {
            Ok(()) => {
                info!(
                    "event=store_save module=store status=ok rows={} duration_ms={}",
                    table.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}
