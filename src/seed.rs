//! Fixture-to-store seeding.
//!
//! A run loads and validates every requested fixture first, then upserts the
//! rows table by table inside a single transaction. Tables are written in the
//! order given; [`ALL_TABLES`] is the documented dependency order.

use std::path::Path;

use crate::error::Result;
use crate::fixture::load_tables;
use crate::schema::{TableSchema, ALL_TABLES};
use crate::store::{upsert_rows, SqliteStore};
use crate::ui::{Phase, Ui};

/// Rows written per table, in write order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedReport {
    pub tables: Vec<(&'static str, u64)>,
}

impl SeedReport {
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|(_, count)| count).sum()
    }

    pub fn rows_for(&self, table: &str) -> Option<u64> {
        self.tables
            .iter()
            .find(|(name, _)| *name == table)
            .map(|(_, count)| *count)
    }
}

/// Seed every table in dependency order
pub fn seed_all<U: Ui>(store: &mut SqliteStore, data_dir: &Path, ui: &mut U) -> Result<SeedReport> {
    seed(store, data_dir, ALL_TABLES, ui)
}

/// Seed the given tables in the given order.
///
/// Fails without writing if any fixture is missing or malformed. A write
/// failure rolls the whole run back.
pub fn seed<U: Ui>(
    store: &mut SqliteStore,
    data_dir: &Path,
    tables: &[&'static TableSchema],
    ui: &mut U,
) -> Result<SeedReport> {
    ui.set_phase(Phase::Loading);
    let fixtures = load_tables(data_dir, tables)?;

    // Referenced parents must exist even when only a subset is seeded
    store.create_tables(ALL_TABLES)?;

    let tx = store.transaction()?;
    let mut report = SeedReport::default();
    let mut current_stage = None;

    for set in &fixtures {
        if current_stage != Some(set.table.stage) {
            current_stage = Some(set.table.stage);
            ui.set_phase(Phase::Seeding(set.table.stage));
        }

        if set.files == 0 {
            ui.log(format!("{}: no fixture files", set.table.name));
        }

        ui.start_table(set.table.name, set.rows.len() as u64);
        let count = upsert_rows(&tx, set.table, &set.rows, |n| ui.set_progress(n))?;
        ui.finish_table(set.table.name, count);

        tracing::debug!(table = set.table.name, files = set.files, rows = count, "table seeded");
        report.tables.push((set.table.name, count));
    }

    tx.commit()?;
    ui.set_phase(Phase::Complete);
    tracing::info!(rows = report.total_rows(), "Database seeded successfully");

    Ok(report)
}
