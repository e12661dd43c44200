//! Offline seed path: render fixtures as a plain INSERT batch.
//!
//! The batch has no conflict handling and is meant for an empty store with the
//! schema already in place.

use std::fs;
use std::path::Path;

use crate::error::{Result, SeedError};
use crate::fixture::{load_tables, SqlValue};
use crate::schema::TableSchema;

/// File name of the batch inside the data directory
pub const DEFAULT_SQL_FILE: &str = "seed.sql";

/// Render one INSERT statement
pub fn render_insert(table: &str, columns: &[&str], values: &[SqlValue]) -> String {
    let values: Vec<String> = values.iter().map(SqlValue::to_literal).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        table,
        columns.join(", "),
        values.join(", ")
    )
}

/// Render the INSERT batch for the given tables, in the given order
pub fn generate_seed_sql(data_dir: &Path, tables: &[&'static TableSchema]) -> Result<String> {
    let fixtures = load_tables(data_dir, tables)?;

    let mut lines = vec![
        "-- Seed data generated from JSON fixtures".to_string(),
        "-- Order matters due to foreign key constraints".to_string(),
    ];

    for set in &fixtures {
        tracing::info!(table = set.table.name, rows = set.rows.len(), "Rendering inserts");

        let columns = set.table.column_names();
        lines.push(String::new());
        lines.push(format!("-- {}", set.table.name));
        for row in &set.rows {
            lines.push(render_insert(set.table.name, &columns, &row.values));
        }
    }

    lines.push(String::new());
    Ok(lines.join("\n"))
}

/// Generate the batch and write it to `output`. Returns the statement count.
pub fn write_seed_sql(data_dir: &Path, tables: &[&'static TableSchema], output: &Path) -> Result<usize> {
    let sql = generate_seed_sql(data_dir, tables)?;
    let statements = sql.lines().filter(|l| l.starts_with("INSERT")).count();

    fs::write(output, sql).map_err(|e| SeedError::io(output, e))?;
    tracing::info!(path = %output.display(), statements, "Generated seed SQL");

    Ok(statements)
}
