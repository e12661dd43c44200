use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::record::{parse_record, ParsedRow};
use crate::error::{Result, SeedError};
use crate::schema::TableSchema;

/// Validated fixture rows for one table
#[derive(Debug)]
pub struct FixtureSet {
    pub table: &'static TableSchema,
    pub rows: Vec<ParsedRow>,
    pub files: usize,
}

/// List the `*.json` files in a directory, sorted by file name
pub fn fixture_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(SeedError::MissingFixtureDir(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SeedError::io(dir, e))? {
        let path = entry.map_err(|e| SeedError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

/// Load every fixture file for a table.
///
/// A file holds either one row object or an array of row objects.
pub fn load_table(data_dir: &Path, schema: &'static TableSchema) -> Result<FixtureSet> {
    let dir = data_dir.join(schema.fixture_dir);
    let files = fixture_files(&dir)?;

    let mut rows = Vec::new();
    let mut ids = HashSet::new();

    for path in &files {
        let content = fs::read_to_string(path).map_err(|e| SeedError::io(path, e))?;
        let json: Value = serde_json::from_str(&content).map_err(|source| SeedError::Json {
            path: path.clone(),
            source,
        })?;

        let items = match json {
            Value::Array(items) => items,
            object @ Value::Object(_) => vec![object],
            _ => {
                return Err(invalid(path, 0, "expected an object or an array of objects"));
            }
        };

        let before = rows.len();
        for (index, item) in items.iter().enumerate() {
            let object = item
                .as_object()
                .ok_or_else(|| invalid(path, index, "row is not an object"))?;
            let row = parse_record(object, schema).map_err(|message| invalid(path, index, message))?;

            if !ids.insert(row.id) {
                return Err(invalid(path, index, format!("duplicate id {}", row.id)));
            }
            rows.push(row);
        }

        tracing::debug!(
            table = schema.name,
            file = %path.display(),
            rows = rows.len() - before,
            "loaded fixture"
        );
    }

    Ok(FixtureSet {
        table: schema,
        rows,
        files: files.len(),
    })
}

/// Load fixtures for several tables, preserving their order
pub fn load_tables(data_dir: &Path, tables: &[&'static TableSchema]) -> Result<Vec<FixtureSet>> {
    tables
        .iter()
        .map(|schema| load_table(data_dir, *schema))
        .collect()
}

fn invalid(path: &Path, index: usize, message: impl Into<String>) -> SeedError {
    SeedError::InvalidRow {
        path: path.to_path_buf(),
        index,
        message: message.into(),
    }
}
