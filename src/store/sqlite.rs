use rusqlite::{Connection, ErrorCode, Transaction};
use std::path::Path;

use super::schema_gen::{generate_create_table, generate_indexes};
use crate::error::{Result, SeedError};
use crate::fixture::ParsedRow;
use crate::schema::TableSchema;

/// Handle to the relational store
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file. Existing rows are kept.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SeedError::Binding(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let unavailable =
            |e: rusqlite::Error| SeedError::Binding(format!("cannot open {}: {}", db_path.display(), e));

        // Opening is lazy; the first PRAGMA reads the header
        let conn = Connection::open(db_path).map_err(unavailable)?;
        conn.execute_batch("PRAGMA journal_mode = WAL;")
            .map_err(unavailable)?;

        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| SeedError::Binding(format!("cannot open in-memory database: {}", e)))?;
        Self::from_connection(conn)
    }

    /// Wrap a connection supplied by the host. Enables foreign key enforcement.
    pub fn from_connection(conn: Connection) -> Result<Self> {
        let unconfigured =
            |e: rusqlite::Error| SeedError::Binding(format!("cannot configure store: {}", e));

        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(unconfigured)?;
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .map_err(unconfigured)?;
        if enabled != 1 {
            return Err(SeedError::Binding(
                "foreign key enforcement could not be enabled".to_string(),
            ));
        }

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn into_connection(self) -> Connection {
        self.conn
    }

    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self.conn.transaction()?)
    }

    /// Create any missing tables and indexes for the given schemas
    pub fn create_tables(&self, schemas: &[&TableSchema]) -> Result<()> {
        tracing::debug!("Ensuring {} tables exist", schemas.len());

        for schema in schemas {
            self.conn.execute(&generate_create_table(schema), [])?;
            for index_sql in generate_indexes(schema) {
                self.conn.execute(&index_sql, [])?;
            }
        }

        Ok(())
    }
}

/// INSERT ... ON CONFLICT(id) DO UPDATE SET every non-key column
pub fn upsert_sql(schema: &TableSchema) -> String {
    let columns = schema.column_names();
    let placeholders: Vec<&str> = columns.iter().map(|_| "?").collect();
    let updates: Vec<String> = columns
        .iter()
        .filter(|c| **c != "id")
        .map(|c| format!("{c} = excluded.{c}"))
        .collect();

    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
        schema.name,
        columns.join(", "),
        placeholders.join(", "),
        updates.join(", ")
    )
}

/// Upsert rows one at a time, reporting the running count
pub fn upsert_rows(
    conn: &Connection,
    schema: &'static TableSchema,
    rows: &[ParsedRow],
    mut on_row: impl FnMut(u64),
) -> Result<u64> {
    let mut stmt = conn.prepare_cached(&upsert_sql(schema))?;
    let mut count: u64 = 0;

    for row in rows {
        for (idx, value) in row.values.iter().enumerate() {
            value.bind_to(idx + 1, &mut stmt)?;
        }
        stmt.raw_execute()
            .map_err(|e| classify(schema, row.id, e))?;

        count += 1;
        on_row(count);
    }

    Ok(count)
}

fn classify(schema: &'static TableSchema, id: i64, err: rusqlite::Error) -> SeedError {
    let constraint = matches!(
        &err,
        rusqlite::Error::SqliteFailure(failure, _) if failure.code == ErrorCode::ConstraintViolation
    );

    if constraint {
        SeedError::Constraint {
            table: schema.name,
            id,
            source: err,
        }
    } else {
        SeedError::Sqlite(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::MANUFACTURERS;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_sql() {
        let sql = upsert_sql(&MANUFACTURERS);
        assert_eq!(
            sql,
            "INSERT INTO manufacturers (id, name, url, country, established) VALUES (?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, url = excluded.url, \
             country = excluded.country, established = excluded.established"
        );
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let store = SqliteStore::open_in_memory().unwrap();
        let fk: i64 = store
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }

    #[test]
    fn test_create_tables_is_idempotent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create_tables(&[&MANUFACTURERS]).unwrap();
        store.create_tables(&[&MANUFACTURERS]).unwrap();
    }

    #[test]
    fn test_open_rejects_non_database_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("notes.sqlite");
        std::fs::write(&path, "this is a plain text file, not a SQLite database\n".repeat(20)).unwrap();

        let err = SqliteStore::open(&path).err().unwrap();
        assert_matches!(err, SeedError::Binding(_));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/dir/wiki.sqlite");

        SqliteStore::open(&path).unwrap();
        assert!(path.exists());
    }
}
