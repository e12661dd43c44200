//! Error types for fixture loading, seeding, and SQL generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a seed or generate run.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Fixture directory for a table does not exist.
    #[error("fixture directory not found: {0}")]
    MissingFixtureDir(PathBuf),

    /// Fixture file or directory could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture file is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Fixture parsed, but a row does not fit the table schema.
    #[error("invalid fixture {path} (row {index}): {message}")]
    InvalidRow {
        path: PathBuf,
        index: usize,
        message: String,
    },

    /// Foreign-key or unique constraint rejected a row.
    #[error("constraint violation in {table} (id {id}): {source}")]
    Constraint {
        table: &'static str,
        id: i64,
        #[source]
        source: rusqlite::Error,
    },

    /// Stored row does not match its record type.
    #[error("cannot decode {table} row: {source}")]
    Decode {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Store could not be opened or configured.
    #[error("store unavailable: {0}")]
    Binding(String),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

impl SeedError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SeedError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for foreign-key and unique violations.
    pub fn is_constraint(&self) -> bool {
        matches!(self, SeedError::Constraint { .. })
    }
}

/// Convenience alias for results with [`SeedError`].
pub type Result<T> = std::result::Result<T, SeedError>;
