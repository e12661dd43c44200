use std::collections::HashSet;
use std::fmt;

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
    /// Stored as INTEGER 0/1
    Boolean,
    /// Date-like fixture strings, stored as INTEGER Unix seconds (UTC)
    Timestamp,
}

impl ColumnType {
    pub fn sql_type(self) -> &'static str {
        match self {
            ColumnType::Integer | ColumnType::Boolean | ColumnType::Timestamp => "INTEGER",
            ColumnType::Text => "TEXT",
        }
    }
}

/// Column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub col_type: ColumnType,
    pub nullable: bool,
    pub unique: bool,
}

impl Column {
    /// Create an optional (nullable) column
    pub const fn new(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: true,
            unique: false,
        }
    }

    /// Create a required (non-nullable) column
    pub const fn required(name: &'static str, col_type: ColumnType) -> Self {
        Self {
            name,
            col_type,
            nullable: false,
            unique: false,
        }
    }

    /// Add a UNIQUE constraint
    pub const fn unique(self) -> Self {
        Self {
            unique: true,
            ..self
        }
    }

    pub fn is_primary_key(&self) -> bool {
        self.name == "id"
    }
}

/// Foreign key reference
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

impl ForeignKey {
    pub const fn new(column: &'static str, references_table: &'static str) -> Self {
        Self {
            column,
            references_table,
            references_column: "id",
        }
    }
}

/// Load stage. Tables are seeded stage by stage, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Manufacturers,
    Parts,
    Models,
    Compatibility,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Manufacturers => write!(f, "manufacturers"),
            Stage::Parts => write!(f, "parts"),
            Stage::Models => write!(f, "models"),
            Stage::Compatibility => write!(f, "compatibility"),
        }
    }
}

/// Table schema definition
///
/// Columns are composed from a shared group (e.g. [`PART_COLUMNS`]) followed
/// by the table's own columns.
///
/// [`PART_COLUMNS`]: super::tables::PART_COLUMNS
#[derive(Debug, Clone)]
pub struct TableSchema {
    pub name: &'static str,
    /// Subdirectory of the data directory holding this table's fixtures
    pub fixture_dir: &'static str,
    pub stage: Stage,
    pub shared_columns: &'static [Column],
    pub columns: &'static [Column],
    pub foreign_keys: &'static [ForeignKey],
}

impl TableSchema {
    /// All columns in declaration order, shared group first
    pub fn all_columns(&self) -> impl Iterator<Item = &'static Column> {
        self.shared_columns.iter().chain(self.columns.iter())
    }

    pub fn column(&self, name: &str) -> Option<&'static Column> {
        self.all_columns().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.all_columns().map(|c| c.name).collect()
    }

    /// Get all tables this table depends on (FK parents)
    pub fn dependencies(&self) -> HashSet<&'static str> {
        self.foreign_keys
            .iter()
            .map(|fk| fk.references_table)
            .collect()
    }
}
