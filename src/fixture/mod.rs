pub mod loader;
pub mod record;

pub use loader::{fixture_files, load_table, load_tables, FixtureSet};
pub use record::{parse_record, parse_timestamp, ParsedRow, SqlValue};
