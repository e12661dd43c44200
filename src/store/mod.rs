pub mod queries;
pub mod schema_gen;
pub mod sqlite;

pub use queries::{count_rows, find_model_by_number, select_all, select_as};
pub use schema_gen::{generate_create_table, generate_indexes, generate_schema_sql};
pub use sqlite::{upsert_rows, upsert_sql, SqliteStore};
