//! Read passthroughs used by the site build and the CLI.

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, SeedError};
use crate::models::HhkbModel;
use crate::schema::tables::HHKB_MODELS;
use crate::schema::{ColumnType, TableSchema};

pub fn count_rows(conn: &Connection, schema: &TableSchema) -> Result<u64> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", schema.name), [], |row| {
        row.get(0)
    })?;
    Ok(count as u64)
}

/// All rows of a table as JSON objects keyed by column name, in id order.
/// Boolean columns come back as JSON booleans.
pub fn select_all(conn: &Connection, schema: &TableSchema) -> Result<Vec<Map<String, Value>>> {
    let sql = format!(
        "SELECT {} FROM {} ORDER BY id",
        schema.column_names().join(", "),
        schema.name
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| row_to_object(row, schema))?;

    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// All rows of a table deserialized into a record type
pub fn select_as<T: DeserializeOwned>(conn: &Connection, schema: &'static TableSchema) -> Result<Vec<T>> {
    select_all(conn, schema)?
        .into_iter()
        .map(|object| decode(schema, object))
        .collect()
}

pub fn find_model_by_number(conn: &Connection, model_number: &str) -> Result<Option<HhkbModel>> {
    let sql = format!(
        "SELECT {} FROM {} WHERE model_number = ?1",
        HHKB_MODELS.column_names().join(", "),
        HHKB_MODELS.name
    );
    let object = conn
        .query_row(&sql, params![model_number], |row| row_to_object(row, &HHKB_MODELS))
        .optional()?;

    object.map(|o| decode(&HHKB_MODELS, o)).transpose()
}

fn row_to_object(row: &rusqlite::Row<'_>, schema: &TableSchema) -> rusqlite::Result<Map<String, Value>> {
    let mut object = Map::new();

    for (idx, col) in schema.all_columns().enumerate() {
        let value = match row.get_ref(idx)? {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) if col.col_type == ColumnType::Boolean => Value::Bool(i != 0),
            ValueRef::Integer(i) => Value::from(i),
            ValueRef::Real(f) => Value::from(f),
            ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
            ValueRef::Blob(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        };
        object.insert(col.name.to_string(), value);
    }

    Ok(object)
}

fn decode<T: DeserializeOwned>(schema: &'static TableSchema, object: Map<String, Value>) -> Result<T> {
    serde_json::from_value(Value::Object(object)).map_err(|source| SeedError::Decode {
        table: schema.name,
        source,
    })
}
