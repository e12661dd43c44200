#![allow(dead_code)]

use rusqlite::Connection;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use type_s_db::schema::ALL_TABLES;

/// The fixture tree shipped with the crate
pub fn shipped_data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// A throwaway fixture tree
pub struct FixtureTree {
    dir: TempDir,
}

impl FixtureTree {
    /// Every table directory exists but holds no files
    pub fn empty() -> Self {
        let tree = Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        };
        for table in ALL_TABLES {
            fs::create_dir_all(tree.path().join(table.fixture_dir)).unwrap();
        }
        tree
    }

    /// One valid row per table; the model leaves dome and slider unset
    pub fn minimal() -> Self {
        let tree = Self::empty();

        tree.write("manufacturers", "pfu.json", json!({"id": 1, "name": "PFU Limited"}));
        tree.write("pcbs", "pcbs.json", json!([part(json!({"supports_bluetooth": false, "layout": "HHKB"}))]));
        tree.write("controllers", "controllers.json", json!([part(json!({"supports_bluetooth": false}))]));
        tree.write("plates", "plates.json", json!([part(json!({"material": "Steel", "integrated": true}))]));
        tree.write(
            "domes",
            "domes.json",
            json!([part(json!({"weight": "45g", "type": "Sheet", "material": "Rubber"}))]),
        );
        tree.write("sliders", "sliders.json", json!([part(json!({"type": "Standard", "silenced": false}))]));
        tree.write("cases", "cases.json", json!([part(json!({"color": "White", "material": "ABS"}))]));
        for dir in ["springs", "rings", "housings", "sb-stabs", "wires"] {
            tree.write(dir, "rows.json", json!([part(json!({}))]));
        }

        tree.write("models", "professional-2.json", json!([model(1, "PD-KB400W")]));

        tree.write(
            "compatibility/pcb-controller",
            "links.json",
            json!([{"id": 1, "pcb_id": 1, "controller_id": 1, "notes": "Stock compatibility"}]),
        );
        tree.write("compatibility/pcb-case", "links.json", json!([{"id": 1, "pcb_id": 1, "case_id": 1}]));
        tree.write("compatibility/pcb-plate", "links.json", json!([{"id": 1, "pcb_id": 1, "plate_id": 1}]));

        tree
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, fixture_dir: &str, file: &str, rows: Value) {
        let dir = self.path().join(fixture_dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), serde_json::to_string_pretty(&rows).unwrap()).unwrap();
    }

    pub fn remove_dir(&self, fixture_dir: &str) {
        fs::remove_dir_all(self.path().join(fixture_dir)).unwrap();
    }
}

/// Shared part columns with id 1, merged with table-specific fields
pub fn part(extra: Value) -> Value {
    let mut row = json!({"id": 1, "name": "Stock part", "manufacturer_id": 1});
    if let (Some(row), Some(extra)) = (row.as_object_mut(), extra.as_object()) {
        row.extend(extra.clone());
    }
    row
}

pub fn model(id: i64, model_number: &str) -> Value {
    json!({
        "id": id,
        "model_number": model_number,
        "model_name": "HHKB Professional 2",
        "layout": "HHKB",
        "case_color": "White",
        "keycap_color": "White",
        "legends": "Printed",
        "release_date": "2006-03-01",
        "generation": "Professional 2",
        "type_s": false,
        "pcb_id": 1,
        "controller_id": 1
    })
}

pub fn table_exists(conn: &Connection, table: &str) -> bool {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
        [table],
        |row| row.get(0),
    )
    .unwrap()
}
