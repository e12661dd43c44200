//! Table schema definitions for the keyboard parts database

use super::types::*;

// =============================================================================
// Shared column groups
// =============================================================================

/// Columns shared by every part table
pub const PART_COLUMNS: &[Column] = &[
    Column::required("id", ColumnType::Integer),
    Column::required("name", ColumnType::Text),
    Column::required("manufacturer_id", ColumnType::Integer),
    Column::new("url", ColumnType::Text),
    Column::new("release_date", ColumnType::Timestamp),
    Column::new("notes", ColumnType::Text),
];

const PART_FOREIGN_KEYS: &[ForeignKey] = &[ForeignKey::new("manufacturer_id", "manufacturers")];

/// Columns shared by every board table
pub const BOARD_COLUMNS: &[Column] = &[
    Column::required("id", ColumnType::Integer),
    Column::required("layout", ColumnType::Text),
    Column::new("release_date", ColumnType::Timestamp),
    Column::new("manufacturer_id", ColumnType::Integer),
];

/// Columns shared by every compatibility table, before the two part references
const LINK_COLUMNS: &[Column] = &[
    Column::required("id", ColumnType::Integer),
    Column::required("pcb_id", ColumnType::Integer),
];

// =============================================================================
// Manufacturers
// =============================================================================

pub static MANUFACTURERS: TableSchema = TableSchema {
    name: "manufacturers",
    fixture_dir: "manufacturers",
    stage: Stage::Manufacturers,
    shared_columns: &[],
    columns: &[
        Column::required("id", ColumnType::Integer),
        Column::required("name", ColumnType::Text),
        Column::new("url", ColumnType::Text),
        Column::new("country", ColumnType::Text),
        Column::new("established", ColumnType::Text),
    ],
    foreign_keys: &[],
};

// =============================================================================
// Parts (depend on manufacturers)
// =============================================================================

pub static PCBS: TableSchema = TableSchema {
    name: "pcbs",
    fixture_dir: "pcbs",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[
        Column::required("supports_bluetooth", ColumnType::Boolean),
        Column::required("layout", ColumnType::Text),
        Column::new("connector_type", ColumnType::Text),
    ],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static CONTROLLERS: TableSchema = TableSchema {
    name: "controllers",
    fixture_dir: "controllers",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[
        Column::required("supports_bluetooth", ColumnType::Boolean),
        Column::new("firmware", ColumnType::Text),
    ],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static PLATES: TableSchema = TableSchema {
    name: "plates",
    fixture_dir: "plates",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[
        Column::required("material", ColumnType::Text),
        Column::required("integrated", ColumnType::Boolean),
    ],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static DOMES: TableSchema = TableSchema {
    name: "domes",
    fixture_dir: "domes",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[
        Column::required("weight", ColumnType::Text),
        Column::required("type", ColumnType::Text),
        Column::required("material", ColumnType::Text),
    ],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static SLIDERS: TableSchema = TableSchema {
    name: "sliders",
    fixture_dir: "sliders",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[
        Column::required("type", ColumnType::Text),
        Column::required("silenced", ColumnType::Boolean),
    ],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static SPRINGS: TableSchema = TableSchema {
    name: "springs",
    fixture_dir: "springs",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static RINGS: TableSchema = TableSchema {
    name: "rings",
    fixture_dir: "rings",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static HOUSINGS: TableSchema = TableSchema {
    name: "housings",
    fixture_dir: "housings",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static SB_STABS: TableSchema = TableSchema {
    name: "sb_stabs",
    fixture_dir: "sb-stabs",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static WIRES: TableSchema = TableSchema {
    name: "wires",
    fixture_dir: "wires",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[],
    foreign_keys: PART_FOREIGN_KEYS,
};

pub static CASES: TableSchema = TableSchema {
    name: "cases",
    fixture_dir: "cases",
    stage: Stage::Parts,
    shared_columns: PART_COLUMNS,
    columns: &[
        Column::required("color", ColumnType::Text),
        Column::required("material", ColumnType::Text),
    ],
    foreign_keys: PART_FOREIGN_KEYS,
};

// =============================================================================
// Boards (depend on parts)
// =============================================================================

pub static HHKB_MODELS: TableSchema = TableSchema {
    name: "hhkb_models",
    fixture_dir: "models",
    stage: Stage::Models,
    shared_columns: BOARD_COLUMNS,
    columns: &[
        Column::required("model_number", ColumnType::Text).unique(),
        Column::required("model_name", ColumnType::Text),
        Column::required("case_color", ColumnType::Text),
        Column::required("keycap_color", ColumnType::Text),
        Column::required("legends", ColumnType::Text),
        // e.g. "Classic", "Professional 2", "Hybrid", "Studio"
        Column::required("generation", ColumnType::Text),
        // Type-S (silenced) variant
        Column::required("type_s", ColumnType::Boolean),
        Column::new("notes", ColumnType::Text),
        Column::required("pcb_id", ColumnType::Integer),
        Column::required("controller_id", ColumnType::Integer),
        Column::new("dome_id", ColumnType::Integer),
        Column::new("slider_id", ColumnType::Integer),
    ],
    foreign_keys: &[
        ForeignKey::new("manufacturer_id", "manufacturers"),
        ForeignKey::new("pcb_id", "pcbs"),
        ForeignKey::new("controller_id", "controllers"),
        ForeignKey::new("dome_id", "domes"),
        ForeignKey::new("slider_id", "sliders"),
    ],
};

// =============================================================================
// Compatibility (depend on two part tables)
// =============================================================================

pub static PCB_CONTROLLER_COMPATIBILITY: TableSchema = TableSchema {
    name: "pcb_controller_compatibility",
    fixture_dir: "compatibility/pcb-controller",
    stage: Stage::Compatibility,
    shared_columns: LINK_COLUMNS,
    columns: &[
        Column::required("controller_id", ColumnType::Integer),
        Column::new("notes", ColumnType::Text),
    ],
    foreign_keys: &[
        ForeignKey::new("pcb_id", "pcbs"),
        ForeignKey::new("controller_id", "controllers"),
    ],
};

pub static PCB_CASE_COMPATIBILITY: TableSchema = TableSchema {
    name: "pcb_case_compatibility",
    fixture_dir: "compatibility/pcb-case",
    stage: Stage::Compatibility,
    shared_columns: LINK_COLUMNS,
    columns: &[
        Column::required("case_id", ColumnType::Integer),
        Column::new("notes", ColumnType::Text),
    ],
    foreign_keys: &[
        ForeignKey::new("pcb_id", "pcbs"),
        ForeignKey::new("case_id", "cases"),
    ],
};

pub static PCB_PLATE_COMPATIBILITY: TableSchema = TableSchema {
    name: "pcb_plate_compatibility",
    fixture_dir: "compatibility/pcb-plate",
    stage: Stage::Compatibility,
    shared_columns: LINK_COLUMNS,
    columns: &[
        Column::required("plate_id", ColumnType::Integer),
        Column::new("notes", ColumnType::Text),
    ],
    foreign_keys: &[
        ForeignKey::new("pcb_id", "pcbs"),
        ForeignKey::new("plate_id", "plates"),
    ],
};

/// All tables in load order
pub static ALL_TABLES: &[&TableSchema] = &[
    // Stage 1: no dependencies
    &MANUFACTURERS,
    // Stage 2: parts
    &PCBS,
    &CONTROLLERS,
    &PLATES,
    &DOMES,
    &SLIDERS,
    &SPRINGS,
    &RINGS,
    &HOUSINGS,
    &SB_STABS,
    &WIRES,
    &CASES,
    // Stage 3: boards
    &HHKB_MODELS,
    // Stage 4: compatibility links
    &PCB_CONTROLLER_COMPATIBILITY,
    &PCB_CASE_COMPATIBILITY,
    &PCB_PLATE_COMPATIBILITY,
];

/// Part tables, in load order
pub fn part_tables() -> impl Iterator<Item = &'static TableSchema> {
    ALL_TABLES
        .iter()
        .copied()
        .filter(|t| t.stage == Stage::Parts)
}

/// Get table schema by name
pub fn get_table(name: &str) -> Option<&'static TableSchema> {
    ALL_TABLES.iter().find(|t| t.name == name).copied()
}

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
