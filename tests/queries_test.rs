mod common;

use chrono::NaiveDate;

use common::shipped_data_dir;
use type_s_db::models::{Compatibility, Manufacturer, Part};
use type_s_db::schema::{MANUFACTURERS, PCB_CONTROLLER_COMPATIBILITY, SLIDERS};
use type_s_db::store::{find_model_by_number, select_as};
use type_s_db::{seed_all, SilentUi, SqliteStore};

fn seeded() -> SqliteStore {
    let mut store = SqliteStore::open_in_memory().unwrap();
    seed_all(&mut store, &shipped_data_dir(), &mut SilentUi::new()).unwrap();
    store
}

#[test]
fn test_find_model_by_number() {
    let store = seeded();

    let model = find_model_by_number(store.connection(), "PD-KB400WS")
        .unwrap()
        .expect("Type-S model missing");
    assert!(model.type_s);
    assert_eq!(model.generation, "Professional 2");
    assert_eq!(model.slider_id, Some(2));
    assert_eq!(model.release_date(), NaiveDate::from_ymd_opt(2011, 11, 1));

    assert!(find_model_by_number(store.connection(), "PD-KB999").unwrap().is_none());
}

#[test]
fn test_typed_manufacturers() {
    let store = seeded();
    let manufacturers: Vec<Manufacturer> = select_as(store.connection(), &MANUFACTURERS).unwrap();

    assert_eq!(manufacturers.len(), 3);
    assert_eq!(manufacturers[0].name, "PFU Limited");
    assert_eq!(manufacturers[0].country.as_deref(), Some("Japan"));
    assert_eq!(manufacturers[2].country, None);
}

#[test]
fn test_part_details_carry_type_specific_columns() {
    let store = seeded();
    let sliders: Vec<Part> = select_as(store.connection(), &SLIDERS).unwrap();

    let type_s = sliders.iter().find(|s| s.id == 2).unwrap();
    assert_eq!(type_s.details["silenced"], serde_json::json!(true));
    assert_eq!(type_s.details["type"], serde_json::json!("Type-S"));
}

#[test]
fn test_bluetooth_upgrade_link() {
    let store = seeded();
    let links: Vec<Compatibility> =
        select_as(store.connection(), &PCB_CONTROLLER_COMPATIBILITY).unwrap();

    let upgrade = links.iter().find(|l| l.id == 3).unwrap();
    assert_eq!(upgrade.pcb_id, 2);
    assert_eq!(upgrade.counterpart(), Some(("controller_id", 3)));
    assert_eq!(upgrade.notes.as_deref(), Some("Aftermarket upgrade option for Bluetooth"));
}
