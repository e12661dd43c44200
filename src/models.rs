//! Typed records for reading seeded rows.
//!
//! Dates are stored as Unix seconds; use the `*_date()` helpers for calendar
//! values.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn to_date(timestamp: Option<i64>) -> Option<NaiveDate> {
    timestamp
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.date_naive())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub url: Option<String>,
    pub country: Option<String>,
    pub established: Option<String>,
}

/// A row from any part table. Type-specific columns land in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    pub name: String,
    pub manufacturer_id: i64,
    pub url: Option<String>,
    pub release_date: Option<i64>,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Part {
    pub fn release_date(&self) -> Option<NaiveDate> {
        to_date(self.release_date)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HhkbModel {
    pub id: i64,
    pub model_number: String,
    pub model_name: String,
    pub layout: String,
    pub case_color: String,
    pub keycap_color: String,
    pub legends: String,
    pub release_date: Option<i64>,
    pub generation: String,
    pub type_s: bool,
    pub notes: Option<String>,
    pub manufacturer_id: Option<i64>,
    pub pcb_id: i64,
    pub controller_id: i64,
    pub dome_id: Option<i64>,
    pub slider_id: Option<i64>,
}

impl HhkbModel {
    pub fn release_date(&self) -> Option<NaiveDate> {
        to_date(self.release_date)
    }
}

/// A row from any compatibility table. The second part reference
/// (`controller_id`, `case_id`, or `plate_id`) lands in `other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compatibility {
    pub id: i64,
    pub pcb_id: i64,
    pub notes: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Compatibility {
    /// The non-PCB side of the link as `(column, id)`
    pub fn counterpart(&self) -> Option<(&str, i64)> {
        self.other
            .iter()
            .find_map(|(k, v)| v.as_i64().map(|id| (k.as_str(), id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_keeps_details() {
        let part: Part = serde_json::from_value(json!({
            "id": 1, "name": "Pro 2 PCB", "manufacturer_id": 1, "url": null,
            "release_date": 86400, "notes": null, "supports_bluetooth": false, "layout": "HHKB"
        }))
        .unwrap();

        assert_eq!(part.release_date(), NaiveDate::from_ymd_opt(1970, 1, 2));
        assert_eq!(part.details.get("layout"), Some(&json!("HHKB")));
        assert_eq!(part.details.len(), 2);
    }

    #[test]
    fn test_compatibility_counterpart() {
        let link: Compatibility = serde_json::from_value(json!({
            "id": 3, "pcb_id": 2, "controller_id": 3, "notes": "Bluetooth upgrade"
        }))
        .unwrap();
        assert_eq!(link.counterpart(), Some(("controller_id", 3)));
    }
}
