// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity record normalization.
//!
//! Garmin returns activity details as a top-level bag of fields with the
//! interesting metrics tucked into nested DTOs. This module:
//! 1. Flattens a raw record into a single-level map
//! 2. Projects flat records through a field list (the only filter used
//!    anywhere in the relay)

use crate::models::activity::FlatActivity;
use serde_json::{Map, Value};

/// Sub-records that carry nothing the relay exposes.
const DISCARDED_RECORDS: [&str; 3] = ["eventTypeDTO", "timeZoneUnitDTO", "accessControlRuleDTO"];

/// Metadata fields copied onto the flat record, as (source, destination).
const METADATA_FIELDS: [(&str, &str); 8] = [
    ("lapCount", "lapCount"),
    ("hasSplits", "hasSplits"),
    ("personalRecord", "pr"),
    ("manualActivity", "manualActivity"),
    ("manufacturer", "manufacturer"),
    ("favorite", "favorite"),
    ("autoCalcCalories", "autoCalcCalories"),
    ("elevationCorrected", "elevationCorrected"),
];

/// Flatten a raw Garmin activity record.
///
/// Non-object input (including `null`) is returned unchanged.
pub fn flatten_activity(raw: Value) -> Value {
    match raw {
        Value::Object(record) => Value::Object(flatten_record(record)),
        other => other,
    }
}

/// Flatten an activity record that is already known to be an object.
pub fn flatten_record(mut record: Map<String, Value>) -> FlatActivity {
    let summary = record.shift_remove("summaryDTO");
    let metadata = record.shift_remove("metadataDTO");
    let activity_type = record.shift_remove("activityTypeDTO");
    for key in DISCARDED_RECORDS {
        record.shift_remove(key);
    }

    let mut flat = record;

    // Summary metrics are fetched separately upstream and win on conflict.
    if let Some(Value::Object(summary)) = summary {
        for (key, value) in summary {
            flat.insert(key, value);
        }
    }

    if !flat.contains_key("activityType") {
        if let Some(activity_type) = activity_type {
            flat.insert("activityType".to_string(), activity_type);
        }
    }

    if let Some(Value::Object(metadata)) = metadata {
        for (source, destination) in METADATA_FIELDS {
            if let Some(value) = metadata.get(source) {
                flat.insert(destination.to_string(), value.clone());
            }
        }
    }

    flat
}

/// Keep only the fields named in `fields`, in list order.
///
/// Values are copied as-is. Names that are missing from `record` are
/// skipped rather than emitted as null.
pub fn pick_fields(record: &Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    let mut picked = Map::new();
    for field in fields {
        if let Some(value) = record.get(*field) {
            picked.insert((*field).to_string(), value.clone());
        }
    }
    picked
}

/// Project a value through a field list; non-objects project to `{}`.
pub fn pick_value_fields(value: &Value, fields: &[&str]) -> Map<String, Value> {
    match value {
        Value::Object(record) => pick_fields(record, fields),
        _ => Map::new(),
    }
}
