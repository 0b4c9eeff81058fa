// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Split-summary phase classification.

use serde_json::{Map, Value};

/// Phase name for a known Garmin `splitType` code.
fn known_phase(split_type: &str) -> Option<&'static str> {
    match split_type {
        "INTERVAL_WARMUP" => Some("warmup"),
        "INTERVAL_ACTIVE" => Some("active"),
        "INTERVAL_RECOVERY" => Some("recovery"),
        "INTERVAL_COOLDOWN" => Some("cooldown"),
        "RWD_RUN" => Some("run"),
        "RWD_WALK" => Some("walk"),
        "RWD_STAND" => Some("stand"),
        _ => None,
    }
}

/// Human-readable phase for a `splitType` value.
///
/// Unknown codes are lower-cased; a missing or non-string code is `unknown`.
pub fn phase_for(split_type: Option<&Value>) -> String {
    match split_type.and_then(Value::as_str) {
        Some(code) => known_phase(code)
            .map(str::to_string)
            .unwrap_or_else(|| code.to_lowercase()),
        None => "unknown".to_string(),
    }
}

/// Annotate each split summary with a leading `phase` field.
///
/// Order and all original fields are kept. `None` yields an empty list.
pub fn classify_splits(splits: Option<&[Value]>) -> Vec<Value> {
    splits
        .unwrap_or_default()
        .iter()
        .map(|split| {
            let mut annotated = Map::new();
            annotated.insert(
                "phase".to_string(),
                Value::String(phase_for(split.get("splitType"))),
            );
            if let Value::Object(fields) = split {
                for (key, value) in fields {
                    annotated.insert(key.clone(), value.clone());
                }
            }
            Value::Object(annotated)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phase_of(split: Value) -> Value {
        classify_splits(Some(&[split][..]))[0]["phase"].clone()
    }

    #[test]
    fn test_known_codes() {
        assert_eq!(phase_of(json!({"splitType": "INTERVAL_WARMUP"})), "warmup");
        assert_eq!(phase_of(json!({"splitType": "INTERVAL_ACTIVE"})), "active");
        assert_eq!(phase_of(json!({"splitType": "INTERVAL_RECOVERY"})), "recovery");
        assert_eq!(phase_of(json!({"splitType": "INTERVAL_COOLDOWN"})), "cooldown");
        assert_eq!(phase_of(json!({"splitType": "RWD_RUN"})), "run");
        assert_eq!(phase_of(json!({"splitType": "RWD_WALK"})), "walk");
        assert_eq!(phase_of(json!({"splitType": "RWD_STAND"})), "stand");
    }

    #[test]
    fn test_unknown_code_is_lowercased() {
        assert_eq!(phase_of(json!({"splitType": "FUTURE_X"})), "future_x");
    }

    #[test]
    fn test_missing_code_is_unknown() {
        assert_eq!(phase_of(json!({})), "unknown");
        assert_eq!(phase_of(json!({"splitType": null})), "unknown");
    }

    #[test]
    fn test_none_and_empty_input() {
        assert!(classify_splits(None).is_empty());
        assert!(classify_splits(Some(&[][..])).is_empty());
    }

    #[test]
    fn test_phase_leads_and_fields_are_kept() {
        let out = classify_splits(Some(&[
            json!({"splitType": "INTERVAL_ACTIVE", "noOfSplits": 6, "distance": 2400.0}),
            json!({"splitType": "INTERVAL_RECOVERY", "noOfSplits": 5}),
        ][..]));
        assert_eq!(out.len(), 2);
        let first = out[0].as_object().unwrap();
        assert_eq!(first.keys().next().map(String::as_str), Some("phase"));
        assert_eq!(first["splitType"], "INTERVAL_ACTIVE");
        assert_eq!(first["noOfSplits"], 6);
        assert_eq!(first["distance"], 2400.0);
        assert_eq!(out[1]["phase"], "recovery");
    }
}
