// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validation of client-authored workout payloads.
//!
//! Runs on the raw JSON so the error can say exactly which step is wrong
//! (`steps[2].steps[0]: ...`). Stops at the first problem.

use crate::models::workout::{Sport, StepDuration, StepTarget, StepType, WorkoutDefinition};
use crate::services::workout_builder::parse_pace_to_mps;
use serde_json::{Map, Value};

/// A workout payload that cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct WorkoutValidationError(pub String);

type ValidationResult = Result<(), WorkoutValidationError>;

fn invalid(message: impl Into<String>) -> WorkoutValidationError {
    WorkoutValidationError(message.into())
}

/// Validate a workout payload without building anything.
pub fn validate_workout_payload(payload: &Value) -> ValidationResult {
    let workout = payload
        .as_object()
        .ok_or_else(|| invalid("Workout must be a JSON object"))?;

    let name_ok = workout
        .get("name")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.trim().is_empty());
    if !name_ok {
        return Err(invalid("Workout name is required"));
    }

    check_optional_string(workout, "description", "Workout description")?;

    match workout.get("sport").and_then(Value::as_str) {
        Some(sport) if Sport::ALL.contains(&sport) => {}
        _ => {
            return Err(invalid(format!(
                "Workout sport must be one of: {}",
                Sport::ALL.join(", ")
            )))
        }
    }

    let steps = workout
        .get("steps")
        .and_then(Value::as_array)
        .filter(|steps| !steps.is_empty())
        .ok_or_else(|| invalid("Workout must have at least one step"))?;

    for (index, step) in steps.iter().enumerate() {
        validate_step(step, &format!("steps[{}]", index), true)?;
    }

    Ok(())
}

/// Validate and then deserialize a payload into the typed workout.
pub fn parse_workout_payload(payload: &Value) -> Result<WorkoutDefinition, WorkoutValidationError> {
    validate_workout_payload(payload)?;
    serde_json::from_value(payload.clone())
        .map_err(|e| invalid(format!("Workout could not be read: {}", e)))
}

fn validate_step(step: &Value, path: &str, allow_repeat: bool) -> ValidationResult {
    let step = step
        .as_object()
        .ok_or_else(|| invalid(format!("{}: step must be a JSON object", path)))?;

    let step_type = step.get("type").and_then(Value::as_str).unwrap_or_default();

    if step_type == "repeat" {
        if !allow_repeat {
            return Err(invalid(format!("{}: repeat steps cannot be nested", path)));
        }
        return validate_repeat(step, path);
    }

    if !StepType::ALL.contains(&step_type) {
        return Err(invalid(format!(
            "{}: step type must be one of: repeat, {}",
            path,
            StepType::ALL.join(", ")
        )));
    }

    let duration = step
        .get("duration")
        .and_then(Value::as_object)
        .ok_or_else(|| invalid(format!("{}: duration is required", path)))?;
    validate_duration(duration, path)?;

    let target = step
        .get("target")
        .and_then(Value::as_object)
        .ok_or_else(|| invalid(format!("{}: target is required", path)))?;
    validate_target(target, path)?;

    check_optional_string(step, "notes", &format!("{}: notes", path))
}

fn validate_repeat(step: &Map<String, Value>, path: &str) -> ValidationResult {
    let iterations_ok = step
        .get("iterations")
        .and_then(Value::as_u64)
        .is_some_and(|n| n > 0 && u32::try_from(n).is_ok());
    if !iterations_ok {
        return Err(invalid(format!(
            "{}: iterations must be a positive integer",
            path
        )));
    }

    let children = step
        .get("steps")
        .and_then(Value::as_array)
        .filter(|steps| !steps.is_empty())
        .ok_or_else(|| invalid(format!("{}: repeat must contain at least one step", path)))?;

    for (index, child) in children.iter().enumerate() {
        validate_step(child, &format!("{}.steps[{}]", path, index), false)?;
    }
    Ok(())
}

fn validate_duration(duration: &Map<String, Value>, path: &str) -> ValidationResult {
    let kind = duration.get("type").and_then(Value::as_str).unwrap_or_default();
    match kind {
        "time" => require_positive(duration, "seconds", path),
        "distance" => require_positive(duration, "meters", path),
        "calories" => require_positive(duration, "calories", path),
        "lapButton" => Ok(()),
        "heartRate" => {
            require_positive(duration, "bpm", path)?;
            match duration.get("comparison") {
                None | Some(Value::Null) => Ok(()),
                Some(Value::String(c)) if c == "gt" || c == "lt" => Ok(()),
                Some(_) => Err(invalid(format!(
                    "{}: duration comparison must be \"gt\" or \"lt\"",
                    path
                ))),
            }
        }
        _ => Err(invalid(format!(
            "{}: duration type must be one of: {}",
            path,
            StepDuration::KINDS.join(", ")
        ))),
    }
}

fn validate_target(target: &Map<String, Value>, path: &str) -> ValidationResult {
    let kind = target.get("type").and_then(Value::as_str).unwrap_or_default();
    match kind {
        "none" => Ok(()),
        "pace" => {
            for bound in ["minPerKm", "maxPerKm"] {
                let parsed = target
                    .get(bound)
                    .and_then(Value::as_str)
                    .and_then(parse_pace_to_mps);
                if parsed.is_none() {
                    return Err(invalid(format!(
                        "{}: target {} must be a pace like \"5:30\"",
                        path, bound
                    )));
                }
            }
            Ok(())
        }
        "heartRateZone" => {
            let zone_ok = target
                .get("zone")
                .and_then(Value::as_u64)
                .is_some_and(|zone| (1..=5).contains(&zone));
            if zone_ok {
                Ok(())
            } else {
                Err(invalid(format!(
                    "{}: heart rate zone must be an integer from 1 to 5",
                    path
                )))
            }
        }
        "powerZone" => {
            let zone_ok = target
                .get("zone")
                .and_then(Value::as_u64)
                .is_some_and(|zone| zone >= 1 && u32::try_from(zone).is_ok());
            if zone_ok {
                Ok(())
            } else {
                Err(invalid(format!(
                    "{}: power zone must be a positive integer",
                    path
                )))
            }
        }
        "heartRate" | "power" | "cadence" => {
            let numeric = |key: &str| target.get(key).is_some_and(Value::is_number);
            if numeric("min") && numeric("max") {
                Ok(())
            } else {
                Err(invalid(format!(
                    "{}: {} target needs numeric min and max",
                    path, kind
                )))
            }
        }
        _ => Err(invalid(format!(
            "{}: target type must be one of: {}",
            path,
            StepTarget::KINDS.join(", ")
        ))),
    }
}

fn require_positive(record: &Map<String, Value>, key: &str, path: &str) -> ValidationResult {
    let positive = record
        .get(key)
        .and_then(Value::as_f64)
        .is_some_and(|v| v.is_finite() && v > 0.0);
    if positive {
        Ok(())
    } else {
        Err(invalid(format!(
            "{}: duration {} must be greater than 0",
            path, key
        )))
    }
}

fn check_optional_string(record: &Map<String, Value>, key: &str, label: &str) -> ValidationResult {
    match record.get(key) {
        None | Some(Value::Null) | Some(Value::String(_)) => Ok(()),
        Some(_) => Err(invalid(format!("{} must be a string", label))),
    }
}
