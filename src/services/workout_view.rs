// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Builds the 13-group workout view of a single activity.

use crate::models::activity::{FlatActivity, WorkoutResponse};
use crate::models::taxonomy::{
    BODY_FIELDS, DISTANCE_FIELDS, ELEVATION_FIELDS, HEART_RATE_FIELDS, IDENTITY_FIELDS,
    LAP_FIELDS, META_FIELDS, PACE_FIELDS, POWER_FIELDS, RUNNING_DYNAMICS_FIELDS, TIMING_FIELDS,
    TRAINING_FIELDS,
};
use crate::services::activity::{pick_fields, pick_value_fields};
use crate::services::splits::classify_splits;
use serde_json::Value;

/// Group a flattened activity and its laps into the workout view.
///
/// Missing capabilities (no power meter, not a run, ...) show up as empty
/// groups. Laps keep upstream order.
pub fn build_workout_response(flat: &FlatActivity, laps: &[Value]) -> WorkoutResponse {
    let split_summaries = flat
        .get("splitSummaries")
        .and_then(Value::as_array)
        .map(Vec::as_slice);

    WorkoutResponse {
        identity: pick_fields(flat, IDENTITY_FIELDS),
        timing: pick_fields(flat, TIMING_FIELDS),
        distance: pick_fields(flat, DISTANCE_FIELDS),
        pace: pick_fields(flat, PACE_FIELDS),
        heart_rate: pick_fields(flat, HEART_RATE_FIELDS),
        elevation: pick_fields(flat, ELEVATION_FIELDS),
        running_dynamics: pick_fields(flat, RUNNING_DYNAMICS_FIELDS),
        power: pick_fields(flat, POWER_FIELDS),
        training: pick_fields(flat, TRAINING_FIELDS),
        body: pick_fields(flat, BODY_FIELDS),
        workout_structure: classify_splits(split_summaries),
        laps: laps
            .iter()
            .map(|lap| pick_value_fields(lap, LAP_FIELDS))
            .collect(),
        meta: pick_fields(flat, META_FIELDS),
    }
}
