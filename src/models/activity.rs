// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity records as they flow through the relay.

use serde::Serialize;
use serde_json::{Map, Value};

/// A single-level activity record: top-level fields, summary metrics and the
/// selected metadata flags merged into one map.
pub type FlatActivity = Map<String, Value>;

/// Semantically grouped view of one activity.
///
/// All thirteen groups are always present. A group the recording device had
/// no data for is an empty object (or empty array), never null, so clients
/// can hide empty sections without special-casing missing keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutResponse {
    pub identity: Map<String, Value>,
    pub timing: Map<String, Value>,
    pub distance: Map<String, Value>,
    pub pace: Map<String, Value>,
    pub heart_rate: Map<String, Value>,
    pub elevation: Map<String, Value>,
    pub running_dynamics: Map<String, Value>,
    pub power: Map<String, Value>,
    pub training: Map<String, Value>,
    pub body: Map<String, Value>,
    /// Phase-annotated split summaries.
    pub workout_structure: Vec<Value>,
    pub laps: Vec<Map<String, Value>>,
    pub meta: Map<String, Value>,
}
