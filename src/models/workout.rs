// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Compact workout-authoring format accepted from clients.
//!
//! ```json
//! {
//!   "name": "6x400",
//!   "sport": "running",
//!   "steps": [
//!     { "type": "warmup", "duration": { "type": "time", "seconds": 600 }, "target": { "type": "none" } },
//!     { "type": "repeat", "iterations": 6, "steps": [
//!       { "type": "interval", "duration": { "type": "distance", "meters": 400 },
//!         "target": { "type": "pace", "minPerKm": "4:10", "maxPerKm": "4:00" } },
//!       { "type": "recovery", "duration": { "type": "lapButton" }, "target": { "type": "none" } }
//!     ]},
//!     { "type": "cooldown", "duration": { "type": "time", "seconds": 600 }, "target": { "type": "none" } }
//!   ]
//! }
//! ```
//!
//! Payloads are checked by `services::workout_validation` before they are
//! deserialized into these types, so the typed form is only ever built from
//! input that already passed validation.

use serde::{Deserialize, Serialize};

/// A workout as authored by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDefinition {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub sport: Sport,
    pub steps: Vec<WorkoutStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Running,
    Cycling,
    Swimming,
    Strength,
    Cardio,
}

impl Sport {
    pub const ALL: [&'static str; 5] = ["running", "cycling", "swimming", "strength", "cardio"];
}

/// Top-level step: either a single step or one level of repeats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorkoutStep {
    Repeat(RepeatStep),
    Single(SingleStep),
}

/// Marker for the `"type": "repeat"` tag on a repeat block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatTag {
    Repeat,
}

/// A block of steps executed `iterations` times. Children cannot repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatStep {
    #[serde(rename = "type")]
    pub tag: RepeatTag,
    pub iterations: u32,
    pub steps: Vec<SingleStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleStep {
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub duration: StepDuration,
    pub target: StepTarget,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Warmup,
    Interval,
    Recovery,
    Rest,
    Cooldown,
    Other,
}

impl StepType {
    pub const ALL: [&'static str; 6] = [
        "warmup", "interval", "recovery", "rest", "cooldown", "other",
    ];
}

/// How a step ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepDuration {
    Time {
        seconds: f64,
    },
    Distance {
        meters: f64,
    },
    Calories {
        calories: f64,
    },
    LapButton,
    HeartRate {
        bpm: f64,
        #[serde(default)]
        comparison: Option<Comparison>,
    },
}

impl StepDuration {
    pub const KINDS: [&'static str; 5] = ["time", "distance", "calories", "lapButton", "heartRate"];
}

/// Heart-rate end condition direction: end once HR goes above or below `bpm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparison {
    Gt,
    Lt,
}

impl Comparison {
    pub fn as_str(self) -> &'static str {
        match self {
            Comparison::Gt => "gt",
            Comparison::Lt => "lt",
        }
    }
}

/// What the athlete aims for during a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StepTarget {
    None,
    Pace {
        #[serde(rename = "minPerKm")]
        min_per_km: String,
        #[serde(rename = "maxPerKm")]
        max_per_km: String,
    },
    HeartRateZone {
        zone: u32,
    },
    HeartRate {
        min: f64,
        max: f64,
    },
    PowerZone {
        zone: u32,
    },
    Power {
        min: f64,
        max: f64,
    },
    Cadence {
        min: f64,
        max: f64,
    },
}

impl StepTarget {
    pub const KINDS: [&'static str; 7] = [
        "none",
        "pace",
        "heartRateZone",
        "heartRate",
        "powerZone",
        "power",
        "cadence",
    ];
}
