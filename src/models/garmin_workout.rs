// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin Connect workout document (the `workout-service` request body).

use serde::Serialize;
use serde_json::Value;

/// Workout in the shape the Garmin workout service accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GarminWorkout {
    pub workout_name: String,
    pub description: Option<String>,
    pub sport_type: SportTypeRef,
    pub estimated_duration_in_secs: u32,
    pub estimated_distance_in_meters: f64,
    pub workout_segments: Vec<WorkoutSegment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSegment {
    pub segment_order: u32,
    pub sport_type: SportTypeRef,
    pub workout_steps: Vec<GarminStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SportTypeRef {
    pub sport_type_id: u32,
    pub sport_type_key: &'static str,
    pub display_order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTypeRef {
    pub step_type_id: u32,
    pub step_type_key: &'static str,
    pub display_order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionTypeRef {
    pub condition_type_id: u32,
    pub condition_type_key: &'static str,
    pub display_order: u32,
    pub displayable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitRef {
    pub unit_id: u32,
    pub unit_key: &'static str,
    pub factor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetTypeRef {
    pub workout_target_type_id: u32,
    pub workout_target_type_key: &'static str,
    pub display_order: u32,
}

/// One node of the step tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum GarminStep {
    #[serde(rename = "ExecutableStepDTO")]
    Executable(ExecutableStep),
    #[serde(rename = "RepeatGroupDTO")]
    RepeatGroup(RepeatGroup),
}

impl GarminStep {
    pub fn step_id(&self) -> u32 {
        match self {
            GarminStep::Executable(step) => step.step_id,
            GarminStep::RepeatGroup(group) => group.step_id,
        }
    }
}

/// End condition of a step, flattened into the step body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndCondition {
    pub end_condition: ConditionTypeRef,
    pub end_condition_value: Option<f64>,
    pub preferred_end_condition_unit: Option<UnitRef>,
    pub end_condition_compare: Option<&'static str>,
    pub end_condition_zone: Option<u32>,
}

/// Primary target of a step, flattened into the step body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    pub target_type: TargetTypeRef,
    pub target_value_one: Option<f64>,
    pub target_value_two: Option<f64>,
    pub target_value_unit: Option<String>,
    pub zone_number: Option<u32>,
}

/// Leaf step. Fields this service never sets are still sent as null because
/// the workout service rejects documents that omit them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutableStep {
    pub step_id: u32,
    pub step_order: u32,
    pub step_type: StepTypeRef,
    pub child_step_id: Option<u32>,
    pub description: Option<String>,
    #[serde(flatten)]
    pub end: EndCondition,
    #[serde(flatten)]
    pub target: Target,
    pub secondary_target_type: Option<TargetTypeRef>,
    pub secondary_target_value_one: Option<f64>,
    pub secondary_target_value_two: Option<f64>,
    pub secondary_target_value_unit: Option<String>,
    pub secondary_zone_number: Option<u32>,
    pub stroke_type: Option<Value>,
    pub equipment_type: Option<Value>,
    pub category: Option<String>,
    pub exercise_name: Option<String>,
    pub workout_provider: Option<String>,
    pub provider_exercise_source_id: Option<String>,
    pub weight_value: Option<f64>,
    pub weight_unit: Option<Value>,
}

/// Container step executed `number_of_iterations` times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatGroup {
    pub step_id: u32,
    pub step_order: u32,
    pub step_type: StepTypeRef,
    pub child_step_id: Option<u32>,
    pub number_of_iterations: u32,
    pub smart_repeat: bool,
    #[serde(flatten)]
    pub end: EndCondition,
    pub workout_steps: Vec<ExecutableStep>,
}
