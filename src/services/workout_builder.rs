// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Compiles a [`WorkoutDefinition`] into the Garmin workout step tree.
//!
//! Step IDs come from one counter starting at 1, assigned in document
//! order. A repeat group takes the next ID itself and its children follow
//! immediately, so the first child of a group is always `group + 1` and the
//! step after the group continues where the children stopped.
//!
//! Any failure returns `None` for the whole workout. Nothing partial is
//! ever produced.

use crate::models::garmin_workout::{
    ConditionTypeRef, EndCondition, ExecutableStep, GarminStep, GarminWorkout, RepeatGroup,
    SportTypeRef, StepTypeRef, Target, TargetTypeRef, UnitRef, WorkoutSegment,
};
use crate::models::workout::{
    Comparison, RepeatStep, SingleStep, Sport, StepDuration, StepTarget, StepType,
    WorkoutDefinition, WorkoutStep,
};

// ─── Lookup tables ───────────────────────────────────────────

fn sport_type(sport: Sport) -> SportTypeRef {
    let (sport_type_id, sport_type_key, display_order) = match sport {
        Sport::Running => (1, "running", 1),
        Sport::Cycling => (2, "cycling", 2),
        Sport::Swimming => (4, "swimming", 3),
        Sport::Strength => (5, "strength_training", 5),
        Sport::Cardio => (6, "cardio_training", 6),
    };
    SportTypeRef {
        sport_type_id,
        sport_type_key,
        display_order,
    }
}

fn step_type(kind: StepType) -> StepTypeRef {
    let (step_type_id, step_type_key) = match kind {
        StepType::Warmup => (1, "warmup"),
        StepType::Cooldown => (2, "cooldown"),
        StepType::Interval => (3, "interval"),
        StepType::Recovery => (4, "recovery"),
        StepType::Rest => (5, "rest"),
        StepType::Other => (7, "other"),
    };
    StepTypeRef {
        step_type_id,
        step_type_key,
        display_order: step_type_id,
    }
}

const REPEAT_STEP_TYPE: StepTypeRef = StepTypeRef {
    step_type_id: 6,
    step_type_key: "repeat",
    display_order: 6,
};

const fn condition(id: u32, key: &'static str) -> ConditionTypeRef {
    ConditionTypeRef {
        condition_type_id: id,
        condition_type_key: key,
        display_order: id,
        displayable: true,
    }
}

const LAP_BUTTON: ConditionTypeRef = condition(1, "lap.button");
const TIME: ConditionTypeRef = condition(2, "time");
const DISTANCE: ConditionTypeRef = condition(3, "distance");
const CALORIES: ConditionTypeRef = condition(4, "calories");
const HEART_RATE: ConditionTypeRef = condition(6, "heart.rate");
const ITERATIONS: ConditionTypeRef = ConditionTypeRef {
    condition_type_id: 7,
    condition_type_key: "iterations",
    display_order: 7,
    displayable: false,
};

const KILOMETER: UnitRef = UnitRef {
    unit_id: 2,
    unit_key: "kilometer",
    factor: 100_000.0,
};

const fn target_type(id: u32, key: &'static str) -> TargetTypeRef {
    TargetTypeRef {
        workout_target_type_id: id,
        workout_target_type_key: key,
        display_order: id,
    }
}

const NO_TARGET: TargetTypeRef = target_type(1, "no.target");
const POWER_ZONE: TargetTypeRef = target_type(2, "power.zone");
const CADENCE: TargetTypeRef = target_type(3, "cadence");
const HEART_RATE_ZONE: TargetTypeRef = target_type(4, "heart.rate.zone");
const PACE_ZONE: TargetTypeRef = target_type(6, "pace.zone");

// ─── Conversions ─────────────────────────────────────────────

/// Convert a `"M:SS"` per-kilometer pace into meters per second.
///
/// Returns `None` for anything that is not exactly two non-negative numbers
/// separated by `:` with a positive total.
pub fn parse_pace_to_mps(pace: &str) -> Option<f64> {
    let mut parts = pace.split(':');
    let minutes = parse_pace_component(parts.next()?)?;
    let seconds = parse_pace_component(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }

    let total_seconds = minutes * 60.0 + seconds;
    if total_seconds > 0.0 {
        Some(1000.0 / total_seconds)
    } else {
        None
    }
}

fn parse_pace_component(part: &str) -> Option<f64> {
    part.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}

fn end_condition(duration: &StepDuration) -> EndCondition {
    let (end_condition, value, unit, compare) = match duration {
        StepDuration::Time { seconds } => (TIME, Some(*seconds), None, None),
        StepDuration::Distance { meters } => (DISTANCE, Some(*meters), Some(KILOMETER), None),
        StepDuration::Calories { calories } => (CALORIES, Some(*calories), None, None),
        StepDuration::LapButton => (LAP_BUTTON, None, None, None),
        StepDuration::HeartRate { bpm, comparison } => (
            HEART_RATE,
            Some(*bpm),
            None,
            Some(comparison.unwrap_or(Comparison::Gt).as_str()),
        ),
    };
    EndCondition {
        end_condition,
        end_condition_value: value,
        preferred_end_condition_unit: unit,
        end_condition_compare: compare,
        end_condition_zone: None,
    }
}

fn target(target: &StepTarget) -> Option<Target> {
    let range = |target_type, one: f64, two: f64| Target {
        target_type,
        target_value_one: Some(one),
        target_value_two: Some(two),
        target_value_unit: None,
        zone_number: None,
    };
    let zone = |target_type, zone: u32| Target {
        target_type,
        target_value_one: None,
        target_value_two: None,
        target_value_unit: None,
        zone_number: Some(zone),
    };

    let built = match target {
        StepTarget::None => Target {
            target_type: NO_TARGET,
            target_value_one: None,
            target_value_two: None,
            target_value_unit: None,
            zone_number: None,
        },
        StepTarget::Pace {
            min_per_km,
            max_per_km,
        } => {
            let a = parse_pace_to_mps(min_per_km)?;
            let b = parse_pace_to_mps(max_per_km)?;
            // Slower speed first regardless of how the client ordered them.
            range(PACE_ZONE, a.min(b), a.max(b))
        }
        StepTarget::HeartRateZone { zone: z } => zone(HEART_RATE_ZONE, *z),
        StepTarget::HeartRate { min, max } => range(HEART_RATE_ZONE, *min, *max),
        StepTarget::PowerZone { zone: z } => zone(POWER_ZONE, *z),
        StepTarget::Power { min, max } => range(POWER_ZONE, *min, *max),
        StepTarget::Cadence { min, max } => range(CADENCE, *min, *max),
    };
    Some(built)
}

// ─── Step builders ───────────────────────────────────────────

fn build_executable_step(step: &SingleStep, step_id: u32) -> Option<ExecutableStep> {
    Some(ExecutableStep {
        step_id,
        step_order: step_id,
        step_type: step_type(step.step_type),
        child_step_id: None,
        description: step.notes.clone(),
        end: end_condition(&step.duration),
        target: target(&step.target)?,
        secondary_target_type: None,
        secondary_target_value_one: None,
        secondary_target_value_two: None,
        secondary_target_value_unit: None,
        secondary_zone_number: None,
        stroke_type: None,
        equipment_type: None,
        category: None,
        exercise_name: None,
        workout_provider: None,
        provider_exercise_source_id: None,
        weight_value: None,
        weight_unit: None,
    })
}

/// Build a repeat group starting at `step_id`.
///
/// Returns the group and the next free step ID.
fn build_repeat_group(repeat: &RepeatStep, step_id: u32) -> Option<(RepeatGroup, u32)> {
    let mut next_id = step_id + 1;
    let mut children = Vec::with_capacity(repeat.steps.len());
    for child in &repeat.steps {
        children.push(build_executable_step(child, next_id)?);
        next_id += 1;
    }

    let group = RepeatGroup {
        step_id,
        step_order: step_id,
        step_type: REPEAT_STEP_TYPE,
        child_step_id: None,
        number_of_iterations: repeat.iterations,
        smart_repeat: false,
        end: EndCondition {
            end_condition: ITERATIONS,
            end_condition_value: Some(f64::from(repeat.iterations)),
            preferred_end_condition_unit: None,
            end_condition_compare: None,
            end_condition_zone: None,
        },
        workout_steps: children,
    };
    Some((group, next_id))
}

/// Compile a workout. `None` means some step could not be translated.
pub fn build_garmin_workout(workout: &WorkoutDefinition) -> Option<GarminWorkout> {
    let sport = sport_type(workout.sport);

    let mut next_id = 1;
    let mut steps = Vec::with_capacity(workout.steps.len());
    for step in &workout.steps {
        match step {
            WorkoutStep::Single(single) => {
                steps.push(GarminStep::Executable(build_executable_step(single, next_id)?));
                next_id += 1;
            }
            WorkoutStep::Repeat(repeat) => {
                let (group, after) = build_repeat_group(repeat, next_id)?;
                steps.push(GarminStep::RepeatGroup(group));
                next_id = after;
            }
        }
    }

    Some(GarminWorkout {
        workout_name: workout.name.trim().to_string(),
        description: workout.description.clone(),
        sport_type: sport,
        estimated_duration_in_secs: 0,
        estimated_distance_in_meters: 0.0,
        workout_segments: vec![WorkoutSegment {
            segment_order: 1,
            sport_type: sport,
            workout_steps: steps,
        }],
    })
}
