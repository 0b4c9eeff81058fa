// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field taxonomy: which raw Garmin fields belong to which profile or group.
//!
//! Every view this service produces is a projection of a flat activity (or
//! lap) record through one of these lists. The lists are the whole dispatch
//! mechanism, so adding a field to a view means adding it here and nowhere
//! else. Order matters: projected objects keep the order of the list.

use serde::Deserialize;

// ─── Workout groups ──────────────────────────────────────────

pub const IDENTITY_FIELDS: &[&str] = &[
    "activityId",
    "activityName",
    "description",
    "activityType",
    "locationName",
    "startLatitude",
    "startLongitude",
    "ownerId",
    "ownerDisplayName",
    "deviceId",
];

pub const TIMING_FIELDS: &[&str] = &[
    "startTimeLocal",
    "startTimeGMT",
    "beginTimestamp",
    "duration",
    "elapsedDuration",
    "movingDuration",
];

pub const DISTANCE_FIELDS: &[&str] = &["distance", "steps", "endLatitude", "endLongitude"];

pub const PACE_FIELDS: &[&str] = &[
    "averageSpeed",
    "maxSpeed",
    "averageMovingSpeed",
    "avgGradeAdjustedSpeed",
    "fastestSplit_1000",
    "fastestSplit_1609",
    "fastestSplit_5000",
];

pub const HEART_RATE_FIELDS: &[&str] = &[
    "averageHR",
    "maxHR",
    "minHR",
    "restingHeartRate",
    "hrTimeInZone_1",
    "hrTimeInZone_2",
    "hrTimeInZone_3",
    "hrTimeInZone_4",
    "hrTimeInZone_5",
];

pub const ELEVATION_FIELDS: &[&str] = &[
    "elevationGain",
    "elevationLoss",
    "minElevation",
    "maxElevation",
    "maxVerticalSpeed",
];

pub const RUNNING_DYNAMICS_FIELDS: &[&str] = &[
    "averageRunningCadenceInStepsPerMinute",
    "maxRunningCadenceInStepsPerMinute",
    "maxDoubleCadence",
    "avgStrideLength",
    "avgVerticalOscillation",
    "avgGroundContactTime",
    "avgVerticalRatio",
    "avgGroundContactBalance",
];

pub const POWER_FIELDS: &[&str] = &[
    "avgPower",
    "maxPower",
    "normPower",
    "maxAvgPower_1",
    "maxAvgPower_5",
    "maxAvgPower_60",
    "maxAvgPower_300",
    "maxAvgPower_1200",
    "powerTimeInZone_1",
    "powerTimeInZone_2",
    "powerTimeInZone_3",
    "powerTimeInZone_4",
    "powerTimeInZone_5",
];

pub const TRAINING_FIELDS: &[&str] = &[
    "aerobicTrainingEffect",
    "anaerobicTrainingEffect",
    "trainingEffectLabel",
    "aerobicTrainingEffectMessage",
    "anaerobicTrainingEffectMessage",
    "activityTrainingLoad",
    "vO2MaxValue",
    "moderateIntensityMinutes",
    "vigorousIntensityMinutes",
];

pub const BODY_FIELDS: &[&str] = &[
    "calories",
    "waterEstimated",
    "differenceBodyBattery",
    "beginPotentialStamina",
    "endPotentialStamina",
    "minAvailableStamina",
    "avgRespirationRate",
    "maxRespirationRate",
    "minTemperature",
    "maxTemperature",
];

pub const META_FIELDS: &[&str] = &[
    "lapCount",
    "hasSplits",
    "pr",
    "manualActivity",
    "favorite",
    "manufacturer",
    "autoCalcCalories",
    "elevationCorrected",
    "hasPolyline",
    "parent",
];

/// Lap fields kept in the workout view. Anything else on a lap record
/// (`lengthDTOs`, `messageIndex`, `bmrCalories`, `minPower`, ...) is dropped.
pub const LAP_FIELDS: &[&str] = &[
    "lapIndex",
    "startTimeGMT",
    "distance",
    "duration",
    "movingDuration",
    "elapsedDuration",
    "averageSpeed",
    "averageMovingSpeed",
    "maxSpeed",
    "avgGradeAdjustedSpeed",
    "averageHR",
    "maxHR",
    "elevationGain",
    "elevationLoss",
    "averageRunCadence",
    "maxRunCadence",
    "strideLength",
    "groundContactTime",
    "verticalOscillation",
    "verticalRatio",
    "averagePower",
    "maxPower",
    "normalizedPower",
    "calories",
    "intensityType",
    "wktStepIndex",
];

// ─── Activity detail profiles ────────────────────────────────

pub const ACTIVITY_SUMMARY_FIELDS: &[&str] = &[
    "activityId",
    "activityName",
    "activityType",
    "startTimeLocal",
    "duration",
    "distance",
    "averageSpeed",
    "averageHR",
    "calories",
    "elevationGain",
];

pub const ACTIVITY_COACHING_FIELDS: &[&str] = &[
    "activityId",
    "activityName",
    "activityType",
    "startTimeLocal",
    "duration",
    "movingDuration",
    "distance",
    "averageSpeed",
    "maxSpeed",
    "avgGradeAdjustedSpeed",
    "averageHR",
    "maxHR",
    "hrTimeInZone_1",
    "hrTimeInZone_2",
    "hrTimeInZone_3",
    "hrTimeInZone_4",
    "hrTimeInZone_5",
    "elevationGain",
    "elevationLoss",
    "averageRunningCadenceInStepsPerMinute",
    "avgStrideLength",
    "avgVerticalOscillation",
    "avgGroundContactTime",
    "avgPower",
    "normPower",
    "aerobicTrainingEffect",
    "anaerobicTrainingEffect",
    "trainingEffectLabel",
    "activityTrainingLoad",
    "vO2MaxValue",
    "calories",
    "lapCount",
];

pub const ACTIVITY_FULL_FIELDS: &[&str] = &[
    "activityId",
    "activityName",
    "description",
    "activityType",
    "locationName",
    "startLatitude",
    "startLongitude",
    "endLatitude",
    "endLongitude",
    "ownerId",
    "ownerDisplayName",
    "deviceId",
    "startTimeLocal",
    "startTimeGMT",
    "beginTimestamp",
    "duration",
    "elapsedDuration",
    "movingDuration",
    "distance",
    "steps",
    "averageSpeed",
    "maxSpeed",
    "averageMovingSpeed",
    "avgGradeAdjustedSpeed",
    "averageHR",
    "maxHR",
    "minHR",
    "hrTimeInZone_1",
    "hrTimeInZone_2",
    "hrTimeInZone_3",
    "hrTimeInZone_4",
    "hrTimeInZone_5",
    "elevationGain",
    "elevationLoss",
    "minElevation",
    "maxElevation",
    "averageRunningCadenceInStepsPerMinute",
    "maxRunningCadenceInStepsPerMinute",
    "avgStrideLength",
    "avgVerticalOscillation",
    "avgGroundContactTime",
    "avgVerticalRatio",
    "avgGroundContactBalance",
    "avgPower",
    "maxPower",
    "normPower",
    "aerobicTrainingEffect",
    "anaerobicTrainingEffect",
    "trainingEffectLabel",
    "activityTrainingLoad",
    "vO2MaxValue",
    "moderateIntensityMinutes",
    "vigorousIntensityMinutes",
    "calories",
    "waterEstimated",
    "differenceBodyBattery",
    "avgRespirationRate",
    "minTemperature",
    "maxTemperature",
    "lapCount",
    "hasSplits",
    "pr",
    "manualActivity",
    "favorite",
    "manufacturer",
];

// ─── Split/lap profiles ──────────────────────────────────────

pub const SPLIT_SUMMARY_FIELDS: &[&str] = &[
    "lapIndex",
    "distance",
    "duration",
    "averageSpeed",
    "averageHR",
];

pub const SPLIT_COACHING_FIELDS: &[&str] = &[
    "lapIndex",
    "distance",
    "duration",
    "movingDuration",
    "averageSpeed",
    "avgGradeAdjustedSpeed",
    "averageHR",
    "maxHR",
    "elevationGain",
    "elevationLoss",
    "averageRunCadence",
    "strideLength",
    "groundContactTime",
    "verticalOscillation",
    "averagePower",
    "intensityType",
];

/// Which slice of an activity or split record a caller wants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Summary,
    Coaching,
    Full,
}

impl Profile {
    /// Field list for an activity detail view.
    pub fn activity_fields(self) -> &'static [&'static str] {
        match self {
            Profile::Summary => ACTIVITY_SUMMARY_FIELDS,
            Profile::Coaching => ACTIVITY_COACHING_FIELDS,
            Profile::Full => ACTIVITY_FULL_FIELDS,
        }
    }

    /// Field list for a split (lap) view.
    pub fn split_fields(self) -> &'static [&'static str] {
        match self {
            Profile::Summary => SPLIT_SUMMARY_FIELDS,
            Profile::Coaching => SPLIT_COACHING_FIELDS,
            Profile::Full => LAP_FIELDS,
        }
    }
}
