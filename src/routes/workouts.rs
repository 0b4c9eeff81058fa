// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout authoring routes.

use crate::error::{AppError, Result};
use crate::middleware::GarminSession;
use crate::services::{build_garmin_workout, parse_workout_payload};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::post,
    Extension, Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", post(create_workout))
        .route("/api/workouts/{id}/schedule", post(schedule_workout))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutResponse {
    pub workout_id: Option<u64>,
    /// Garmin's stored copy of the workout
    pub workout: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
}

fn parse_date(raw: &str, field: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("'{}' must be a YYYY-MM-DD date", field)))
}

/// Compile a workout, store it in the user's Garmin library, and optionally
/// put it on the calendar when the payload carries `scheduleDate`.
async fn create_workout(
    State(state): State<Arc<AppState>>,
    Extension(GarminSession(session)): Extension<GarminSession>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<CreateWorkoutResponse>)> {
    let definition = parse_workout_payload(&payload)?;

    let schedule_date = match payload.get("scheduleDate") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(parse_date(raw, "scheduleDate")?),
        Some(_) => {
            return Err(AppError::BadRequest(
                "'scheduleDate' must be a YYYY-MM-DD date".to_string(),
            ))
        }
    };

    let garmin_workout = build_garmin_workout(&definition)
        .ok_or_else(|| AppError::Validation("Workout could not be compiled".to_string()))?;

    tracing::info!(
        name = %garmin_workout.workout_name,
        steps = definition.steps.len(),
        "Creating Garmin workout"
    );

    let stored = state.connect.create_workout(&session, &garmin_workout).await?;
    let workout_id = stored.get("workoutId").and_then(Value::as_u64);

    let schedule = match schedule_date {
        Some(date) => {
            let workout_id = workout_id.ok_or_else(|| {
                AppError::Upstream("Created workout has no workoutId".to_string())
            })?;
            tracing::info!(workout_id, %date, "Scheduling new workout");
            Some(state.connect.schedule_workout(&session, workout_id, date).await?)
        }
        None => None,
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateWorkoutResponse {
            workout_id,
            workout: stored,
            schedule,
        }),
    ))
}

#[derive(Deserialize)]
pub struct ScheduleRequest {
    pub date: String,
}

/// Put an existing workout on the user's calendar.
async fn schedule_workout(
    State(state): State<Arc<AppState>>,
    Extension(GarminSession(session)): Extension<GarminSession>,
    Path(workout_id): Path<u64>,
    Json(request): Json<ScheduleRequest>,
) -> Result<Json<Value>> {
    let date = parse_date(&request.date, "date")?;

    tracing::info!(workout_id, %date, "Scheduling workout");

    Ok(Json(
        state
            .connect
            .schedule_workout(&session, workout_id, date)
            .await?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2026-03-01", "date").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
        );
        assert!(matches!(
            parse_date("03/01/2026", "date"),
            Err(AppError::BadRequest(_))
        ));
        assert!(parse_date("2026-02-30", "date").is_err());
    }
}
