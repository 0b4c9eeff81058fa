// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only activity routes.

use crate::error::Result;
use crate::middleware::GarminSession;
use crate::models::{Profile, WorkoutResponse};
use crate::models::taxonomy::ACTIVITY_SUMMARY_FIELDS;
use crate::services::activity::{flatten_activity, pick_value_fields};
use crate::services::build_workout_response;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// API routes (require an API key and a Garmin session).
/// The middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/profile", get(get_profile))
        .route("/api/activities", get(get_activities))
        .route("/api/activities/{id}", get(get_activity))
        .route("/api/activities/{id}/splits", get(get_activity_splits))
        .route("/api/activities/{id}/workout", get(get_activity_workout))
}

// ─── User Profile ────────────────────────────────────────────

/// Garmin social profile of the session's account, passed through.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(GarminSession(session)): Extension<GarminSession>,
) -> Result<Json<Value>> {
    Ok(Json(state.connect.get_user_profile(&session).await?))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Offset into the newest-first activity list
    #[serde(default)]
    start: u32,
    /// Page size
    #[serde(default = "default_limit")]
    limit: u32,
}

fn default_limit() -> u32 {
    20
}

const MAX_LIMIT: u32 = 100;

/// List activities, each flattened and cut down to the summary profile.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Extension(GarminSession(session)): Extension<GarminSession>,
    Query(query): Query<ActivitiesQuery>,
) -> Result<Json<Vec<Map<String, Value>>>> {
    let limit = query.limit.clamp(1, MAX_LIMIT);

    let activities = state
        .connect
        .get_activities(&session, query.start, limit)
        .await?;

    tracing::debug!(
        start = query.start,
        limit,
        count = activities.len(),
        "Fetched activity list"
    );

    Ok(Json(
        activities
            .into_iter()
            .map(|activity| pick_value_fields(&flatten_activity(activity), ACTIVITY_SUMMARY_FIELDS))
            .collect(),
    ))
}

#[derive(Deserialize)]
struct ProfileQuery {
    #[serde(default)]
    profile: Profile,
}

/// Single activity, flattened and projected through the requested profile.
async fn get_activity(
    State(state): State<Arc<AppState>>,
    Extension(GarminSession(session)): Extension<GarminSession>,
    Path(activity_id): Path<u64>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<Map<String, Value>>> {
    let raw = state.connect.get_activity(&session, activity_id).await?;
    let flat = flatten_activity(raw);

    Ok(Json(pick_value_fields(&flat, query.profile.activity_fields())))
}

/// Laps of an activity projected through the requested split profile.
async fn get_activity_splits(
    State(state): State<Arc<AppState>>,
    Extension(GarminSession(session)): Extension<GarminSession>,
    Path(activity_id): Path<u64>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<Vec<Map<String, Value>>>> {
    let laps = state
        .connect
        .get_activity_laps(&session, activity_id)
        .await?;
    let fields = query.profile.split_fields();

    Ok(Json(
        laps.iter()
            .map(|lap| pick_value_fields(lap, fields))
            .collect(),
    ))
}

/// Grouped workout view of one activity.
async fn get_activity_workout(
    State(state): State<Arc<AppState>>,
    Extension(GarminSession(session)): Extension<GarminSession>,
    Path(activity_id): Path<u64>,
) -> Result<Json<WorkoutResponse>> {
    let (raw, laps) = tokio::try_join!(
        state.connect.get_activity(&session, activity_id),
        state.connect.get_activity_laps(&session, activity_id),
    )?;

    let flat = match flatten_activity(raw) {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    tracing::debug!(activity_id, laps = laps.len(), "Building workout view");

    Ok(Json(build_workout_response(&flat, &laps)))
}
