// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout authoring routes against the offline Garmin mock.

use axum::http::StatusCode;
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

use common::{authed_post, body_json, create_test_app};

fn intervals() -> Value {
    json!({
        "name": "3x1k",
        "sport": "running",
        "steps": [
            {"type": "warmup", "duration": {"type": "time", "seconds": 600}, "target": {"type": "none"}},
            {"type": "repeat", "iterations": 3, "steps": [
                {"type": "interval", "duration": {"type": "distance", "meters": 1000},
                 "target": {"type": "pace", "minPerKm": "4:30", "maxPerKm": "4:15"}},
                {"type": "recovery", "duration": {"type": "time", "seconds": 90}, "target": {"type": "none"}}
            ]},
            {"type": "cooldown", "duration": {"type": "lapButton"}, "target": {"type": "none"}}
        ]
    })
}

#[tokio::test]
async fn test_create_workout_compiles_and_stores() {
    let (app, mock) = create_test_app();

    let response = app
        .oneshot(authed_post("/api/workouts", &intervals()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["workoutId"], 9001);
    assert!(body.get("schedule").is_none());

    let created = mock.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    let steps = created[0]["workoutSegments"][0]["workoutSteps"]
        .as_array()
        .unwrap();
    let ids: Vec<u64> = steps
        .iter()
        .map(|step| step["stepId"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 5]);
    assert_eq!(steps[1]["type"], "RepeatGroupDTO");
    assert_eq!(steps[1]["numberOfIterations"], 3);
    assert!(mock.scheduled.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_workout_with_schedule_date() {
    let (app, mock) = create_test_app();
    let mut payload = intervals();
    payload["scheduleDate"] = json!("2026-11-02");

    let response = app
        .oneshot(authed_post("/api/workouts", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["schedule"]["workoutScheduleId"], 77);
    assert_eq!(
        *mock.scheduled.lock().unwrap(),
        vec![(9001, NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())]
    );
}

#[tokio::test]
async fn test_bad_schedule_date_creates_nothing() {
    let (app, mock) = create_test_app();
    let mut payload = intervals();
    payload["scheduleDate"] = json!("next tuesday");

    let response = app
        .oneshot(authed_post("/api/workouts", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(mock.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_nested_repeat_is_validation_error() {
    let (app, mock) = create_test_app();
    let payload = json!({
        "name": "nested",
        "sport": "running",
        "steps": [
            {"type": "repeat", "iterations": 2, "steps": [
                {"type": "repeat", "iterations": 2, "steps": [
                    {"type": "interval", "duration": {"type": "time", "seconds": 30}, "target": {"type": "none"}}
                ]}
            ]}
        ]
    });

    let response = app
        .oneshot(authed_post("/api/workouts", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert!(body["details"].as_str().unwrap().starts_with("steps[0].steps[0]"));
    assert!(mock.created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_bad_pace_is_validation_error() {
    let (app, _) = create_test_app();
    let mut payload = intervals();
    payload["steps"][1]["steps"][0]["target"]["minPerKm"] = json!("fast");

    let response = app
        .oneshot(authed_post("/api/workouts", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_schedule_existing_workout() {
    let (app, mock) = create_test_app();

    let response = app
        .oneshot(authed_post(
            "/api/workouts/123/schedule",
            &json!({"date": "2026-12-24"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["workoutId"], 123);
    assert_eq!(body["calendarDate"], "2026-12-24");
    assert_eq!(mock.scheduled.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_schedule_rejects_bad_date() {
    let (app, mock) = create_test_app();

    let response = app
        .oneshot(authed_post(
            "/api/workouts/123/schedule",
            &json!({"date": "24/12/2026"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(mock.scheduled.lock().unwrap().is_empty());
}
