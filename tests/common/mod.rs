// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request};
use chrono::{Duration, NaiveDate, Utc};
use garmin_relay::config::Config;
use garmin_relay::error::AppError;
use garmin_relay::models::{GarminWorkout, SessionToken};
use garmin_relay::routes::create_router;
use garmin_relay::services::{ConnectApi, InMemoryCooldownStore};
use garmin_relay::AppState;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// API key configured by `Config::test_default()`.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test_api_key";

/// Password the mock accepts.
#[allow(dead_code)]
pub const GOOD_PASSWORD: &str = "correct horse";

/// Offline stand-in for Garmin Connect.
#[derive(Default)]
pub struct MockConnect {
    pub login_calls: AtomicUsize,
    pub created: Mutex<Vec<Value>>,
    pub scheduled: Mutex<Vec<(u64, NaiveDate)>>,
    /// Delay added to every `get_json` call.
    pub latency: Option<std::time::Duration>,
}

/// Raw activity in Garmin's nested detail shape.
#[allow(dead_code)]
pub fn raw_activity(activity_id: u64) -> Value {
    json!({
        "activityId": activity_id,
        "activityName": "Morning Run",
        "summaryDTO": {
            "startTimeLocal": "2026-03-01T07:00:00.0",
            "duration": 1800.0,
            "distance": 5000.0,
            "averageSpeed": 2.78,
            "averageHR": 150.0,
            "maxHR": 172.0,
            "elevationGain": 35.0,
            "aerobicTrainingEffect": 3.1
        },
        "metadataDTO": {
            "lapCount": 2,
            "hasSplits": true,
            "personalRecord": false,
            "manualActivity": false
        },
        "activityTypeDTO": {"typeKey": "running", "typeId": 1},
        "eventTypeDTO": {"typeKey": "uncategorized"},
        "timeZoneUnitDTO": {"timeZone": "America/Los_Angeles"},
        "accessControlRuleDTO": {"typeKey": "private"},
        "splitSummaries": [
            {"splitType": "INTERVAL_WARMUP", "duration": 600.0},
            {"splitType": "INTERVAL_ACTIVE", "duration": 900.0},
            {"splitType": "RWD_STAND", "duration": 30.0}
        ]
    })
}

/// Raw laps as returned under `lapDTOs`.
#[allow(dead_code)]
pub fn raw_laps() -> Vec<Value> {
    vec![
        json!({"lapIndex": 1, "distance": 2500.0, "duration": 900.0, "messageIndex": 0, "lengthDTOs": []}),
        json!({"lapIndex": 2, "distance": 2500.0, "duration": 900.0, "messageIndex": 1, "lengthDTOs": []}),
    ]
}

#[async_trait]
impl ConnectApi for MockConnect {
    async fn login(&self, _username: &str, password: &str) -> Result<SessionToken, AppError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if password != GOOD_PASSWORD {
            return Err(AppError::Unauthorized);
        }
        Ok(test_session())
    }

    async fn get_json(&self, _session: &SessionToken, path: &str) -> Result<Value, AppError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        if path.starts_with("/userprofile-service/") {
            return Ok(json!({"displayName": "runner", "fullName": "Test Runner"}));
        }
        if path.starts_with("/activitylist-service/") {
            return Ok(json!([raw_activity(1), raw_activity(2)]));
        }
        if let Some(rest) = path.strip_prefix("/activity-service/activity/") {
            let (id, splits) = match rest.strip_suffix("/splits") {
                Some(id) => (id, true),
                None => (rest, false),
            };
            let id: u64 = id.parse().map_err(|_| AppError::NotFound(path.to_string()))?;
            if id == 404 {
                return Err(AppError::NotFound("Garmin resource".to_string()));
            }
            return Ok(if splits {
                json!({"activityId": id, "lapDTOs": raw_laps()})
            } else {
                raw_activity(id)
            });
        }
        Err(AppError::NotFound(path.to_string()))
    }

    async fn create_workout(
        &self,
        _session: &SessionToken,
        workout: &GarminWorkout,
    ) -> Result<Value, AppError> {
        let mut stored = serde_json::to_value(workout).map_err(anyhow::Error::from)?;
        stored["workoutId"] = json!(9001);
        self.created.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn schedule_workout(
        &self,
        _session: &SessionToken,
        workout_id: u64,
        date: NaiveDate,
    ) -> Result<Value, AppError> {
        self.scheduled.lock().unwrap().push((workout_id, date));
        Ok(json!({"workoutScheduleId": 77, "workoutId": workout_id, "calendarDate": date.to_string()}))
    }
}

/// A session token valid for the next hour.
pub fn test_session() -> SessionToken {
    SessionToken {
        access_token: "mock-access".to_string(),
        refresh_token: None,
        expires_at: Utc::now() + Duration::hours(1),
    }
}

/// Create a test app backed by the offline mock.
/// Returns the router and the mock so tests can inspect upstream calls.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<MockConnect>) {
    create_test_app_with(Config::test_default(), MockConnect::default())
}

/// Create a test app from an explicit config and mock.
#[allow(dead_code)]
pub fn create_test_app_with(
    config: Config,
    mock: MockConnect,
) -> (axum::Router, Arc<MockConnect>) {
    let mock = Arc::new(mock);
    let login_cooldown = Arc::new(InMemoryCooldownStore::new(config.login_cooldown));

    let state = Arc::new(AppState {
        config,
        connect: mock.clone(),
        login_cooldown,
    });

    (create_router(state), mock)
}

/// Authenticated GET request.
#[allow(dead_code)]
pub fn authed_get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("X-API-Key", TEST_API_KEY)
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", test_session().export()),
        )
        .body(Body::empty())
        .unwrap()
}

/// Authenticated POST request with a JSON body.
#[allow(dead_code)]
pub fn authed_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("X-API-Key", TEST_API_KEY)
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", test_session().export()),
        )
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
