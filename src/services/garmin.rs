// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin Connect API client.
//!
//! Handles:
//! - Password login (OAuth password grant) producing a [`SessionToken`]
//! - Activity list, detail, and lap fetching
//! - Workout creation and scheduling
//! - Status mapping (401 → unauthorized, 429 → rate limit)

use crate::error::AppError;
use crate::models::garmin_workout::GarminWorkout;
use crate::models::session::SessionToken;
use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operations the relay needs from a Garmin Connect account.
///
/// Every call except `login` is authenticated with the caller's session.
#[async_trait]
pub trait ConnectApi: Send + Sync {
    /// Exchange username and password for a session.
    async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AppError>;

    /// Authenticated GET of any Connect API path (e.g. `/activity-service/...`).
    async fn get_json(&self, session: &SessionToken, path: &str) -> Result<Value, AppError>;

    /// Create a workout in the user's library. Returns Garmin's stored copy.
    async fn create_workout(
        &self,
        session: &SessionToken,
        workout: &GarminWorkout,
    ) -> Result<Value, AppError>;

    /// Put a stored workout on the user's calendar.
    async fn schedule_workout(
        &self,
        session: &SessionToken,
        workout_id: u64,
        date: NaiveDate,
    ) -> Result<Value, AppError>;

    async fn get_user_profile(&self, session: &SessionToken) -> Result<Value, AppError> {
        self.get_json(session, "/userprofile-service/socialProfile")
            .await
    }

    /// List activities, newest first.
    async fn get_activities(
        &self,
        session: &SessionToken,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Value>, AppError> {
        let path = format!(
            "/activitylist-service/activities/search/activities?start={}&limit={}",
            start, limit
        );
        match self.get_json(session, &path).await? {
            Value::Array(activities) => Ok(activities),
            other => Err(AppError::Upstream(format!(
                "Expected activity list, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Raw (nested) activity record.
    async fn get_activity(&self, session: &SessionToken, activity_id: u64) -> Result<Value, AppError> {
        self.get_json(session, &format!("/activity-service/activity/{}", activity_id))
            .await
    }

    /// Raw lap records (`lapDTOs`) of an activity.
    async fn get_activity_laps(
        &self,
        session: &SessionToken,
        activity_id: u64,
    ) -> Result<Vec<Value>, AppError> {
        let splits = self
            .get_json(
                session,
                &format!("/activity-service/activity/{}/splits", activity_id),
            )
            .await?;
        Ok(splits
            .get("lapDTOs")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// HTTP implementation of [`ConnectApi`].
#[derive(Clone)]
pub struct GarminClient {
    http: reqwest::Client,
    base_url: String,
    token_url: String,
}

impl GarminClient {
    /// Create a client; `request_timeout` bounds every upstream call.
    pub fn new(
        base_url: String,
        token_url: String,
        request_timeout: std::time::Duration,
    ) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("garmin-relay/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            token_url,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Map non-success statuses to errors and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                401 | 403 => AppError::InvalidSession,
                404 => AppError::NotFound("Garmin resource".to_string()),
                429 => {
                    tracing::warn!("Garmin rate limit hit (429)");
                    AppError::Upstream(AppError::UPSTREAM_RATE_LIMIT.to_string())
                }
                _ => AppError::Upstream(format!("HTTP {}: {}", status, body)),
            });
        }

        // Some write endpoints answer 204 with no body.
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read response: {}", e)))?;
        let body: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
        serde_json::from_slice(body)
            .map_err(|e| AppError::Upstream(format!("JSON parse error: {}", e)))
    }
}

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: i64,
}

#[derive(Serialize)]
struct ScheduleRequest {
    date: String,
}

#[async_trait]
impl ConnectApi for GarminClient {
    async fn login(&self, username: &str, password: &str) -> Result<SessionToken, AppError> {
        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "password"),
                ("username", username),
                ("password", password),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Login request failed: {}", e)))?;

        // Bad credentials come back as 400, 401 or 403 from the token endpoint.
        if matches!(response.status().as_u16(), 400 | 401 | 403) {
            return Err(AppError::Unauthorized);
        }

        let token: TokenResponse = self.check_response_json(response).await?;
        let expires_at = Duration::try_seconds(token.expires_in)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| AppError::Upstream("Invalid token expiry".to_string()))?;

        Ok(SessionToken {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at,
        })
    }

    async fn get_json(&self, session: &SessionToken, path: &str) -> Result<Value, AppError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        self.check_response_json(response).await
    }

    async fn create_workout(
        &self,
        session: &SessionToken,
        workout: &GarminWorkout,
    ) -> Result<Value, AppError> {
        let response = self
            .http
            .post(self.url("/workout-service/workout"))
            .bearer_auth(&session.access_token)
            .json(workout)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Workout create failed: {}", e)))?;

        self.check_response_json(response).await
    }

    async fn schedule_workout(
        &self,
        session: &SessionToken,
        workout_id: u64,
        date: NaiveDate,
    ) -> Result<Value, AppError> {
        let response = self
            .http
            .post(self.url(&format!("/workout-service/schedule/{}", workout_id)))
            .bearer_auth(&session.access_token)
            .json(&ScheduleRequest {
                date: date.format("%Y-%m-%d").to_string(),
            })
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Workout schedule failed: {}", e)))?;

        self.check_response_json(response).await
    }
}
