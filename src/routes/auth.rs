// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Garmin session routes.

use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::services::cooldown::cooldown_key;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/session", post(create_session))
}

/// Garmin account credentials.
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 256))]
    pub username: String,
    #[validate(length(min = 1, max = 1024))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Exported session token, sent back as `Authorization: Bearer <token>`.
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Log in to Garmin Connect and hand back an exported session token.
///
/// Password logins are spaced per username; an attempt inside the cooldown
/// window is refused before Garmin is contacted.
async fn create_session(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let key = cooldown_key(&request.username);
    if let Err(remaining) = state.login_cooldown.try_acquire(&key, Instant::now()) {
        // Round up so clients never retry a moment too early.
        let retry_after_secs = remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0);
        tracing::warn!(
            username = %key,
            retry_after_secs,
            "Login attempt inside cooldown window"
        );
        return Err(AppError::RateLimited { retry_after_secs });
    }

    tracing::info!(username = %key, "Logging in to Garmin Connect");

    let session = state
        .connect
        .login(&request.username, &request.password)
        .await
        .inspect_err(|e| tracing::warn!(username = %key, error = %e, "Garmin login failed"))?;

    Ok(Json(SessionResponse {
        token: session.export(),
        expires_at: session.expires_at,
    }))
}
