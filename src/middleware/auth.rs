// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request authentication: the relay API key and the caller's Garmin session.

use crate::error::AppError;
use crate::models::SessionToken;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Header carrying the relay API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Garmin session extracted from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct GarminSession(pub SessionToken);

/// Middleware that rejects requests without the configured API key.
pub async fn require_api_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    let matches: bool = provided
        .as_bytes()
        .ct_eq(state.config.api_key.as_bytes())
        .into();
    if !matches {
        tracing::warn!(path = %request.uri().path(), "Rejected request with missing or wrong API key");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Middleware that requires an exported session token as a bearer token.
pub async fn require_session(mut request: Request, next: Next) -> Result<Response, AppError> {
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthorized)?;

    let token = SessionToken::import(bearer).map_err(|_| AppError::InvalidSession)?;
    if token.is_expired(chrono::Utc::now()) {
        return Err(AppError::InvalidSession);
    }

    request.extensions_mut().insert(GarminSession(token));
    Ok(next.run(request).await)
}
