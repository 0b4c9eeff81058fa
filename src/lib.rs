// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Garmin-Relay: a thin API in front of Garmin Connect
//!
//! This crate fetches activities from a Garmin Connect account and reshapes
//! them into stable, grouped views, and compiles a compact workout format
//! into Garmin's workout step tree.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{ConnectApi, CooldownStore};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub connect: Arc<dyn ConnectApi>,
    pub login_cooldown: Arc<dyn CooldownStore>,
}
