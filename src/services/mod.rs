// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod activity;
pub mod cooldown;
pub mod garmin;
pub mod splits;
pub mod workout_builder;
pub mod workout_validation;
pub mod workout_view;

pub use activity::{flatten_activity, flatten_record, pick_fields};
pub use cooldown::{CooldownStore, InMemoryCooldownStore};
pub use garmin::{ConnectApi, GarminClient};
pub use splits::classify_splits;
pub use workout_builder::{build_garmin_workout, parse_pace_to_mps};
pub use workout_validation::{parse_workout_payload, validate_workout_payload, WorkoutValidationError};
pub use workout_view::build_workout_response;
