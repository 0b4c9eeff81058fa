// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod garmin_workout;
pub mod session;
pub mod taxonomy;
pub mod workout;

pub use activity::{FlatActivity, WorkoutResponse};
pub use garmin_workout::{GarminStep, GarminWorkout};
pub use session::SessionToken;
pub use taxonomy::Profile;
pub use workout::WorkoutDefinition;
