// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user password-login cooldown.
//!
//! Garmin locks accounts that log in too often, so the relay spaces out
//! password logins per username. The store is injected into `AppState`
//! so tests and alternative deployments can swap it out.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Entries kept before expired ones are swept.
const SWEEP_THRESHOLD: usize = 1024;

/// Key/value store with per-key expiry used to throttle logins.
pub trait CooldownStore: Send + Sync {
    /// Record an attempt for `key` at `now`.
    ///
    /// Returns `Err(remaining)` without recording anything if the previous
    /// attempt is still inside the window.
    fn try_acquire(&self, key: &str, now: Instant) -> Result<(), Duration>;
}

/// Process-local cooldown store.
pub struct InMemoryCooldownStore {
    window: Duration,
    last_attempt: DashMap<String, Instant>,
    /// Time of the last automatic sweep. Sweeps run at most once per window.
    last_sweep: Mutex<Option<Instant>>,
}

impl InMemoryCooldownStore {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_attempt: DashMap::new(),
            last_sweep: Mutex::new(None),
        }
    }

    /// Drop entries whose window has passed.
    pub fn sweep(&self, now: Instant) {
        let window = self.window;
        self.last_attempt
            .retain(|_, at| now.saturating_duration_since(*at) < window);
    }

    /// Sweep unless one already ran within the last window.
    fn maybe_sweep(&self, now: Instant) {
        {
            let mut last_sweep = self
                .last_sweep
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if last_sweep.is_some_and(|at| now.saturating_duration_since(at) < self.window) {
                return;
            }
            *last_sweep = Some(now);
        }
        self.sweep(now);
    }

    pub fn len(&self) -> usize {
        self.last_attempt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_attempt.is_empty()
    }
}

impl CooldownStore for InMemoryCooldownStore {
    fn try_acquire(&self, key: &str, now: Instant) -> Result<(), Duration> {
        if self.last_attempt.len() > SWEEP_THRESHOLD {
            self.maybe_sweep(now);
        }

        match self.last_attempt.entry(key.to_string()) {
            Entry::Occupied(mut entry) => {
                let elapsed = now.saturating_duration_since(*entry.get());
                if elapsed < self.window {
                    return Err(self.window - elapsed);
                }
                entry.insert(now);
                Ok(())
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
                Ok(())
            }
        }
    }
}

/// Normalize a username into a cooldown key.
pub fn cooldown_key(username: &str) -> String {
    username.trim().to_lowercase()
}
