// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::{SystemTime, UNIX_EPOCH};

/// Thin wrapper over [`tick::Clock`] exposing a "now in seconds" view for timestamping stored
/// results, while keeping `Instant`-based TTL/refresh math (via [`Clock::inner`]) for monotonic
/// precision.
#[derive(Debug, Clone)]
pub struct Clock(tick::Clock);

impl Clock {
    /// Creates a clock driven by the Tokio runtime. Panics outside a Tokio runtime context,
    /// same as [`tick::Clock::new_tokio`].
    #[must_use]
    pub fn new_tokio() -> Self {
        Self(tick::Clock::new_tokio())
    }

    /// Seconds since the Unix epoch, for diagnostics and `last_refresh_at`-style reporting.
    /// TTL/refresh scheduling never uses this — it goes through `Instant`s on `inner()`.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0
            .system_time()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }

    /// The underlying `tick::Clock`, for components that need `Instant`-precision timers.
    #[must_use]
    pub fn inner(&self) -> &tick::Clock {
        &self.0
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new_tokio()
    }
}

impl From<tick::Clock> for Clock {
    fn from(clock: tick::Clock) -> Self {
        Self(clock)
    }
}
