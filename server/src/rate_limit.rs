//! In-memory rate limiting for feedback submissions.
//!
//! DESIGN
//! ======
//! Fixed-window counters keyed by client (usually the IP address). Windows are
//! aligned to the Unix epoch, so a `day` window resets at UTC midnight and a
//! rejected request learns exactly how many seconds remain until the reset.
//!
//! The limit is configured as `N/unit` via `MAX_REQUEST_PER_DAILY`, where
//! `unit` is one of `second`, `minute`, `hour`, `day` (default `5/day`).
//!
//! TRADE-OFFS
//! ==========
//! Counters live in process memory only; a restart forgets them and multiple
//! server replicas each enforce their own quota.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};

const DEFAULT_LIMIT: RateLimitConfig = RateLimitConfig { limit: 5, window_secs: 86_400 };

/// Stale windows are swept once the map grows past this many clients.
const PRUNE_THRESHOLD: usize = 4096;

// =============================================================================
// CONFIG
// =============================================================================

/// `limit` requests per fixed window of `window_secs` seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub limit: u32,
    pub window_secs: u64,
}

impl RateLimitConfig {
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var("MAX_REQUEST_PER_DAILY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, value = %raw, "invalid MAX_REQUEST_PER_DAILY; using default");
                DEFAULT_LIMIT
            }),
            Err(_) => DEFAULT_LIMIT,
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        DEFAULT_LIMIT
    }
}

fn unit_secs(unit: &str) -> Option<u64> {
    match unit.trim().to_ascii_lowercase().trim_end_matches('s') {
        "second" | "sec" => Some(1),
        "minute" | "min" => Some(60),
        "hour" => Some(3600),
        "day" => Some(86_400),
        _ => None,
    }
}

impl FromStr for RateLimitConfig {
    type Err = RateLimitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RateLimitError::InvalidLimit(s.to_owned());
        let (count, unit) = s.split_once('/').ok_or_else(invalid)?;
        let limit = count.trim().parse::<u32>().map_err(|_| invalid())?;
        let window_secs = unit_secs(unit).ok_or_else(invalid)?;
        if limit == 0 {
            return Err(invalid());
        }
        Ok(Self { limit, window_secs })
    }
}

impl fmt::Display for RateLimitConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.window_secs {
            1 => "second",
            60 => "minute",
            3600 => "hour",
            86_400 => "day",
            other => return write!(f, "{}/{other}s", self.limit),
        };
        write!(f, "{}/{unit}", self.limit)
    }
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    #[error("invalid rate limit '{0}' (expected N/second|minute|hour|day)")]
    InvalidLimit(String),
    #[error("rate limit exceeded (max {limit} requests/{window_secs}s); retry in {retry_after}s")]
    Exceeded { limit: u32, window_secs: u64, retry_after: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<LimiterState>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct LimiterState {
    windows: HashMap<String, WindowCount>,
    /// Window in which stale entries were last swept.
    pruned_window: Option<u64>,
}

#[derive(Clone, Copy)]
struct WindowCount {
    window_start: u64,
    count: u32,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(LimiterState::default())), config }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(RateLimitConfig::from_env())
    }

    #[must_use]
    pub fn config(&self) -> RateLimitConfig {
        self.config
    }

    /// Count a request for `key`, rejecting it once the window's quota is used.
    ///
    /// # Errors
    ///
    /// Returns [`RateLimitError::Exceeded`] with the seconds left in the window.
    pub fn check_and_record(&self, key: &str) -> Result<(), RateLimitError> {
        let now = u64::try_from(time::OffsetDateTime::now_utc().unix_timestamp()).unwrap_or_default();
        self.check_and_record_at(key, now)
    }

    /// Check + record with an explicit Unix timestamp in seconds.
    pub(crate) fn check_and_record_at(&self, key: &str, now: u64) -> Result<(), RateLimitError> {
        let cfg = self.config;
        let window_start = window_start(now, cfg.window_secs);
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        // At most one sweep per window: past the threshold every live entry
        // belongs to the current window, so a second sweep removes nothing.
        if inner.windows.len() >= PRUNE_THRESHOLD && inner.pruned_window != Some(window_start) {
            inner.windows.retain(|_, w| w.window_start == window_start);
            inner.pruned_window = Some(window_start);
        }

        let entry = inner
            .windows
            .entry(key.to_owned())
            .or_insert(WindowCount { window_start, count: 0 });
        if entry.window_start != window_start {
            *entry = WindowCount { window_start, count: 0 };
        }
        if entry.count >= cfg.limit {
            return Err(RateLimitError::Exceeded {
                limit: cfg.limit,
                window_secs: cfg.window_secs,
                retry_after: seconds_until_reset(now, cfg.window_secs),
            });
        }
        entry.count += 1;
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn window_start(now: u64, window_secs: u64) -> u64 {
    now - now % window_secs.max(1)
}

/// Seconds from `now` until the epoch-aligned window containing it ends.
pub(crate) fn seconds_until_reset(now: u64, window_secs: u64) -> u64 {
    let window_secs = window_secs.max(1);
    window_start(now, window_secs) + window_secs - now
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;
