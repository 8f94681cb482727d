//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool and the feedback rate limiter; both are cheap to
//! clone and share their inner state across clones.

use sqlx::PgPool;

use crate::rate_limit::RateLimiter;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Per-client limiter for `POST /api/feedback`.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool, rate_limiter: RateLimiter) -> Self {
        Self { pool, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
