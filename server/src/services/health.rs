//! Component health checks behind `GET /api/health`.

use std::collections::BTreeMap;

use quiz::{QuestionKind, Quiz};
use serde::Serialize;
use sqlx::PgPool;

pub const HEALTHY_MESSAGE: &str = "Sakaai Simulator is up and running.";
pub const UNHEALTHY_MESSAGE: &str = "One or more components failed health check.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health response body. `failures` maps each failed check to `false` and is
/// omitted when everything passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failures: Option<BTreeMap<&'static str, bool>>,
}

impl HealthReport {
    /// Summarize named check results.
    #[must_use]
    pub fn from_checks(checks: &[(&'static str, bool)]) -> Self {
        let failures: BTreeMap<_, _> = checks
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, ok)| (*name, *ok))
            .collect();
        if failures.is_empty() {
            Self { status: HealthStatus::Healthy, message: HEALTHY_MESSAGE, failures: None }
        } else {
            Self { status: HealthStatus::Unhealthy, message: UNHEALTHY_MESSAGE, failures: Some(failures) }
        }
    }
}

/// The built-in sample quiz must pass [`quiz_passes_import_check`].
pub(crate) fn sample_quiz_check() -> bool {
    quiz_passes_import_check(&quiz::sample::sample_quiz("health-check", 0))
}

/// Whether `candidate` validates, exercises every question view, and survives
/// a round trip through the import parser unchanged.
pub(crate) fn quiz_passes_import_check(candidate: &Quiz) -> bool {
    if candidate.validate().is_err() {
        return false;
    }
    let covers_every_kind = QuestionKind::ALL
        .iter()
        .all(|kind| candidate.questions.iter().any(|q| q.kind() == *kind));
    covers_every_kind
        && serde_json::to_string(&candidate.questions)
            .ok()
            .and_then(|raw| quiz::parse_questions(&raw).ok())
            .is_some_and(|parsed| parsed == candidate.questions)
}

/// Run every check against live dependencies.
pub async fn run_checks(pool: &PgPool) -> HealthReport {
    let database_ok = match crate::db::ping(pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "health: database check failed");
            false
        }
    };
    HealthReport::from_checks(&[("database_check", database_ok), ("sample_quiz_check", sample_quiz_check())])
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
