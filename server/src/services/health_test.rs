use super::*;

#[test]
fn all_passing_checks_are_healthy() {
    let report = HealthReport::from_checks(&[("database_check", true), ("sample_quiz_check", true)]);
    assert_eq!(report.status, HealthStatus::Healthy);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({"status": "healthy", "message": HEALTHY_MESSAGE}));
}

#[test]
fn failed_checks_are_listed() {
    let report = HealthReport::from_checks(&[("database_check", false), ("sample_quiz_check", true)]);
    assert_eq!(report.status, HealthStatus::Unhealthy);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["message"], UNHEALTHY_MESSAGE);
    assert_eq!(json["failures"], serde_json::json!({"database_check": false}));
}

#[test]
fn sample_quiz_passes_import_check() {
    assert!(sample_quiz_check());
}

#[test]
fn empty_quiz_fails_import_check() {
    assert!(!quiz_passes_import_check(&Quiz::new("q", "t", 0, vec![])));
}

#[test]
fn quiz_missing_a_question_kind_fails_import_check() {
    let questions: Vec<_> = quiz::sample::sample_questions()
        .into_iter()
        .filter(|q| q.kind() != QuestionKind::Essay)
        .collect();
    assert!(!quiz_passes_import_check(&Quiz::new("q", "t", 0, questions)));
}

#[tokio::test]
async fn unreachable_database_reports_unhealthy() {
    let state = crate::state::test_helpers::test_app_state();
    let report = run_checks(&state.pool).await;
    assert_eq!(report.status, HealthStatus::Unhealthy);
    let failures = report.failures.unwrap();
    assert_eq!(failures.get("database_check"), Some(&false));
    assert!(!failures.contains_key("sample_quiz_check"));
}
