use super::*;

const DAY: u64 = 86_400;
/// 2024-01-01T00:00:00Z
const MIDNIGHT: u64 = 1_704_067_200;

fn limiter(limit: u32, window_secs: u64) -> RateLimiter {
    RateLimiter::new(RateLimitConfig { limit, window_secs })
}

// =============================================================================
// Config parsing
// =============================================================================

#[test]
fn parse_accepts_each_unit() {
    assert_eq!("5/day".parse::<RateLimitConfig>().unwrap(), RateLimitConfig { limit: 5, window_secs: DAY });
    assert_eq!("10/hour".parse::<RateLimitConfig>().unwrap().window_secs, 3600);
    assert_eq!("3/minute".parse::<RateLimitConfig>().unwrap().window_secs, 60);
    assert_eq!("1/second".parse::<RateLimitConfig>().unwrap().window_secs, 1);
}

#[test]
fn parse_tolerates_whitespace_case_and_plurals() {
    let cfg: RateLimitConfig = " 20 / Minutes ".parse().unwrap();
    assert_eq!(cfg, RateLimitConfig { limit: 20, window_secs: 60 });
}

#[test]
fn parse_rejects_malformed_values() {
    for raw in ["", "5", "five/day", "5/week", "0/day", "-1/day"] {
        assert!(
            matches!(raw.parse::<RateLimitConfig>(), Err(RateLimitError::InvalidLimit(_))),
            "expected {raw:?} to be rejected"
        );
    }
}

#[test]
fn display_round_trips_named_units() {
    for raw in ["5/day", "10/hour", "3/minute", "1/second"] {
        assert_eq!(raw.parse::<RateLimitConfig>().unwrap().to_string(), raw);
    }
}

#[test]
fn default_is_five_per_day() {
    assert_eq!(RateLimitConfig::default(), RateLimitConfig { limit: 5, window_secs: DAY });
}

// Only this test touches MAX_REQUEST_PER_DAILY.
#[test]
fn from_env_reads_and_falls_back() {
    unsafe { std::env::set_var("MAX_REQUEST_PER_DAILY", "7/hour") };
    assert_eq!(RateLimitConfig::from_env(), RateLimitConfig { limit: 7, window_secs: 3600 });
    unsafe { std::env::set_var("MAX_REQUEST_PER_DAILY", "lots") };
    assert_eq!(RateLimitConfig::from_env(), RateLimitConfig::default());
    unsafe { std::env::remove_var("MAX_REQUEST_PER_DAILY") };
    assert_eq!(RateLimitConfig::from_env(), RateLimitConfig::default());
}

// =============================================================================
// Window accounting
// =============================================================================

#[test]
fn allows_up_to_limit_then_rejects() {
    let rl = limiter(3, DAY);
    let now = MIDNIGHT + 10;
    for i in 0..3 {
        assert!(rl.check_and_record_at("1.2.3.4", now).is_ok(), "request {i} should succeed");
    }
    assert!(matches!(
        rl.check_and_record_at("1.2.3.4", now),
        Err(RateLimitError::Exceeded { limit: 3, window_secs: DAY, .. })
    ));
}

#[test]
fn retry_after_counts_down_to_window_end() {
    let rl = limiter(1, DAY);
    let now = MIDNIGHT + DAY - 90;
    rl.check_and_record_at("c", now).unwrap();
    let Err(RateLimitError::Exceeded { retry_after, .. }) = rl.check_and_record_at("c", now) else {
        panic!("expected rate limit");
    };
    assert_eq!(retry_after, 90);
}

#[test]
fn new_window_resets_quota() {
    let rl = limiter(1, DAY);
    rl.check_and_record_at("c", MIDNIGHT + DAY - 1).unwrap();
    assert!(rl.check_and_record_at("c", MIDNIGHT + DAY - 1).is_err());
    assert!(rl.check_and_record_at("c", MIDNIGHT + DAY).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = limiter(1, 60);
    let now = MIDNIGHT;
    rl.check_and_record_at("a", now).unwrap();
    assert!(rl.check_and_record_at("a", now).is_err());
    assert!(rl.check_and_record_at("b", now).is_ok());
}

#[test]
fn clones_share_counters() {
    let rl = limiter(1, 60);
    let other = rl.clone();
    rl.check_and_record_at("a", MIDNIGHT).unwrap();
    assert!(other.check_and_record_at("a", MIDNIGHT).is_err());
}

#[test]
fn seconds_until_reset_at_window_boundary_is_full_window() {
    assert_eq!(seconds_until_reset(MIDNIGHT, DAY), DAY);
    assert_eq!(seconds_until_reset(MIDNIGHT + 1, DAY), DAY - 1);
    assert_eq!(seconds_until_reset(125, 60), 55);
}

#[test]
fn stale_clients_are_pruned_past_threshold() {
    let rl = limiter(1, 60);
    for i in 0..PRUNE_THRESHOLD {
        rl.check_and_record_at(&format!("client-{i}"), MIDNIGHT).unwrap();
    }
    rl.check_and_record_at("late", MIDNIGHT + 60).unwrap();
    let inner = rl.inner.lock().unwrap();
    assert_eq!(inner.windows.len(), 1);
    assert!(inner.windows.contains_key("late"));
    assert_eq!(inner.pruned_window, Some(MIDNIGHT + 60));
}

#[test]
fn busy_window_is_swept_once() {
    let rl = limiter(1, 60);
    for i in 0..PRUNE_THRESHOLD {
        rl.check_and_record_at(&format!("client-{i}"), MIDNIGHT).unwrap();
    }
    rl.check_and_record_at("first", MIDNIGHT + 1).unwrap();
    assert_eq!(rl.inner.lock().unwrap().pruned_window, Some(MIDNIGHT));

    rl.inner
        .lock()
        .unwrap()
        .windows
        .insert("stale".to_owned(), WindowCount { window_start: 0, count: 1 });
    rl.check_and_record_at("second", MIDNIGHT + 2).unwrap();
    let inner = rl.inner.lock().unwrap();
    assert!(inner.windows.contains_key("stale"));
    assert_eq!(inner.windows.len(), PRUNE_THRESHOLD + 3);
}

#[test]
fn small_map_is_never_swept() {
    let rl = limiter(1, 60);
    rl.check_and_record_at("a", MIDNIGHT).unwrap();
    rl.check_and_record_at("b", MIDNIGHT + 60).unwrap();
    let inner = rl.inner.lock().unwrap();
    assert_eq!(inner.windows.len(), 2);
    assert_eq!(inner.pruned_window, None);
}
