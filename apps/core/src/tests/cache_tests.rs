//! Cache behavior tests: freshness, expiry, overwrite, and bounds.

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

use crate::cache::AnalysisCache;

use super::ManualClock;

fn cache_with_clock(ttl_minutes: i64, capacity: usize) -> (AnalysisCache<String>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));
    let cache = AnalysisCache::with_clock(Duration::minutes(ttl_minutes), capacity, clock.clone());
    (cache, clock)
}

#[test]
fn test_get_within_ttl_returns_payload() {
    let (cache, _clock) = cache_with_clock(30, 8);

    cache.put("video_100", "payload".to_string());
    assert_eq!(cache.get("video_100"), Some("payload".to_string()));
}

#[test]
fn test_get_after_ttl_treats_entry_as_absent() {
    let (cache, clock) = cache_with_clock(30, 8);

    cache.put("video_100", "payload".to_string());
    clock.advance(Duration::minutes(31));

    // The entry was never explicitly removed, yet it must read as absent.
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("video_100"), None);
    // Lazy expiry drops the entry once observed stale.
    assert!(cache.is_empty());
}

#[test]
fn test_entry_is_fresh_exactly_at_ttl() {
    let (cache, clock) = cache_with_clock(30, 8);

    cache.put("k", "v".to_string());
    clock.advance(Duration::minutes(30));

    assert_eq!(cache.get("k"), Some("v".to_string()));
}

#[test]
fn test_put_overwrites_previous_entry() {
    let (cache, _clock) = cache_with_clock(30, 8);

    cache.put("k", "first".to_string());
    cache.put("k", "second".to_string());

    assert_eq!(cache.get("k"), Some("second".to_string()));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_overwrite_refreshes_timestamp() {
    let (cache, clock) = cache_with_clock(30, 8);

    cache.put("k", "first".to_string());
    clock.advance(Duration::minutes(20));
    cache.put("k", "second".to_string());
    clock.advance(Duration::minutes(20));

    // 40 minutes after the first put, but only 20 after the overwrite.
    assert_eq!(cache.get("k"), Some("second".to_string()));
}

#[test]
fn test_missing_key_is_absent() {
    let (cache, _clock) = cache_with_clock(30, 8);
    assert_eq!(cache.get("never_stored"), None);
}

#[test]
fn test_capacity_bound_evicts_least_recently_used() {
    let (cache, _clock) = cache_with_clock(30, 2);

    cache.put("a", "1".to_string());
    cache.put("b", "2".to_string());
    cache.put("c", "3".to_string());

    assert_eq!(cache.get("a"), None);
    assert_eq!(cache.get("b"), Some("2".to_string()));
    assert_eq!(cache.get("c"), Some("3".to_string()));
}

#[test]
fn test_independent_keys_do_not_interfere() {
    let (cache, clock) = cache_with_clock(30, 8);

    cache.put("old", "o".to_string());
    clock.advance(Duration::minutes(25));
    cache.put("new", "n".to_string());
    clock.advance(Duration::minutes(10));

    // "old" is 35 minutes stale, "new" only 10.
    assert_eq!(cache.get("old"), None);
    assert_eq!(cache.get("new"), Some("n".to_string()));
}
