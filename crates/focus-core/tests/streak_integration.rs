//! Integration tests for the streak workflow.
//!
//! These tests drive multi-day sequences of session registrations through
//! the tracker and verify the streak and daily counters end to end, using
//! the in-memory store.

use chrono::NaiveDate;
use focus_core::store::{ChangeBus, MemoryStore};
use focus_core::{FocusStats, StatsTracker};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn test_week_of_daily_sessions_builds_a_seven_day_streak() {
    let store = MemoryStore::new();
    let tracker = StatsTracker::new(&store);
    let mut bus = ChangeBus::new();

    let mut day = date("2026-08-17");
    let mut last = FocusStats::default();
    for _ in 0..7 {
        last = tracker.register_session_on(&mut bus, day).unwrap();
        day = day.succ_opt().unwrap();
    }

    assert_eq!(last.streak, 7);
    assert_eq!(last.sessions_today, 1);
    assert_eq!(last.last_session_date, Some(date("2026-08-23")));
}

#[test]
fn test_missed_day_restarts_the_streak() {
    let store = MemoryStore::new();
    let tracker = StatsTracker::new(&store);
    let mut bus = ChangeBus::new();

    tracker.register_session_on(&mut bus, date("2026-08-20")).unwrap();
    tracker.register_session_on(&mut bus, date("2026-08-21")).unwrap();
    // 2026-08-22 skipped.
    let stats = tracker.register_session_on(&mut bus, date("2026-08-23")).unwrap();

    assert_eq!(stats.streak, 1);
    assert_eq!(stats.sessions_today, 1);
}

#[test]
fn test_multiple_sessions_one_day_count_once_for_the_streak() {
    let store = MemoryStore::new();
    let tracker = StatsTracker::new(&store);
    let mut bus = ChangeBus::new();

    for _ in 0..4 {
        tracker.register_session_on(&mut bus, date("2026-08-24")).unwrap();
    }
    let stats = tracker.load_on(date("2026-08-24"));

    assert_eq!(stats.streak, 1);
    assert_eq!(stats.sessions_today, 4);
}

#[test]
fn test_next_day_view_shows_streak_but_zero_sessions() {
    let store = MemoryStore::new();
    let tracker = StatsTracker::new(&store);
    let mut bus = ChangeBus::new();

    tracker.register_session_on(&mut bus, date("2026-08-23")).unwrap();
    tracker.register_session_on(&mut bus, date("2026-08-24")).unwrap();

    let view = tracker.load_on(date("2026-08-25"));
    assert_eq!(view.streak, 2);
    assert_eq!(view.sessions_today, 0);

    // The next registration still extends the persisted streak.
    let stats = tracker.register_session_on(&mut bus, date("2026-08-25")).unwrap();
    assert_eq!(stats.streak, 3);
}

#[test]
fn test_stats_survive_store_reopen() {
    let store = MemoryStore::new();
    {
        let tracker = StatsTracker::new(&store);
        let mut bus = ChangeBus::new();
        tracker.register_session_on(&mut bus, date("2026-08-24")).unwrap();
        tracker.register_session_on(&mut bus, date("2026-08-24")).unwrap();
    }
    let tracker = StatsTracker::new(&store);
    let stats = tracker.load_on(date("2026-08-24"));
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.sessions_today, 2);
}
