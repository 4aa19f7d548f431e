//! Session coordinator: wires the timer engine to stats and persistence.
//!
//! This is the data-flow spine of the app: user action -> engine transition
//! -> (on a counting completion) stats registration -> store write + bus
//! notification. The presentation layer only talks to this type.
//!
//! Store writes along the way are best-effort; timer state is not
//! safety-critical and a failed snapshot must never stop the countdown.

use crate::events::Event;
use crate::stats::{FocusStats, StatsTracker};
use crate::store::{keys, ChangeBus, KvStore};
use crate::timer::{TimerEngine, TimerMode};

pub struct FocusSession<'a> {
    store: &'a dyn KvStore,
    engine: TimerEngine,
    bus: ChangeBus,
}

impl<'a> FocusSession<'a> {
    /// Open a session seeded from persisted state.
    pub fn open(store: &'a dyn KvStore) -> Self {
        Self {
            store,
            engine: TimerEngine::restore(store),
            bus: ChangeBus::new(),
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// The notification bus; subscribe here for same-tab stats refreshes or
    /// feed in cross-process change events.
    pub fn bus_mut(&mut self) -> &mut ChangeBus {
        &mut self.bus
    }

    /// Current stats view (with the daily-reset check applied).
    pub fn stats(&self) -> FocusStats {
        StatsTracker::new(self.store).load()
    }

    // ── Commands (engine transition + snapshot persist) ──────────────

    pub fn toggle(&mut self) -> Event {
        let event = self.engine.toggle();
        self.persist_snapshot();
        event
    }

    pub fn switch_mode(&mut self, mode: TimerMode) -> Event {
        let event = self.engine.switch_mode(mode);
        self.persist_snapshot();
        event
    }

    pub fn reset(&mut self) -> Event {
        let event = self.engine.reset();
        self.persist_snapshot();
        event
    }

    pub fn set_custom_minutes(
        &mut self,
        minutes: u32,
    ) -> Result<Event, crate::error::ValidationError> {
        let event = self.engine.set_custom_minutes(minutes)?;
        self.persist_snapshot();
        Ok(event)
    }

    /// Advance the countdown by one second.
    ///
    /// A completion in focus/custom mode registers the session exactly once
    /// (the engine only emits the completion event on the zero-reaching
    /// tick), writes the last-session-date marker and notifies the bus.
    pub fn tick(&mut self) -> Option<Event> {
        let event = self.engine.tick();
        if let Some(Event::SessionCompleted {
            counts_toward_stats: true,
            at,
            ..
        }) = &event
        {
            let _ = StatsTracker::new(self.store).register_session(&mut self.bus);
            // Legacy marker kept for persisted-key compatibility; nothing
            // here reads it back to mutate the streak.
            let _ = self.store.set(keys::LAST_SESSION_DATE, &at.to_rfc3339());
        }
        self.persist_snapshot();
        event
    }

    fn persist_snapshot(&self) {
        let _ = self.engine.persist(self.store);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SESSION_COMPLETED_EVENT;
    use crate::store::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn full_focus_session_registers_exactly_once() {
        let store = MemoryStore::new();
        let mut session = FocusSession::open(&store);

        let registered = Rc::new(Cell::new(0));
        {
            let registered = Rc::clone(&registered);
            session.bus_mut().on_local(SESSION_COMPLETED_EVENT, move || {
                registered.set(registered.get() + 1)
            });
        }

        session.toggle();
        for _ in 0..1500 {
            session.tick();
        }

        assert!(session.engine().is_completed());
        assert!(!session.engine().is_running());
        assert_eq!(registered.get(), 1);

        let stats = session.stats();
        assert_eq!(stats.sessions_today, 1);
        assert_eq!(stats.streak, 1);
        assert!(store.get(keys::LAST_SESSION_DATE).unwrap().is_some());
    }

    #[test]
    fn break_completion_registers_nothing() {
        let store = MemoryStore::new();
        let mut session = FocusSession::open(&store);
        session.switch_mode(TimerMode::ShortBreak);
        session.toggle();
        for _ in 0..5 * 60 {
            session.tick();
        }
        assert!(session.engine().is_completed());
        assert_eq!(session.stats().sessions_today, 0);
        assert!(store.get(keys::LAST_SESSION_DATE).unwrap().is_none());
    }

    #[test]
    fn commands_persist_snapshots_as_they_go() {
        let store = MemoryStore::new();
        let mut session = FocusSession::open(&store);
        session.switch_mode(TimerMode::Custom);
        session.set_custom_minutes(45).unwrap();
        assert_eq!(
            store.get(keys::TIMER_MODE).unwrap().as_deref(),
            Some("custom")
        );
        assert_eq!(
            store.get(keys::CUSTOM_MINUTES).unwrap().as_deref(),
            Some("45")
        );

        session.toggle();
        session.tick();
        assert_eq!(
            store.get(keys::TIMER_TIME).unwrap().as_deref(),
            Some("2699")
        );
    }

    #[test]
    fn reopening_resumes_from_persisted_snapshot() {
        let store = MemoryStore::new();
        {
            let mut session = FocusSession::open(&store);
            session.switch_mode(TimerMode::LongBreak);
            session.toggle();
            for _ in 0..10 {
                session.tick();
            }
        }
        let session = FocusSession::open(&store);
        assert_eq!(session.engine().mode(), TimerMode::LongBreak);
        assert_eq!(session.engine().seconds_remaining(), 15 * 60 - 10);
        // Running is transient and never persisted.
        assert!(!session.engine().is_running());
    }

    #[test]
    fn remote_change_notification_reaches_subscriber() {
        let store = MemoryStore::new();
        let mut session = FocusSession::open(&store);
        let seen = Rc::new(Cell::new(false));
        {
            let seen = Rc::clone(&seen);
            session
                .bus_mut()
                .on_remote_change(keys::STATS, move || seen.set(true));
        }
        // Another process wrote the stats blob; its watcher feeds the bus.
        session.bus_mut().notify_remote(keys::STATS);
        assert!(seen.get());
    }
}
