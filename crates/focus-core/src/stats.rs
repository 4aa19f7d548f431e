//! Streak and daily-session counters.
//!
//! The tracker keeps no session history; everything derives from the three
//! persisted fields. `sessions_today` is only meaningful while
//! `last_session_date` is the current calendar day - a passive load with a
//! stale date reads it as zero without touching the persisted streak, so an
//! unbroken streak is never destroyed just because today's session hasn't
//! happened yet.
//!
//! The tracker is the single authoritative streak representation. The old
//! browser build also kept a coarser `focus-streak`/`focus-last-date` reset
//! check in the timer component; that mechanism is deprecated here and the
//! streak is only ever mutated by [`StatsTracker::register_session`].

use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::events::{Event, SESSION_COMPLETED_EVENT};
use crate::store::{self, keys, ChangeBus, KvStore};

/// Persisted stats blob. Field names match the browser build's JSON
/// (`{"streak":..,"sessionsToday":..,"lastSessionDate":"YYYY-MM-DD"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FocusStats {
    pub streak: u32,
    pub sessions_today: u32,
    #[serde(default)]
    pub last_session_date: Option<NaiveDate>,
}

/// Computes and persists streak / sessions-today counters.
pub struct StatsTracker<'a> {
    store: &'a dyn KvStore,
}

impl<'a> StatsTracker<'a> {
    pub fn new(store: &'a dyn KvStore) -> Self {
        Self { store }
    }

    /// Load the current view of the stats, applying the daily-reset check:
    /// a stale `sessions_today` reads as 0. The persisted blob is not
    /// rewritten by a load.
    pub fn load(&self) -> FocusStats {
        self.load_on(today_local())
    }

    pub fn load_on(&self, today: NaiveDate) -> FocusStats {
        let mut stats = self.persisted();
        if stats.last_session_date != Some(today) {
            stats.sessions_today = 0;
        }
        stats
    }

    /// Register one completed focus/custom session for today.
    ///
    /// Streak rule: same day leaves it unchanged, yesterday extends it by
    /// one, any older date (or none) starts a new streak of 1. Persists the
    /// result, then fires the same-tab completed notification so in-process
    /// consumers refresh without waiting for a cross-tab storage event.
    pub fn register_session(&self, bus: &mut ChangeBus) -> Result<FocusStats, StoreError> {
        self.register_session_on(bus, today_local())
    }

    pub fn register_session_on(
        &self,
        bus: &mut ChangeBus,
        today: NaiveDate,
    ) -> Result<FocusStats, StoreError> {
        let prev = self.persisted();

        let streak = match prev.last_session_date {
            Some(last) if last == today => prev.streak,
            Some(last) if last.succ_opt() == Some(today) => prev.streak + 1,
            Some(_) => 1,
            None => 1,
        };
        let sessions_today = if prev.last_session_date == Some(today) {
            prev.sessions_today + 1
        } else {
            1
        };

        let next = FocusStats {
            streak,
            sessions_today,
            last_session_date: Some(today),
        };
        store::set_json(self.store, keys::STATS, &next)?;
        bus.notify_local(SESSION_COMPLETED_EVENT);
        Ok(next)
    }

    /// Stats-changed event for the current view.
    pub fn changed_event(&self) -> Event {
        let stats = self.load();
        Event::StatsChanged {
            streak: stats.streak,
            sessions_today: stats.sessions_today,
            at: Utc::now(),
        }
    }

    fn persisted(&self) -> FocusStats {
        store::get_json(self.store, keys::STATS).unwrap_or_default()
    }
}

fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
