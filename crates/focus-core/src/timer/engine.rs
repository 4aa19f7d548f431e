//! Countdown timer state machine.
//!
//! The engine does not schedule anything itself - the caller ticks it once
//! per second while it runs and is responsible for cancelling that cadence
//! on teardown. Each tick decrements the remaining time by exactly one
//! second; there is deliberately no wall-clock drift correction.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running -> Completed -> Idle
//! ```
//!
//! `Completed` is transient: it lingers for four ticks (four seconds at the
//! contract tick rate) so the presentation layer can show a done state, then
//! reverts to `Idle` on its own.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::mode::{
    TimerMode, CUSTOM_MINUTES_DEFAULT, CUSTOM_MINUTES_MAX, CUSTOM_MINUTES_MIN,
};
use crate::error::ValidationError;
use crate::events::{Event, SoundCue};
use crate::quotes;
use crate::store::{keys, KvStore};

/// How many ticks the completed state stays visible before auto-reverting.
const COMPLETION_DISPLAY_TICKS: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    /// Countdown just finished; display window still open.
    Completed,
}

/// Core countdown engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: TimerMode,
    custom_minutes: u32,
    seconds_remaining: u32,
    state: TimerState,
    #[serde(default)]
    linger_ticks: u8,
    #[serde(default)]
    quote_index: usize,
}

impl TimerEngine {
    /// Fresh engine: focus mode, full duration, idle.
    pub fn new() -> Self {
        let mode = TimerMode::default();
        Self {
            mode,
            custom_minutes: CUSTOM_MINUTES_DEFAULT,
            seconds_remaining: mode.total_seconds(CUSTOM_MINUTES_DEFAULT),
            state: TimerState::Idle,
            linger_ticks: 0,
            quote_index: 0,
        }
    }

    /// Seed an engine from persisted snapshots.
    ///
    /// Malformed or out-of-range values are treated as absent and replaced
    /// by defaults, silently; stale state must never block startup.
    pub fn restore(store: &dyn KvStore) -> Self {
        let mut engine = Self::new();

        if let Some(n) = store
            .get_lossy(keys::CUSTOM_MINUTES)
            .and_then(|raw| raw.parse::<u32>().ok())
        {
            if (CUSTOM_MINUTES_MIN..=CUSTOM_MINUTES_MAX).contains(&n) {
                engine.custom_minutes = n;
            }
        }

        if let Some(mode) = store
            .get_lossy(keys::TIMER_MODE)
            .and_then(|raw| TimerMode::parse(&raw))
        {
            engine.mode = mode;
        }
        engine.seconds_remaining = engine.total_seconds();

        if let Some(secs) = store
            .get_lossy(keys::TIMER_TIME)
            .and_then(|raw| raw.parse::<u32>().ok())
        {
            engine.seconds_remaining = secs.min(engine.total_seconds());
        }

        engine.quote_index = quotes::random_index();
        engine
    }

    /// Write the mode / remaining-time / custom-minutes snapshots.
    ///
    /// Running/completed flags are transient and never persisted.
    pub fn persist(&self, store: &dyn KvStore) -> Result<(), crate::error::StoreError> {
        store.set(keys::TIMER_MODE, self.mode.as_str())?;
        store.set(keys::TIMER_TIME, &self.seconds_remaining.to_string())?;
        store.set(keys::CUSTOM_MINUTES, &self.custom_minutes.to_string())?;
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_completed(&self) -> bool {
        self.state == TimerState::Completed
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn total_seconds(&self) -> u32 {
        self.mode.total_seconds(self.custom_minutes)
    }

    pub fn custom_minutes(&self) -> u32 {
        self.custom_minutes
    }

    /// 0.0 .. 1.0 progress through the current countdown.
    pub fn progress(&self) -> f64 {
        let total = self.total_seconds();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.seconds_remaining as f64 / total as f64)
    }

    pub fn quote(&self) -> &'static str {
        quotes::quote(self.quote_index)
    }

    /// `m:ss` clock string for the timer face.
    pub fn clock(&self) -> String {
        let m = self.seconds_remaining / 60;
        let s = self.seconds_remaining % 60;
        format!("{m}:{s:02}")
    }

    /// Full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            mode_label: self.mode.spec().label.to_string(),
            remaining_seconds: self.seconds_remaining,
            total_seconds: self.total_seconds(),
            custom_minutes: self.custom_minutes,
            quote: self.quote().to_string(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Switch to another mode: stops the countdown, reloads the full
    /// duration for the new mode and clears any completed flag.
    pub fn switch_mode(&mut self, mode: TimerMode) -> Event {
        self.mode = mode;
        self.state = TimerState::Idle;
        self.linger_ticks = 0;
        self.seconds_remaining = self.total_seconds();
        self.quote_index = quotes::random_index();
        Event::ModeSwitched {
            mode,
            total_seconds: self.total_seconds(),
            cue: SoundCue::Switch,
            at: Utc::now(),
        }
    }

    /// Start or pause the countdown.
    ///
    /// Starting from a finished countdown (completed display window or an
    /// idle engine at zero) reloads the full duration first.
    pub fn toggle(&mut self) -> Event {
        match self.state {
            TimerState::Running => {
                self.state = TimerState::Idle;
            }
            TimerState::Idle | TimerState::Completed => {
                if self.seconds_remaining == 0 {
                    self.seconds_remaining = self.total_seconds();
                }
                self.linger_ticks = 0;
                self.state = TimerState::Running;
            }
        }
        Event::TimerToggled {
            running: self.is_running(),
            remaining_seconds: self.seconds_remaining,
            cue: SoundCue::Click,
            at: Utc::now(),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::SessionCompleted)` exactly once per countdown,
    /// on the tick that reaches zero; the engine stops itself in the same
    /// tick. While completed, ticks drain the display window instead.
    pub fn tick(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => {
                if self.seconds_remaining == 0 {
                    // Running at zero is stale state; stop.
                    self.state = TimerState::Idle;
                    return None;
                }
                self.seconds_remaining -= 1;
                if self.seconds_remaining == 0 {
                    self.state = TimerState::Completed;
                    self.linger_ticks = COMPLETION_DISPLAY_TICKS;
                    return Some(Event::SessionCompleted {
                        mode: self.mode,
                        counts_toward_stats: self.mode.counts_toward_stats(),
                        cue: SoundCue::Done,
                        at: Utc::now(),
                    });
                }
                None
            }
            TimerState::Completed => {
                self.linger_ticks = self.linger_ticks.saturating_sub(1);
                if self.linger_ticks == 0 {
                    self.state = TimerState::Idle;
                    return Some(Event::CompletionDisplayEnded { at: Utc::now() });
                }
                None
            }
            TimerState::Idle => None,
        }
    }

    /// Stop and reload the full duration for the current mode. Also rolls a
    /// fresh quote for the timer face.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.linger_ticks = 0;
        self.seconds_remaining = self.total_seconds();
        self.quote_index = quotes::random_index();
        Event::TimerReset {
            cue: SoundCue::Switch,
            at: Utc::now(),
        }
    }

    /// Update the custom duration (1-120 minutes).
    ///
    /// When idle in custom mode the remaining time follows immediately;
    /// a running countdown keeps its current remaining time.
    pub fn set_custom_minutes(&mut self, minutes: u32) -> Result<Event, ValidationError> {
        if !(CUSTOM_MINUTES_MIN..=CUSTOM_MINUTES_MAX).contains(&minutes) {
            return Err(ValidationError::OutOfRange {
                field: "custom_minutes",
                min: CUSTOM_MINUTES_MIN,
                max: CUSTOM_MINUTES_MAX,
                got: minutes,
            });
        }
        self.custom_minutes = minutes;
        if !self.is_running() && self.mode == TimerMode::Custom {
            self.seconds_remaining = minutes * 60;
        }
        Ok(Event::CustomMinutesChanged {
            minutes,
            at: Utc::now(),
        })
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}
