use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, TimerState};

/// Name of the same-tab notification fired when a session is registered.
/// Kept identical to the browser build's DOM custom event; no payload.
pub const SESSION_COMPLETED_EVENT: &str = "focus-session-completed";

/// Sound cue the presentation layer should play for a transition.
///
/// Core never touches audio; cues ride on events and playback failures
/// (autoplay rejection and the like) are the player's problem to swallow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Click,
    Switch,
    Done,
}

/// Every state change in the timer produces an Event. The CLI prints them;
/// a GUI would subscribe to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    ModeSwitched {
        mode: TimerMode,
        total_seconds: u32,
        cue: SoundCue,
        at: DateTime<Utc>,
    },
    TimerToggled {
        running: bool,
        remaining_seconds: u32,
        cue: SoundCue,
        at: DateTime<Utc>,
    },
    TimerReset {
        cue: SoundCue,
        at: DateTime<Utc>,
    },
    CustomMinutesChanged {
        minutes: u32,
        at: DateTime<Utc>,
    },
    /// Countdown reached zero. `counts_toward_stats` is true for focus and
    /// custom sessions only; breaks complete without registering.
    SessionCompleted {
        mode: TimerMode,
        counts_toward_stats: bool,
        cue: SoundCue,
        at: DateTime<Utc>,
    },
    /// The post-completion display window ended and the timer went idle.
    CompletionDisplayEnded {
        at: DateTime<Utc>,
    },
    StatsChanged {
        streak: u32,
        sessions_today: u32,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        mode: TimerMode,
        mode_label: String,
        remaining_seconds: u32,
        total_seconds: u32,
        custom_minutes: u32,
        quote: String,
        at: DateTime<Utc>,
    },
}
