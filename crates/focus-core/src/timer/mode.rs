//! Timer modes and their per-mode configuration table.

use serde::{Deserialize, Serialize};

/// Bounds for the user-configured custom duration, in minutes.
pub const CUSTOM_MINUTES_MIN: u32 = 1;
pub const CUSTOM_MINUTES_MAX: u32 = 120;
pub const CUSTOM_MINUTES_DEFAULT: u32 = 30;

/// One of the three fixed presets or the user-configurable free mode.
///
/// The serialized names match the strings the browser build persisted, so a
/// stored `focus_timer_mode` value round-trips unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    #[default]
    Focus,
    ShortBreak,
    LongBreak,
    Custom,
}

/// Static per-mode configuration: display label, fixed duration (none for
/// custom, which carries a mutable minute value on the engine), and the
/// accent color used by whatever renders the timer face.
#[derive(Debug, Clone, Copy)]
pub struct ModeSpec {
    pub label: &'static str,
    pub minutes: Option<u32>,
    pub accent_hex: &'static str,
}

impl TimerMode {
    pub const ALL: [TimerMode; 4] = [
        TimerMode::Focus,
        TimerMode::ShortBreak,
        TimerMode::LongBreak,
        TimerMode::Custom,
    ];

    pub fn spec(self) -> ModeSpec {
        match self {
            TimerMode::Focus => ModeSpec {
                label: "Deep Focus",
                minutes: Some(25),
                accent_hex: "#06b6d4",
            },
            TimerMode::ShortBreak => ModeSpec {
                label: "Short Break",
                minutes: Some(5),
                accent_hex: "#10b981",
            },
            TimerMode::LongBreak => ModeSpec {
                label: "Long Break",
                minutes: Some(15),
                accent_hex: "#8b5cf6",
            },
            TimerMode::Custom => ModeSpec {
                label: "Free",
                minutes: None,
                accent_hex: "#f59e0b",
            },
        }
    }

    /// Duration in seconds, with `custom_minutes` supplying the free mode.
    pub fn total_seconds(self, custom_minutes: u32) -> u32 {
        self.spec().minutes.unwrap_or(custom_minutes).saturating_mul(60)
    }

    /// Whether a completed countdown in this mode counts toward streak and
    /// daily stats. Breaks do not.
    pub fn counts_toward_stats(self) -> bool {
        matches!(self, TimerMode::Focus | TimerMode::Custom)
    }

    /// The persisted string form (`focus`, `shortBreak`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            TimerMode::Focus => "focus",
            TimerMode::ShortBreak => "shortBreak",
            TimerMode::LongBreak => "longBreak",
            TimerMode::Custom => "custom",
        }
    }

    /// Parse the persisted string form. Unknown strings read as `None`;
    /// callers fall back to the default mode.
    pub fn parse(s: &str) -> Option<Self> {
        TimerMode::ALL.into_iter().find(|m| m.as_str() == s)
    }
}
