//! # FOCUS Core Library
//!
//! Core logic for the FOCUS productivity timer: the countdown state machine,
//! streak/daily-session stats, the session-goal checklist and the shared
//! key-value persistence they all ride on. The CLI binary (and any GUI) is a
//! thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a caller-ticked state machine; one tick is one
//!   second, with no wall-clock drift correction
//! - **Stats**: streak and sessions-today counters derived from three
//!   persisted fields, no session history
//! - **Store**: injectable string key-value port ([`KvStore`]) with a
//!   SQLite default, plus a change bus for same-process and cross-process
//!   notifications
//! - **Session**: the coordinator wiring completions to stats registration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine
//! - [`StatsTracker`]: streak computation and persistence
//! - [`FocusSession`]: engine + stats + store + bus, the app's data flow
//! - [`Config`]: TOML application configuration

pub mod config;
pub mod error;
pub mod events;
pub mod goals;
pub mod quotes;
pub mod session;
pub mod sounds;
pub mod stats;
pub mod store;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::{Event, SoundCue, SESSION_COMPLETED_EVENT};
pub use goals::{Goal, GoalList};
pub use session::FocusSession;
pub use stats::{FocusStats, StatsTracker};
pub use store::{ChangeBus, KvStore, MemoryStore, SqliteStore};
pub use timer::{TimerEngine, TimerMode, TimerState};
